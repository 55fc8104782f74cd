use std::sync::Arc;

use intersection_console::infrastructure::ConsoleSurface;
use intersection_console::services::diagnostics::{DiagnosticSink, RecordingSink};
use intersection_console::utils::logging;
use intersection_console::{Config, SetSpec, SubmissionFlow, UiController, UiState};

fn build_flow(config: &Config) -> (SubmissionFlow, UiController<ConsoleSurface>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let controller =
        UiController::new(ConsoleSurface::new(), sink.clone() as Arc<dyn DiagnosticSink>);
    let flow = SubmissionFlow::new(config, sink.clone() as Arc<dyn DiagnosticSink>)
        .expect("创建提交流程失败");
    (flow, controller, sink)
}

#[tokio::test]
async fn test_manual_validation_failure_never_touches_network() {
    logging::init(false);

    // 指向一个不存在的后端：校验失败时不应发出任何请求
    let config = Config {
        server_base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    };
    let (flow, mut controller, sink) = build_flow(&config);

    flow.run_manual(&mut controller, "", "2,3").await;

    assert_eq!(
        controller.state(),
        &UiState::Error {
            message: "both sets required".to_string()
        }
    );
    assert!(sink
        .entries()
        .iter()
        .all(|e| !e.message.starts_with("request dispatched")));
}

#[tokio::test]
async fn test_unreachable_backend_lands_in_error_state() {
    logging::init(false);

    let config = Config {
        server_base_url: "http://127.0.0.1:1".to_string(),
        http_timeout_secs: 5,
        ..Config::default()
    };
    let (flow, mut controller, _sink) = build_flow(&config);

    flow.run_manual(&mut controller, "1,2,3", "2,3,4").await;

    match controller.state() {
        UiState::Error { message } => {
            assert!(message.starts_with("Error: "), "实际文案: {}", message);
        }
        other => panic!("预期错误状态，实际: {:?}", other),
    }
}

#[tokio::test]
#[ignore] // 默认忽略，需要本地后端：cargo test -- --ignored
async fn test_manual_intersection_roundtrip() {
    logging::init(false);

    let config = Config::from_env();
    let (flow, mut controller, _sink) = build_flow(&config);

    flow.run_manual(&mut controller, "1,2,3", "2,3,4").await;

    match controller.state() {
        UiState::Result(result) => {
            assert!(result.success);
            assert!(result.sizes_consistent());
        }
        other => panic!("预期结果状态，实际: {:?}", other),
    }
}

#[tokio::test]
#[ignore]
async fn test_file_upload_roundtrip() {
    logging::init(false);

    let config = Config::from_env();
    let (flow, mut controller, sink) = build_flow(&config);

    let sender = SetSpec::file("sender.txt", b"1,2,3".to_vec());
    let receiver = SetSpec::file("receiver.csv", b"2,3,4".to_vec());

    flow.run_files(&mut controller, Some(sender), Some(receiver), false)
        .await;

    match controller.state() {
        UiState::Result(result) => assert!(result.sizes_consistent()),
        other => panic!("预期结果状态，实际: {:?}", other),
    }

    // 文件提交会记录完整的响应载荷
    assert!(sink
        .entries()
        .iter()
        .any(|e| e.message.starts_with("response payload:")));
}

#[tokio::test]
#[ignore]
async fn test_default_files_roundtrip() {
    logging::init(false);

    let config = Config::from_env();
    let (flow, mut controller, _sink) = build_flow(&config);

    flow.run_files(&mut controller, None, None, true).await;

    match controller.state() {
        UiState::Result(result) => assert!(result.sizes_consistent()),
        other => panic!("预期结果状态，实际: {:?}", other),
    }
}

#[tokio::test]
#[ignore]
async fn test_generate_test_sets_returns_to_idle() {
    logging::init(false);

    let config = Config::from_env();
    let (flow, mut controller, _sink) = build_flow(&config);

    flow.run_test_sets(&mut controller).await;

    assert_eq!(controller.state(), &UiState::Idle);
}
