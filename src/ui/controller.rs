//! UI 状态控制器
//!
//! 可见状态的唯一拥有者。所有变更都通过命名转换进行，
//! 直接的字段写入不对外暴露。
//!
//! 转换表：
//! - 任意状态 → Loading：校验通过的用户动作；无条件隐藏旧结果与旧错误
//! - Loading → Result：成功结果；渲染四个目标字段并聚焦结果面板
//! - Loading → Error：传输/解释失败；文案加 "Error: " 前缀并聚焦
//! - 校验失败：不经过 Loading，文案原样进入错误面板
//!
//! 离开 Loading 时总是隐藏处理指示，但绝不顺带隐藏已显示的结果面板。
//! 带过期序号的完成通知会被忽略并记入诊断日志

use std::sync::Arc;

use tracing::warn;

use crate::infrastructure::surface::{Panel, RenderSurface, RenderTarget, REQUIRED_TARGETS};
use crate::models::IntersectionResponse;
use crate::services::diagnostics::DiagnosticSink;
use crate::ui::state::UiState;

/// UI 状态控制器
pub struct UiController<S: RenderSurface> {
    surface: S,
    sink: Arc<dyn DiagnosticSink>,
    state: UiState,
    latest_seq: u64,
    targets_ready: bool,
    diagnostics_visible: bool,
}

impl<S: RenderSurface> UiController<S> {
    /// 创建控制器并执行启动能力检查
    ///
    /// 四个必需渲染目标在这里一次性探测；缺失时后续渲染
    /// 直接降级为"记录并放弃"，不再逐次检查
    pub fn new(surface: S, sink: Arc<dyn DiagnosticSink>) -> Self {
        let mut targets_ready = true;
        for target in REQUIRED_TARGETS {
            let present = surface.has_target(target);
            sink.record(&format!(
                "page-ready check: {} present={}",
                target.label(),
                present
            ));
            if !present {
                warn!("渲染目标缺失: {}", target.label());
                targets_ready = false;
            }
        }

        Self {
            surface,
            sink,
            state: UiState::Idle,
            latest_seq: 0,
            targets_ready,
            diagnostics_visible: false,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn diagnostics_visible(&self) -> bool {
        self.diagnostics_visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// 进入 Loading
    ///
    /// 无论提交方式，这里都会隐藏上一轮的结果面板和错误面板
    pub fn begin_loading(&mut self, seq: u64, message: &str) {
        self.latest_seq = seq;
        self.surface.set_target(RenderTarget::LoadingMessage, message);
        self.surface.set_panel_visible(Panel::Result, false);
        self.surface.set_panel_visible(Panel::Error, false);
        self.surface.set_panel_visible(Panel::Loading, true);
        self.state = UiState::Loading {
            message: message.to_string(),
        };
    }

    /// Loading → Result
    ///
    /// # 参数
    /// - `seq`: 本次提交的序号，过期则整体忽略
    /// - `file_based`: 文件路径的提交在结果出现时强制展开诊断面板
    pub fn show_result(&mut self, seq: u64, file_based: bool, response: &IntersectionResponse) {
        if self.is_stale(seq, "result") {
            return;
        }
        self.surface.set_panel_visible(Panel::Loading, false);

        if !self.targets_ready {
            // 成功的计算不因呈现缺陷伪装成错误：只记录，不渲染
            self.sink
                .record("render defect: required targets missing, result dropped");
            warn!("渲染目标缺失，本次结果未展示");
            if file_based {
                self.reveal_diagnostics();
            }
            self.state = UiState::Idle;
            return;
        }

        self.surface
            .set_target(RenderTarget::SenderSize, &response.sender_size.to_string());
        self.surface.set_target(
            RenderTarget::ReceiverSize,
            &response.receiver_size.to_string(),
        );
        self.surface.set_target(
            RenderTarget::IntersectionSize,
            &response.intersection_size.to_string(),
        );
        self.surface.set_target(
            RenderTarget::IntersectionList,
            &response.joined_intersection(),
        );
        self.sink.record(&format!("render: {}", response));

        self.surface.set_panel_visible(Panel::Result, true);
        self.surface.focus(Panel::Result);
        self.state = UiState::Result(response.clone());

        if file_based {
            self.reveal_diagnostics();
        }
    }

    /// Loading → Error（传输/解释失败，带 "Error: " 前缀）
    pub fn fail(&mut self, seq: u64, message: &str) {
        if self.is_stale(seq, "error") {
            return;
        }
        self.surface.set_panel_visible(Panel::Loading, false);
        self.show_error_panel(&format!("Error: {}", message));
    }

    /// 校验失败或本地 IO 失败：不经过 Loading，文案原样显示
    pub fn fail_with_message(&mut self, message: &str) {
        self.show_error_panel(message);
    }

    /// 清除当前显示的错误面板
    ///
    /// 文件提交在进入校验前调用；手动提交不做这一步，
    /// 它只依赖进入 Loading 时的无条件隐藏
    pub fn clear_error(&mut self) {
        self.surface.set_panel_visible(Panel::Error, false);
    }

    /// 测试数据请求完成：渲染 test-info 并回到空闲
    pub fn complete_test_info(&mut self, seq: u64, text: &str) {
        if self.is_stale(seq, "test info") {
            return;
        }
        self.surface.set_panel_visible(Panel::Loading, false);
        self.surface.set_target(RenderTarget::TestInfo, text);
        self.state = UiState::Idle;
    }

    /// 切换诊断面板可见性（用户显式动作）
    pub fn toggle_diagnostics(&mut self) {
        if self.diagnostics_visible {
            self.diagnostics_visible = false;
            self.surface.set_panel_visible(Panel::Diagnostics, false);
        } else {
            self.reveal_diagnostics();
        }
    }

    /// 强制展开诊断面板
    pub fn reveal_diagnostics(&mut self) {
        self.diagnostics_visible = true;
        let entries = self.sink.entries();
        self.surface.render_diagnostics(&entries);
        self.surface.set_panel_visible(Panel::Diagnostics, true);
    }

    fn show_error_panel(&mut self, text: &str) {
        self.surface.set_target(RenderTarget::ErrorText, text);
        self.surface.set_panel_visible(Panel::Error, true);
        self.surface.focus(Panel::Error);
        self.state = UiState::Error {
            message: text.to_string(),
        };
    }

    fn is_stale(&self, seq: u64, what: &str) -> bool {
        if seq != self.latest_seq {
            self.sink.record(&format!(
                "stale {} ignored: seq={} latest={}",
                what, seq, self.latest_seq
            ));
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::diagnostics::{DiagnosticEntry, RecordingSink};
    use std::collections::{HashMap, HashSet};

    /// 测试用渲染表面：可配置缺失目标，记录全部写入
    struct MockSurface {
        missing: HashSet<RenderTarget>,
        targets: HashMap<RenderTarget, String>,
        visible: HashSet<Panel>,
        focused: Vec<Panel>,
        diagnostics_rendered: usize,
    }

    impl MockSurface {
        fn new() -> Self {
            Self {
                missing: HashSet::new(),
                targets: HashMap::new(),
                visible: HashSet::new(),
                focused: Vec::new(),
                diagnostics_rendered: 0,
            }
        }

        fn without(target: RenderTarget) -> Self {
            let mut surface = Self::new();
            surface.missing.insert(target);
            surface
        }

        fn target(&self, target: RenderTarget) -> Option<&str> {
            self.targets.get(&target).map(String::as_str)
        }

        fn is_visible(&self, panel: Panel) -> bool {
            self.visible.contains(&panel)
        }
    }

    impl RenderSurface for MockSurface {
        fn has_target(&self, target: RenderTarget) -> bool {
            !self.missing.contains(&target)
        }

        fn set_target(&mut self, target: RenderTarget, text: &str) {
            self.targets.insert(target, text.to_string());
        }

        fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
            if visible {
                self.visible.insert(panel);
            } else {
                self.visible.remove(&panel);
            }
        }

        fn focus(&mut self, panel: Panel) {
            self.focused.push(panel);
        }

        fn render_diagnostics(&mut self, _entries: &[DiagnosticEntry]) {
            self.diagnostics_rendered += 1;
        }
    }

    fn controller_with(
        surface: MockSurface,
    ) -> (UiController<MockSurface>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let controller = UiController::new(surface, sink.clone() as Arc<dyn DiagnosticSink>);
        (controller, sink)
    }

    fn sample_response() -> IntersectionResponse {
        IntersectionResponse {
            success: true,
            sender_size: 3,
            receiver_size: 2,
            intersection_size: 1,
            intersection: vec!["x".to_string()],
            error: None,
        }
    }

    #[test]
    fn test_startup_capability_check_is_recorded() {
        let (_controller, sink) = controller_with(MockSurface::new());
        let entries = sink.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries
            .iter()
            .all(|e| e.message.starts_with("page-ready check:")));
        assert!(entries[0].message.contains("sender-size present=true"));
    }

    #[test]
    fn test_begin_loading_hides_previous_panels() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.fail_with_message("both sets required");
        assert!(controller.surface().is_visible(Panel::Error));

        controller.begin_loading(1, "computing set intersection...");
        assert!(controller.state().is_loading());
        assert!(controller.surface().is_visible(Panel::Loading));
        assert!(!controller.surface().is_visible(Panel::Error));
        assert!(!controller.surface().is_visible(Panel::Result));
        assert_eq!(
            controller.surface().target(RenderTarget::LoadingMessage),
            Some("computing set intersection...")
        );
    }

    #[test]
    fn test_result_renders_fields_and_reveals_panel() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "computing set intersection...");
        controller.show_result(1, false, &sample_response());

        let surface = controller.surface();
        assert_eq!(surface.target(RenderTarget::SenderSize), Some("3"));
        assert_eq!(surface.target(RenderTarget::ReceiverSize), Some("2"));
        assert_eq!(surface.target(RenderTarget::IntersectionSize), Some("1"));
        assert_eq!(surface.target(RenderTarget::IntersectionList), Some("x"));
        assert!(surface.is_visible(Panel::Result));
        assert!(!surface.is_visible(Panel::Loading));
        assert_eq!(surface.focused, vec![Panel::Result]);
        assert!(matches!(controller.state(), UiState::Result(_)));
        // 手动路径不自动展开诊断面板
        assert!(!controller.diagnostics_visible());
    }

    #[test]
    fn test_failure_prefixes_message_and_keeps_result_hidden() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "computing set intersection...");
        controller.fail(1, "bad input");

        let surface = controller.surface();
        assert_eq!(
            surface.target(RenderTarget::ErrorText),
            Some("Error: bad input")
        );
        assert!(surface.is_visible(Panel::Error));
        assert!(!surface.is_visible(Panel::Result));
        assert!(!surface.is_visible(Panel::Loading));
        assert_eq!(
            controller.state(),
            &UiState::Error {
                message: "Error: bad input".to_string()
            }
        );
    }

    #[test]
    fn test_validation_failure_shows_message_as_is() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.fail_with_message("both sets required");

        assert_eq!(
            controller.surface().target(RenderTarget::ErrorText),
            Some("both sets required")
        );
        assert!(controller.surface().is_visible(Panel::Error));
    }

    #[test]
    fn test_validation_failure_leaves_result_panel_alone() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "computing set intersection...");
        controller.show_result(1, false, &sample_response());

        // 下一次输入校验失败不应撤下已显示的结果
        controller.fail_with_message("both sets required");
        assert!(controller.surface().is_visible(Panel::Result));
        assert!(controller.surface().is_visible(Panel::Error));
    }

    #[test]
    fn test_stale_completions_are_ignored() {
        let (mut controller, sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "uploading and processing files...");
        controller.begin_loading(2, "uploading and processing files...");

        controller.show_result(1, true, &sample_response());
        assert!(controller.state().is_loading());
        assert!(!controller.surface().is_visible(Panel::Result));
        assert!(sink
            .entries()
            .iter()
            .any(|e| e.message.contains("stale result ignored: seq=1 latest=2")));

        controller.fail(1, "late failure");
        assert!(controller.state().is_loading());

        controller.show_result(2, false, &sample_response());
        assert!(matches!(controller.state(), UiState::Result(_)));
    }

    #[test]
    fn test_missing_target_aborts_render_without_error() {
        let (mut controller, sink) =
            controller_with(MockSurface::without(RenderTarget::IntersectionList));
        controller.begin_loading(1, "uploading and processing files...");
        controller.show_result(1, true, &sample_response());

        let surface = controller.surface();
        assert!(!surface.is_visible(Panel::Result));
        assert!(!surface.is_visible(Panel::Error));
        assert!(!surface.is_visible(Panel::Loading));
        assert!(sink
            .entries()
            .iter()
            .any(|e| e.message.contains("render defect")));
        // 文件路径的渲染缺陷强制展开诊断面板
        assert!(controller.diagnostics_visible());
        assert_eq!(controller.state(), &UiState::Idle);
    }

    #[test]
    fn test_missing_target_manual_path_keeps_diagnostics_hidden() {
        let (mut controller, _sink) =
            controller_with(MockSurface::without(RenderTarget::SenderSize));
        controller.begin_loading(1, "computing set intersection...");
        controller.show_result(1, false, &sample_response());
        assert!(!controller.diagnostics_visible());
    }

    #[test]
    fn test_file_path_result_force_reveals_diagnostics() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "processing default files...");
        controller.show_result(1, true, &sample_response());
        assert!(controller.diagnostics_visible());
        assert!(controller.surface().is_visible(Panel::Diagnostics));
    }

    #[test]
    fn test_toggle_diagnostics() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.toggle_diagnostics();
        assert!(controller.diagnostics_visible());
        assert_eq!(controller.surface().diagnostics_rendered, 1);

        controller.toggle_diagnostics();
        assert!(!controller.diagnostics_visible());
        assert!(!controller.surface().is_visible(Panel::Diagnostics));
    }

    #[test]
    fn test_test_info_returns_to_idle() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "generating test data...");
        controller.complete_test_info(1, "generated | sender set size: 10 | receiver set size: 8");

        assert_eq!(controller.state(), &UiState::Idle);
        assert!(!controller.surface().is_visible(Panel::Loading));
        assert_eq!(
            controller.surface().target(RenderTarget::TestInfo),
            Some("generated | sender set size: 10 | receiver set size: 8")
        );
    }

    #[test]
    fn test_clear_error_only_hides_error_panel() {
        let (mut controller, _sink) = controller_with(MockSurface::new());
        controller.begin_loading(1, "computing set intersection...");
        controller.show_result(1, false, &sample_response());
        controller.fail_with_message("both files required");

        controller.clear_error();
        assert!(!controller.surface().is_visible(Panel::Error));
        assert!(controller.surface().is_visible(Panel::Result));
    }
}
