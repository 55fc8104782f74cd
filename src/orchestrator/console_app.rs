//! 控制台应用 - 编排层
//!
//! 管理应用生命周期（装配、命令循环、退出），把每条用户命令
//! 交给流程层处理。诊断通道在这里选定：记录实现或空实现

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::config::Config;
use crate::infrastructure::ConsoleSurface;
use crate::models::SetSpec;
use crate::orchestrator::command::{self, Command};
use crate::services::diagnostics::{DiagnosticSink, NoopSink, RecordingSink};
use crate::ui::{FileSelection, UiController};
use crate::workflow::SubmissionFlow;

/// 应用主结构
pub struct App {
    config: Config,
    flow: SubmissionFlow,
    controller: UiController<ConsoleSurface>,
    files: FileSelection,
    sink: Arc<dyn DiagnosticSink>,
}

impl App {
    /// 初始化应用
    ///
    /// 根据配置选择诊断实现，创建控制器（含启动能力检查）与流程
    pub fn initialize(config: Config) -> Result<Self> {
        let sink: Arc<dyn DiagnosticSink> = if config.record_diagnostics {
            Arc::new(RecordingSink::new())
        } else {
            Arc::new(NoopSink)
        };

        let controller = UiController::new(ConsoleSurface::new(), sink.clone());
        let flow = SubmissionFlow::new(&config, sink.clone())?;

        Ok(Self {
            config,
            flow,
            controller,
            files: FileSelection::new(),
            sink,
        })
    }

    /// 运行应用主循环
    pub async fn run(mut self) -> Result<()> {
        log_startup(&self.config);
        print_usage();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt();

        while let Some(line) = lines.next_line().await? {
            match command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command).await,
                // 空行直接回到提示符
                Err(message) if message.is_empty() => {}
                Err(message) => println!("{}", message),
            }
            prompt();
        }

        info!("👋 退出");
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Manual { sender, receiver } => {
                self.flow
                    .run_manual(&mut self.controller, &sender, &receiver)
                    .await;
            }
            Command::SelectSender(path) => self.select(path, true),
            Command::SelectReceiver(path) => self.select(path, false),
            Command::UseDefault(enabled) => {
                self.files.set_use_default(enabled);
                self.sink
                    .record(&format!("use default files: {}", enabled));
                if enabled {
                    println!("file inputs disabled, selections cleared");
                } else {
                    println!("file inputs enabled");
                }
            }
            Command::SubmitFiles => self.submit_files().await,
            Command::TestData => self.flow.run_test_sets(&mut self.controller).await,
            Command::ToggleLog => self.controller.toggle_diagnostics(),
            Command::Help => print_usage(),
            // Quit 在主循环里处理
            Command::Quit => {}
        }
    }

    fn select(&mut self, path: PathBuf, is_sender: bool) {
        let accepted = if is_sender {
            self.files.select_sender(path.clone())
        } else {
            self.files.select_receiver(path.clone())
        };

        if accepted {
            println!(
                "selected {} file: {}",
                if is_sender { "sender" } else { "receiver" },
                path.display()
            );
        } else {
            self.sink
                .record("file selection refused: inputs disabled");
            println!("file inputs are disabled while default files are in use");
        }
    }

    async fn submit_files(&mut self) {
        if self.files.use_default() {
            self.flow
                .run_files(&mut self.controller, None, None, true)
                .await;
            return;
        }

        let sender = match Self::load(self.files.sender()).await {
            Ok(spec) => spec,
            Err(message) => {
                self.controller.fail_with_message(&message);
                return;
            }
        };
        let receiver = match Self::load(self.files.receiver()).await {
            Ok(spec) => spec,
            Err(message) => {
                self.controller.fail_with_message(&message);
                return;
            }
        };

        self.flow
            .run_files(&mut self.controller, sender, receiver, false)
            .await;
    }

    /// 读取选中的文件；未选择返回 None，缺文件的文案交给校验服务
    async fn load(path: Option<&Path>) -> Result<Option<SetSpec>, String> {
        match path {
            None => Ok(None),
            Some(path) => SetSpec::from_path(path)
                .await
                .map(Some)
                .map_err(|e| e.to_string()),
        }
    }
}

// ========== 启动输出辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 集合交集控制台客户端");
    info!("🌐 后端服务: {}", config.server_base_url);
    info!("{}", "=".repeat(60));
}

fn print_usage() {
    println!("commands:");
    println!("  manual <sender set> ; <receiver set>   submit two inline sets");
    println!("  sender <path>                          choose the sender file");
    println!("  receiver <path>                        choose the receiver file");
    println!("  default on|off                         toggle server-side default files");
    println!("  submit                                 submit the chosen files");
    println!("  testdata                               generate test sets on the server");
    println!("  log                                    toggle the diagnostic log panel");
    println!("  help                                   show this message");
    println!("  quit                                   exit");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
