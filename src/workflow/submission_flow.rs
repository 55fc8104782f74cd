//! 提交处理流程 - 流程层
//!
//! 核心职责：定义"一次用户动作"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验 → 构建 → 发送 → 解释 → 渲染
//! 2. 诊断通道观察每个阶段，但不参与控制流
//! 3. 任何失败都终止在错误面板（渲染缺陷除外）

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::clients::{IntersectionClient, RawResponse};
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::surface::RenderSurface;
use crate::models::{OutboundSubmission, SetSpec, SubmissionMode};
use crate::services::diagnostics::DiagnosticSink;
use crate::services::{InputValidator, ResultInterpreter, SubmissionBuilder};
use crate::ui::UiController;
use crate::workflow::submission_ctx::{ActionKind, SubmissionCtx};

/// 处理指示文案，按提交方式区分
const MSG_LOADING_MANUAL: &str = "computing set intersection...";
const MSG_LOADING_FILES: &str = "uploading and processing files...";
const MSG_LOADING_DEFAULT: &str = "processing default files...";
const MSG_LOADING_TEST_DATA: &str = "generating test data...";

/// 提交处理流程
///
/// - 编排一次提交的全部阶段
/// - 不持有 UI 状态，渲染通过控制器的命名转换完成
/// - 只依赖业务能力（services）与传输客户端
pub struct SubmissionFlow {
    validator: InputValidator,
    builder: SubmissionBuilder,
    client: IntersectionClient,
    interpreter: ResultInterpreter,
    sink: Arc<dyn DiagnosticSink>,
}

impl SubmissionFlow {
    /// 创建新的提交处理流程
    pub fn new(config: &Config, sink: Arc<dyn DiagnosticSink>) -> AppResult<Self> {
        Ok(Self {
            validator: InputValidator::new(),
            builder: SubmissionBuilder::new(),
            client: IntersectionClient::new(config)?,
            interpreter: ResultInterpreter::new(),
            sink,
        })
    }

    /// 手动输入提交
    pub async fn run_manual<S: RenderSurface>(
        &self,
        controller: &mut UiController<S>,
        sender_text: &str,
        receiver_text: &str,
    ) {
        self.sink.record("submission mode: manual");

        let sender = SetSpec::inline(sender_text);
        let receiver = SetSpec::inline(receiver_text);

        if let Err(e) =
            self.validator
                .validate(SubmissionMode::Manual, Some(&sender), Some(&receiver))
        {
            self.sink.record(&format!("validation failed: {}", e));
            warn!("手动提交校验失败: {}", e);
            controller.fail_with_message(&e.to_string());
            return;
        }

        let submission = match self.builder.build_manual(sender, receiver) {
            Ok(submission) => submission,
            Err(e) => {
                controller.fail_with_message(&e.to_string());
                return;
            }
        };

        let ctx = SubmissionCtx::new(submission.seq(), ActionKind::Manual);
        self.dispatch_intersection(controller, &ctx, submission, MSG_LOADING_MANUAL)
            .await;
    }

    /// 文件上传提交（含"使用默认文件"快捷方式）
    ///
    /// 新一轮文件提交开始时清空诊断日志，并先清除上一次的错误提示
    pub async fn run_files<S: RenderSurface>(
        &self,
        controller: &mut UiController<S>,
        sender: Option<SetSpec>,
        receiver: Option<SetSpec>,
        use_default: bool,
    ) {
        let mode = if use_default {
            SubmissionMode::FileUploadDefault
        } else {
            SubmissionMode::FileUpload
        };

        self.sink.clear();
        self.sink
            .record(&format!("submission mode: {}", ActionKind::from(mode).label()));
        controller.clear_error();

        if let Err(e) = self
            .validator
            .validate(mode, sender.as_ref(), receiver.as_ref())
        {
            self.sink.record(&format!("validation failed: {}", e));
            warn!("文件提交校验失败: {}", e);
            controller.fail_with_message(&e.to_string());
            return;
        }

        let built = if use_default {
            Ok(self.builder.build_default_files())
        } else {
            match (sender, receiver) {
                (Some(sender), Some(receiver)) => self.builder.build_files(sender, receiver),
                // 校验已拦截缺文件的情况，这里兜底同一文案
                _ => Err(crate::error::ValidationError::BothFilesRequired),
            }
        };

        let submission = match built {
            Ok(submission) => submission,
            Err(e) => {
                controller.fail_with_message(&e.to_string());
                return;
            }
        };

        let ctx = SubmissionCtx::new(submission.seq(), ActionKind::from(mode));
        let message = if use_default {
            MSG_LOADING_DEFAULT
        } else {
            MSG_LOADING_FILES
        };
        self.dispatch_intersection(controller, &ctx, submission, message)
            .await;
    }

    /// 测试数据生成请求
    pub async fn run_test_sets<S: RenderSurface>(&self, controller: &mut UiController<S>) {
        self.sink.record("submission mode: test-data");

        let submission = self.builder.build_test_sets();
        let ctx = SubmissionCtx::new(submission.seq(), ActionKind::TestData);

        controller.begin_loading(ctx.seq, MSG_LOADING_TEST_DATA);

        let raw = match self.send(&ctx, &submission).await {
            Ok(raw) => raw,
            Err(message) => {
                controller.fail(ctx.seq, &message);
                return;
            }
        };

        match self.interpreter.interpret_test_sets(&raw) {
            Ok(response) => {
                info!(
                    "{} ✓ 测试数据已生成: sender={} receiver={}",
                    ctx, response.sender_size, response.receiver_size
                );
                controller.complete_test_info(ctx.seq, &response.summary());
            }
            Err(e) => {
                warn!("{} ⚠️ 测试数据生成失败: {}", ctx, e);
                controller.fail(ctx.seq, &e.to_string());
            }
        }
    }

    /// 交集提交的公共后半段：进入 Loading → 发送 → 解释 → 渲染
    async fn dispatch_intersection<S: RenderSurface>(
        &self,
        controller: &mut UiController<S>,
        ctx: &SubmissionCtx,
        submission: OutboundSubmission,
        loading_message: &str,
    ) {
        controller.begin_loading(ctx.seq, loading_message);

        let raw = match self.send(ctx, &submission).await {
            Ok(raw) => raw,
            Err(message) => {
                controller.fail(ctx.seq, &message);
                return;
            }
        };

        match self.interpreter.interpret_intersection(&raw) {
            Ok(response) => {
                info!("{} ✓ 交集计算完成: {}", ctx, response);
                controller.show_result(ctx.seq, ctx.kind.is_file_based(), &response);
            }
            Err(e) => {
                warn!("{} ⚠️ 响应解释失败: {}", ctx, e);
                controller.fail(ctx.seq, &e.to_string());
            }
        }
    }

    /// 发送请求并记录响应；返回出错时的用户文案
    async fn send(
        &self,
        ctx: &SubmissionCtx,
        submission: &OutboundSubmission,
    ) -> Result<RawResponse, String> {
        info!("{} 📤 正在发送请求: {}", ctx, submission.endpoint());
        self.sink
            .record(&format!("request dispatched: {}", submission.endpoint()));

        match self.client.dispatch(submission).await {
            Ok(raw) => {
                self.sink.record(&format!("response status: {}", raw.status));
                self.sink.record(&format!("response payload: {}", raw.body));
                Ok(raw)
            }
            Err(e) => {
                self.sink.record(&format!("transport failure: {}", e));
                error!("{} ❌ 请求失败: {}", ctx, e);
                Err(e.to_string())
            }
        }
    }
}
