//! # Intersection Console
//!
//! 集合交集计算服务的控制台客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有呈现资源（渲染表面），只暴露能力
//! - `ConsoleSurface` - 唯一的页面 owner，提供目标写入 / 面板切换能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次提交的一个环节
//! - `InputValidator` - 触网前的本地校验能力
//! - `SubmissionBuilder` - 出站请求构建能力（含序号分配）
//! - `ResultInterpreter` - 响应分类能力
//! - `DiagnosticSink` - 诊断记录能力（记录 / 空实现二选一）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次用户动作"的完整处理流程
//! - `SubmissionCtx` - 上下文封装（序号 + 动作类别）
//! - `SubmissionFlow` - 流程编排（校验 → 构建 → 发送 → 解释 → 渲染）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/console_app` - 控制台应用，管理命令循环和装配
//! - `orchestrator/command` - 用户命令解析
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{IntersectionClient, RawResponse};
pub use config::Config;
pub use error::{AppError, AppResult, ValidationError};
pub use infrastructure::ConsoleSurface;
pub use models::{IntersectionResponse, SetSpec, SubmissionMode, TestSetsResponse};
pub use orchestrator::App;
pub use services::{InputValidator, ResultInterpreter, SubmissionBuilder};
pub use ui::{FileSelection, UiController, UiState};
pub use workflow::{SubmissionCtx, SubmissionFlow};
