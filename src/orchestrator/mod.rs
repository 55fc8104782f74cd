//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责命令调度和应用生命周期，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `console_app` - 控制台应用
//! - 管理应用生命周期（装配、命令循环、退出）
//! - 选定诊断实现（记录 / 空实现）
//! - 持有 UI 控制器与文件选择状态
//!
//! ### `command` - 命令解析
//! - 把一行输入解析为编排动作
//! - 解析失败给出用法提示
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (命令循环)
//!     ↓
//! workflow::SubmissionFlow (处理单次提交)
//!     ↓
//! services (能力层：validate / build / interpret / diagnostics)
//!     ↓
//! clients (传输) + infrastructure (渲染表面)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：App 管循环与装配，SubmissionFlow 管单次提交
//! 2. **资源隔离**：只有编排层持有渲染表面与文件选择状态
//! 3. **向下依赖**：编排层 → workflow → services → clients/infrastructure
//! 4. **无业务逻辑**：只做调度，不做校验与解释

pub mod command;
pub mod console_app;

// 重新导出主要类型
pub use command::Command;
pub use console_app::App;
