//! UI 状态
//!
//! 任意时刻恰好处于一种状态；变更只通过控制器的命名转换发生

use crate::models::IntersectionResponse;

/// 可见状态机的状态
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    /// 空闲，无任何进行中的提交
    Idle,
    /// 等待后端响应，附带处理指示文案
    Loading { message: String },
    /// 成功结果已渲染
    Result(IntersectionResponse),
    /// 错误面板可见，附带面板文案
    Error { message: String },
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading { .. } => "loading",
            UiState::Result(_) => "result",
            UiState::Error { .. } => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }
}
