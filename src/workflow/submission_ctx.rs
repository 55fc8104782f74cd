//! 提交上下文
//!
//! 封装"我正在处理第几号、哪种提交"这一信息

use std::fmt::Display;

use crate::models::SubmissionMode;

/// 用户动作类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Manual,
    FileUpload,
    FileUploadDefault,
    TestData,
}

impl ActionKind {
    /// 是否属于文件路径（诊断日志的清空与自动展开只对它生效）
    pub fn is_file_based(&self) -> bool {
        matches!(self, Self::FileUpload | Self::FileUploadDefault)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::FileUpload => "file-upload",
            Self::FileUploadDefault => "default-files",
            Self::TestData => "test-data",
        }
    }
}

impl From<SubmissionMode> for ActionKind {
    fn from(mode: SubmissionMode) -> Self {
        match mode {
            SubmissionMode::Manual => Self::Manual,
            SubmissionMode::FileUpload => Self::FileUpload,
            SubmissionMode::FileUploadDefault => Self::FileUploadDefault,
        }
    }
}

/// 提交上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 构建时分配的提交序号
    pub seq: u64,

    /// 用户动作类别
    pub kind: ActionKind,
}

impl SubmissionCtx {
    pub fn new(seq: u64, kind: ActionKind) -> Self {
        Self { seq, kind }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[submission {}: {}]", self.seq, self.kind.label())
    }
}
