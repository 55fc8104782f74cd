//! 提交数据模型
//!
//! 定义一次用户动作携带的集合数据（内联文本或文件）以及
//! 构建完成后的出站请求形态。字段名与端点路径属于线上契约，
//! 必须与后端逐字节一致。

use std::path::Path;

use anyhow::{Context, Result};

// ========== 线上契约常量 ==========

/// 内联计算端点
pub const ENDPOINT_CALCULATE: &str = "/calculate-intersection";
/// 文件计算端点
pub const ENDPOINT_CALCULATE_FILES: &str = "/calculate-intersection-files";
/// 测试数据生成端点
pub const ENDPOINT_GENERATE_TEST_SETS: &str = "/generate-test-sets";

/// 内联文本表单字段
pub const FIELD_SENDER_SET: &str = "sender_set";
pub const FIELD_RECEIVER_SET: &str = "receiver_set";

/// 文件附件表单字段（即使不使用也必须同时在场）
pub const FIELD_SENDER_FILE: &str = "sender_file";
pub const FIELD_RECEIVER_FILE: &str = "receiver_file";

/// 让后端忽略附件、改用默认数据集的标志字段及其取值
pub const FIELD_USE_DEFAULT_FILES: &str = "use_default_files";
pub const USE_DEFAULT_FILES_VALUE: &str = "true";

/// 默认文件快捷方式使用的零长度占位附件名
pub const PLACEHOLDER_FILE_NAME: &str = "empty.txt";

/// 提交方式
///
/// 决定填充哪些字段、指向哪个端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// 手动输入两段文本
    Manual,
    /// 上传两个真实文件
    FileUpload,
    /// 使用后端默认文件（附件为占位）
    FileUploadDefault,
}

impl SubmissionMode {
    /// 是否走文件端点（诊断日志的清空与自动展开只对文件路径生效）
    pub fn is_file_based(&self) -> bool {
        matches!(self, Self::FileUpload | Self::FileUploadDefault)
    }
}

/// 单个集合的输入表示
///
/// 每次提交恰好激活一种表示；内联文本是由分隔符分隔的标识符列表，
/// 分隔符属于后端契约，客户端不做校验
#[derive(Debug, Clone)]
pub enum SetSpec {
    /// 直接输入的文本
    InlineText { content: String },
    /// 选中的文件
    FileRef { name: String, content: Vec<u8> },
}

impl SetSpec {
    pub fn inline(content: impl Into<String>) -> Self {
        Self::InlineText {
            content: content.into(),
        }
    }

    pub fn file(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self::FileRef {
            name: name.into(),
            content,
        }
    }

    /// 从磁盘读取文件构造 FileRef
    ///
    /// 文件名取路径的最后一段，读取在 tokio 的异步文件 IO 上完成
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read file {}", path.display()))?;
        Ok(Self::FileRef { name, content })
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            Self::InlineText { content } => content.len(),
            Self::FileRef { content, .. } => content.len(),
        }
    }

    /// 文件名；内联文本没有文件名
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::InlineText { .. } => None,
            Self::FileRef { name, .. } => Some(name),
        }
    }
}

/// 出站请求中的单个文件部分
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// 默认文件快捷方式的零长度占位附件
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_FILE_NAME, Vec::new())
    }
}

/// 构建完成的出站请求
///
/// 每次用户动作恰好对应一条；`seq` 是构建时分配的单调递增序号，
/// 控制器用它丢弃迟到的旧响应
#[derive(Debug, Clone)]
pub enum OutboundSubmission {
    Manual {
        seq: u64,
        sender_set: String,
        receiver_set: String,
    },
    Files {
        seq: u64,
        sender_file: FilePart,
        receiver_file: FilePart,
        use_default_files: bool,
    },
    TestSets {
        seq: u64,
    },
}

impl OutboundSubmission {
    pub fn seq(&self) -> u64 {
        match self {
            Self::Manual { seq, .. } | Self::Files { seq, .. } | Self::TestSets { seq } => *seq,
        }
    }

    /// 请求指向的端点路径
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Manual { .. } => ENDPOINT_CALCULATE,
            Self::Files { .. } => ENDPOINT_CALCULATE_FILES,
            Self::TestSets { .. } => ENDPOINT_GENERATE_TEST_SETS,
        }
    }
}
