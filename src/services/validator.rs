//! 输入校验服务 - 业务能力层
//!
//! 发起任何网络请求之前的本地纯校验；任何一条规则失败都不会触网

use crate::error::ValidationError;
use crate::models::{SetSpec, SubmissionMode};

/// 单个文件的大小上限（10 MiB）
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// 允许的文件扩展名（区分大小写）
pub const ALLOWED_EXTENSIONS: [&str; 2] = [".txt", ".csv"];

/// 输入校验服务
///
/// 职责：
/// - 按提交方式校验原始输入
/// - 规则按固定顺序执行，遇到第一个失败立即返回
/// - 不持有状态，不触发副作用
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验一次提交的输入
    ///
    /// # 参数
    /// - `mode`: 提交方式
    /// - `sender`: 发送方集合输入
    /// - `receiver`: 接收方集合输入
    pub fn validate(
        &self,
        mode: SubmissionMode,
        sender: Option<&SetSpec>,
        receiver: Option<&SetSpec>,
    ) -> Result<(), ValidationError> {
        match mode {
            SubmissionMode::Manual => Self::validate_manual(sender, receiver),
            SubmissionMode::FileUpload => Self::validate_files(sender, receiver),
            // 使用默认文件时跳过全部本地检查，数据由后端决定
            SubmissionMode::FileUploadDefault => Ok(()),
        }
    }

    /// 手动输入：两个文本均必须非空
    fn validate_manual(
        sender: Option<&SetSpec>,
        receiver: Option<&SetSpec>,
    ) -> Result<(), ValidationError> {
        match (sender, receiver) {
            (
                Some(SetSpec::InlineText { content: s }),
                Some(SetSpec::InlineText { content: r }),
            ) if !s.is_empty() && !r.is_empty() => Ok(()),
            _ => Err(ValidationError::BothSetsRequired),
        }
    }

    /// 文件上传：两个文件在场 → 大小 → 扩展名，依次检查
    fn validate_files(
        sender: Option<&SetSpec>,
        receiver: Option<&SetSpec>,
    ) -> Result<(), ValidationError> {
        let (sender, receiver) = match (sender, receiver) {
            (Some(s @ SetSpec::FileRef { .. }), Some(r @ SetSpec::FileRef { .. })) => (s, r),
            _ => return Err(ValidationError::BothFilesRequired),
        };

        for spec in [sender, receiver] {
            if spec.size_bytes() > MAX_FILE_SIZE_BYTES {
                return Err(ValidationError::FileTooLarge {
                    name: spec.file_name().unwrap_or_default().to_string(),
                    size_bytes: spec.size_bytes(),
                });
            }
        }

        for spec in [sender, receiver] {
            let name = spec.file_name().unwrap_or_default();
            if !ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
                return Err(ValidationError::UnsupportedFormat {
                    name: name.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
