//! 提交构建服务 - 业务能力层
//!
//! 把一次已通过校验的用户动作映射为恰好一条出站请求。
//! 本服务不做重试；序号在构建时分配，单调递增

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ValidationError;
use crate::models::submission::{FilePart, OutboundSubmission, SetSpec};

/// 提交构建服务
///
/// 职责：
/// - 每次用户动作构建恰好一条 OutboundSubmission
/// - 分配单调递增的提交序号
/// - 默认文件快捷方式补齐占位附件和标志字段
pub struct SubmissionBuilder {
    next_seq: AtomicU64,
}

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self {
            next_seq: AtomicU64::new(1),
        }
    }

    fn allocate_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    /// 构建手动输入提交
    pub fn build_manual(
        &self,
        sender: SetSpec,
        receiver: SetSpec,
    ) -> Result<OutboundSubmission, ValidationError> {
        match (sender, receiver) {
            (
                SetSpec::InlineText { content: sender_set },
                SetSpec::InlineText {
                    content: receiver_set,
                },
            ) => Ok(OutboundSubmission::Manual {
                seq: self.allocate_seq(),
                sender_set,
                receiver_set,
            }),
            _ => Err(ValidationError::BothSetsRequired),
        }
    }

    /// 构建文件上传提交
    pub fn build_files(
        &self,
        sender: SetSpec,
        receiver: SetSpec,
    ) -> Result<OutboundSubmission, ValidationError> {
        match (sender, receiver) {
            (
                SetSpec::FileRef {
                    name: sender_name,
                    content: sender_content,
                },
                SetSpec::FileRef {
                    name: receiver_name,
                    content: receiver_content,
                },
            ) => Ok(OutboundSubmission::Files {
                seq: self.allocate_seq(),
                sender_file: FilePart::new(sender_name, sender_content),
                receiver_file: FilePart::new(receiver_name, receiver_content),
                use_default_files: false,
            }),
            _ => Err(ValidationError::BothFilesRequired),
        }
    }

    /// 构建"使用默认文件"提交
    ///
    /// 端点要求两个附件字段必须在场，所以带上两个零长度占位附件，
    /// 并用标志字段告诉后端忽略它们
    pub fn build_default_files(&self) -> OutboundSubmission {
        OutboundSubmission::Files {
            seq: self.allocate_seq(),
            sender_file: FilePart::placeholder(),
            receiver_file: FilePart::placeholder(),
            use_default_files: true,
        }
    }

    /// 构建测试数据生成请求
    pub fn build_test_sets(&self) -> OutboundSubmission {
        OutboundSubmission::TestSets {
            seq: self.allocate_seq(),
        }
    }
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
