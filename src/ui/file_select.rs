//! 文件选择状态（"使用默认文件"开关）
//!
//! 开关打开：两个文件输入被禁用，已选文件被清空；
//! 开关关闭：输入恢复可用，但不恢复之前的选择。幂等

use std::path::{Path, PathBuf};

/// 文件选择状态
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    use_default: bool,
    sender: Option<PathBuf>,
    receiver: Option<PathBuf>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_default(&self) -> bool {
        self.use_default
    }

    /// 文件输入是否可用（与开关互斥）
    pub fn inputs_enabled(&self) -> bool {
        !self.use_default
    }

    /// 切换"使用默认文件"开关
    pub fn set_use_default(&mut self, enabled: bool) {
        self.use_default = enabled;
        if enabled {
            self.sender = None;
            self.receiver = None;
        }
    }

    /// 选择发送方文件；输入被禁用时拒绝
    pub fn select_sender(&mut self, path: PathBuf) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        self.sender = Some(path);
        true
    }

    /// 选择接收方文件；输入被禁用时拒绝
    pub fn select_receiver(&mut self, path: PathBuf) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        self.receiver = Some(path);
        true
    }

    pub fn sender(&self) -> Option<&Path> {
        self.sender.as_deref()
    }

    pub fn receiver(&self) -> Option<&Path> {
        self.receiver.as_deref()
    }
}
