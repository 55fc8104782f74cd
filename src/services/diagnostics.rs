//! 诊断日志服务 - 业务能力层
//!
//! 独立于主流程的追加式事件通道：编排各阶段把事件写进来，
//! 面板是否展示由 UI 控制器决定。记录实现与空实现二选一，
//! 在应用装配时确定

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use tracing::debug;

/// 单条诊断记录
#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.message
        )
    }
}

/// 诊断通道
///
/// 追加式，只在新一轮文件提交开始时清空
pub trait DiagnosticSink: Send + Sync {
    /// 追加一条记录
    fn record(&self, message: &str);

    /// 清空全部记录
    fn clear(&self);

    /// 当前全部记录的快照
    fn entries(&self) -> Vec<DiagnosticEntry>;
}

/// 记录实现：带时间戳存进内存
pub struct RecordingSink {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, message: &str) {
        debug!("诊断: {}", message);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DiagnosticEntry {
                timestamp: Local::now(),
                message: message.to_string(),
            });
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

/// 空实现：丢弃所有记录
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _message: &str) {}

    fn clear(&self) {}

    fn entries(&self) -> Vec<DiagnosticEntry> {
        Vec::new()
    }
}
