//! 渲染表面 - 基础设施层
//!
//! 持有"页面"这一呈现资源，只向上暴露渲染能力：
//! 目标字段写入、面板可见性、焦点移动。上层不直接打印

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::services::diagnostics::DiagnosticEntry;

/// 可写入的渲染目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    SenderSize,
    ReceiverSize,
    IntersectionSize,
    IntersectionList,
    LoadingMessage,
    TestInfo,
    ErrorText,
}

impl RenderTarget {
    pub fn label(&self) -> &'static str {
        match self {
            RenderTarget::SenderSize => "sender-size",
            RenderTarget::ReceiverSize => "receiver-size",
            RenderTarget::IntersectionSize => "intersection-size",
            RenderTarget::IntersectionList => "intersection-result",
            RenderTarget::LoadingMessage => "loading-message",
            RenderTarget::TestInfo => "test-info",
            RenderTarget::ErrorText => "error-text",
        }
    }
}

/// 结果渲染必需的四个目标；启动时一次性探测
pub const REQUIRED_TARGETS: [RenderTarget; 4] = [
    RenderTarget::SenderSize,
    RenderTarget::ReceiverSize,
    RenderTarget::IntersectionSize,
    RenderTarget::IntersectionList,
];

/// 可见性彼此独立的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Loading,
    Result,
    Error,
    Diagnostics,
}

impl Panel {
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Loading => "loading",
            Panel::Result => "result",
            Panel::Error => "error",
            Panel::Diagnostics => "diagnostics",
        }
    }
}

/// 渲染表面能力
pub trait RenderSurface {
    /// 目标是否存在于当前页面
    fn has_target(&self, target: RenderTarget) -> bool;

    /// 写入目标文本
    fn set_target(&mut self, target: RenderTarget, text: &str);

    /// 切换面板可见性；各面板互不影响
    fn set_panel_visible(&mut self, panel: Panel, visible: bool);

    /// 把用户注意力移到某个面板
    fn focus(&mut self, panel: Panel);

    /// 展示诊断记录
    fn render_diagnostics(&mut self, entries: &[DiagnosticEntry]);
}

/// 控制台渲染表面
///
/// 面板显示时打印对应区块；隐藏只翻转状态（终端无法撤回已打印内容）
pub struct ConsoleSurface {
    targets: HashMap<RenderTarget, String>,
    visible: HashSet<Panel>,
    diagnostics: Vec<String>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            visible: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    fn target_text(&self, target: RenderTarget) -> &str {
        self.targets.get(&target).map(String::as_str).unwrap_or("")
    }

    fn print_panel(&self, panel: Panel) {
        match panel {
            Panel::Loading => {
                println!("⏳ {}", self.target_text(RenderTarget::LoadingMessage));
            }
            Panel::Result => {
                println!("{}", "=".repeat(60));
                println!("📊 result");
                println!(
                    "  sender set size:    {}",
                    self.target_text(RenderTarget::SenderSize)
                );
                println!(
                    "  receiver set size:  {}",
                    self.target_text(RenderTarget::ReceiverSize)
                );
                println!(
                    "  intersection size:  {}",
                    self.target_text(RenderTarget::IntersectionSize)
                );
                println!(
                    "  intersection:       {}",
                    self.target_text(RenderTarget::IntersectionList)
                );
                println!("{}", "=".repeat(60));
            }
            Panel::Error => {
                println!("❌ {}", self.target_text(RenderTarget::ErrorText));
            }
            Panel::Diagnostics => {
                println!("{}", "─".repeat(60));
                println!("📋 diagnostic log");
                if self.diagnostics.is_empty() {
                    println!("  (empty)");
                } else {
                    for line in &self.diagnostics {
                        println!("  {}", line);
                    }
                }
                println!("{}", "─".repeat(60));
            }
        }
    }
}

impl RenderSurface for ConsoleSurface {
    fn has_target(&self, _target: RenderTarget) -> bool {
        // 控制台表面静态具备全部目标
        true
    }

    fn set_target(&mut self, target: RenderTarget, text: &str) {
        self.targets.insert(target, text.to_string());
        // test-info 没有独立面板，写入即展示
        if target == RenderTarget::TestInfo {
            println!("ℹ️  {}", text);
        }
    }

    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        if visible {
            self.visible.insert(panel);
            self.print_panel(panel);
        } else {
            self.visible.remove(&panel);
        }
    }

    fn focus(&mut self, panel: Panel) {
        debug!("focus -> {}", panel.label());
    }

    fn render_diagnostics(&mut self, entries: &[DiagnosticEntry]) {
        self.diagnostics = entries.iter().map(|e| e.to_string()).collect();
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}
