//! 页面状态定义

use countries_explorer_core::{Screen, ViewController, ViewState};

/// 当前应显示的页面，完全由 `ViewController` 的状态推导
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// 正在加载国家目录
    Loading,
    /// 加载失败（可重试）
    Failed,
    /// 国家列表
    Listing,
    /// 国家详情
    Detail { cca3: String },
}

impl Page {
    pub fn from_view(view: &ViewController) -> Self {
        match view.state() {
            ViewState::Loading { .. } => Page::Loading,
            ViewState::Failed { .. } => Page::Failed,
            ViewState::Ready { screen, .. } => match screen {
                Screen::Listing => Page::Listing,
                Screen::Detail { cca3 } => Page::Detail { cca3: cca3.clone() },
            },
        }
    }
}
