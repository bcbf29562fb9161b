//! 应用主消息枚举

use countries_explorer_core::{Catalog, CoreResult, LoadTicket};

use super::{ListingMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点（搜索框 ↔ 结果列表）
    ToggleFocus,

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 列表相关消息
    Listing(ListingMessage),

    /// 从详情页返回列表
    GoBack,

    /// 加载失败后重试
    Retry,

    /// 后台加载完成
    CatalogLoaded {
        ticket: LoadTicket,
        result: CoreResult<Catalog>,
    },

    /// 切换界面语言
    ToggleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
