//! 应用主状态结构

use countries_explorer_core::{Country, LoadTicket, NumberFormat, ViewController};

use super::{FocusPanel, ListingState, Page};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 列表页焦点
    pub focus: FocusPanel,

    /// 目录 / 筛选 / 选中状态（core 状态机）
    pub view: ViewController,

    /// 列表页的 UI 状态
    pub listing: ListingState,

    /// 数字格式（千分位）
    pub number_format: NumberFormat,

    /// Gateway 地址（仅用于显示）
    pub gateway_url: String,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 待发起的目录加载，由主循环交给 backend
    pub pending_load: Option<LoadTicket>,
}

impl App {
    /// 创建新的应用实例；首次加载立即排队
    pub fn new(config: &AppConfig) -> Self {
        let view = ViewController::new();
        let pending_load = view.current_ticket();
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            view,
            listing: ListingState::new(),
            number_format: NumberFormat::for_locale(&config.number_locale),
            gateway_url: config.gateway_url.clone(),
            status_message: None,
            pending_load,
        }
    }

    /// 当前页面
    pub fn current_page(&self) -> Page {
        Page::from_view(&self.view)
    }

    /// 当前可见的国家
    pub fn visible(&self) -> Vec<&Country> {
        self.view.visible()
    }

    /// 光标所在的国家
    pub fn highlighted(&self) -> Option<&Country> {
        self.visible().get(self.listing.selected).copied()
    }

    /// 地区选择器当前显示的地区（`None` = 全部）
    pub fn selected_region(&self) -> Option<&str> {
        self.view.filter().region.as_deref()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
