//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ListingMessage, SearchMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 将原始事件翻译为消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        // 只处理按下事件（Windows 上还会收到 Release）
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app),
        // Resize 无需处理，下一帧会按新尺寸重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }

    match app.current_page() {
        Page::Loading => {
            if DefaultKeymap::QUIT.matches(&key) {
                AppMessage::Quit
            } else {
                AppMessage::Noop
            }
        }
        Page::Failed => {
            if DefaultKeymap::RETRY.matches(&key) {
                AppMessage::Retry
            } else if DefaultKeymap::QUIT.matches(&key) {
                AppMessage::Quit
            } else {
                AppMessage::Noop
            }
        }
        Page::Listing => handle_listing_keys(key, app),
        Page::Detail { .. } => handle_detail_keys(key),
    }
}

fn handle_listing_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Listing(ListingMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Listing(ListingMessage::SelectNext);
    }
    if DefaultKeymap::PAGE_UP.matches(&key) {
        return AppMessage::Listing(ListingMessage::PageUp);
    }
    if DefaultKeymap::PAGE_DOWN.matches(&key) {
        return AppMessage::Listing(ListingMessage::PageDown);
    }
    if DefaultKeymap::REGION_PREV.matches(&key) {
        return AppMessage::Listing(ListingMessage::PrevRegion);
    }
    if DefaultKeymap::REGION_NEXT.matches(&key) {
        return AppMessage::Listing(ListingMessage::NextRegion);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Listing(ListingMessage::OpenDetail);
    }

    if app.focus.is_search() {
        handle_search_keys(key, app)
    } else {
        handle_results_keys(key)
    }
}

/// 焦点在搜索框：字符键进入搜索词
fn handle_search_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SEARCH_BACKSPACE.matches(&key) {
        return AppMessage::Search(SearchMessage::Backspace);
    }
    if DefaultKeymap::SEARCH_CLEAR.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }
    if DefaultKeymap::BACK.matches(&key) {
        // 有搜索词时 Esc 清空，否则切到结果列表
        return if app.view.filter().search_term.is_empty() {
            AppMessage::ToggleFocus
        } else {
            AppMessage::Search(SearchMessage::Clear)
        };
    }
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Search(SearchMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 焦点在结果列表：字母键作为快捷键
fn handle_results_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::FOCUS_SEARCH.matches(&key) || DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    match key.code {
        KeyCode::Char('k') => AppMessage::Listing(ListingMessage::SelectPrevious),
        KeyCode::Char('j') => AppMessage::Listing(ListingMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::SEARCH_BACKSPACE.matches(&key) {
        AppMessage::GoBack
    } else if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else {
        AppMessage::Noop
    }
}
