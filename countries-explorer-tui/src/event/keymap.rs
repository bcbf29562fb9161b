//! 快捷键配置
//!
//! 定义快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 失败页
    pub const RETRY: KeyBinding = KeyBinding::key(KeyCode::Char('r'));

    // 列表页
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const REGION_PREV: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const REGION_NEXT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 搜索框
    pub const SEARCH_BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const SEARCH_CLEAR: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
