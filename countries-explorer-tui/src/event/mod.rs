//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     按页面分发：
//!         Loading     q 退出
//!         Failed      r 重试，q 退出
//!         Listing     焦点在搜索框时字符进入搜索词；焦点在列表时 q 退出
//!                     ↑↓ 移动光标，←→ 切换地区，Enter 打开详情，Tab 切换焦点
//!         Detail      Esc / Backspace 返回，q 退出
//!
//!     全局：Ctrl+C 退出，Alt+L 切换语言。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
