//! 可复用组件

pub mod filterbar;
pub mod statusbar;
