//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都根据 `App` 重新绘制整个界面。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 页面 + 状态栏
//!         mod components;     // 可复用组件（状态栏、筛选栏）
//!         mod pages;          // Loading / Failed / Listing / Detail 四个页面
//!
//!         pub mod theme;      // 颜色与样式
//!         pub mod text;       // 按显示宽度对齐文本
//!
//!
//!     所有文字都通过 `i18n::t()` 获取，数字通过 core 的
//!     `CountryCard` / `CountryDetails` 格式化，缺失字段统一显示 N/A。
//!

mod components;
mod layout;
mod pages;
pub mod text;
pub mod theme;

pub use layout::render;
