//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 目录、筛选条件和选中项都由 core 的 `ViewController` 持有，
//! 这里只额外保存纯 UI 状态（焦点、光标、地区选择器位置）。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Results）
//!         mod page;           // 页面（由 ViewController 推导）
//!
//!         pub mod state;      // 列表页 UI 状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 页面与状态机的关系
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ViewState::Loading           → Page::Loading
//!     ViewState::Failed            → Page::Failed     （按 r 重试）
//!     ViewState::Ready + Listing   → Page::Listing
//!     ViewState::Ready + Detail    → Page::Detail     （按 Esc 返回）
//!
//!     Page 不单独存储，每次渲染时由 `App::current_page()` 推导，
//!     因此不会和状态机不一致。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use state::ListingState;
