//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 键盘输入和后台加载结果都被翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod listing;        // 列表页子消息（光标、地区、打开详情）
//!         mod search;         // 搜索框子消息（输入、删除、清空）
//!

mod app;
mod listing;
mod search;

pub use app::AppMessage;
pub use listing::ListingMessage;
pub use search::SearchMessage;
