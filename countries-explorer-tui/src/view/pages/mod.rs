//! 页面视图

pub mod detail;
pub mod failed;
pub mod listing;
pub mod loading;
