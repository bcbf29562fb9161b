//! 页面数据状态

mod listing;

pub use listing::ListingState;
