//! 列表页消息

/// 列表页消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMessage {
    SelectPrevious,
    SelectNext,
    PageUp,
    PageDown,
    /// 下一个地区
    NextRegion,
    /// 上一个地区
    PrevRegion,
    /// 打开光标所在国家的详情
    OpenDetail,
}
