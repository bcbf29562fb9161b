//! 焦点状态定义

/// 列表页的焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 搜索输入框（字符输入会修改搜索词）
    #[default]
    Search,
    /// 结果列表（字母键作为快捷键）
    Results,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Results,
            FocusPanel::Results => FocusPanel::Search,
        }
    }

    /// 是否是搜索框
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    /// 是否是结果列表
    pub fn is_results(self) -> bool {
        matches!(self, FocusPanel::Results)
    }
}
