//! 列表页面状态

/// 列表页的 UI 状态：光标位置和地区选择器位置。
///
/// 可见列表本身不存放在这里，每次都从 `ViewController` 重新计算。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    /// 当前光标所在的可见项索引
    pub selected: usize,
    /// 地区选择器位置：0 = 全部地区，i = `regions[i - 1]`
    pub region_index: usize,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// 向上/向下翻页
    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn page_down(&mut self, page: usize, len: usize) {
        self.selected = (self.selected + page).min(len.saturating_sub(1));
    }

    /// 可见列表变化后，把光标限制在范围内
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// 下一个地区位置（`region_count` 不含 “全部地区”）
    pub fn next_region(&mut self, region_count: usize) {
        self.region_index = (self.region_index + 1) % (region_count + 1);
    }

    /// 上一个地区位置
    pub fn prev_region(&mut self, region_count: usize) {
        self.region_index = if self.region_index == 0 {
            region_count
        } else {
            self.region_index - 1
        };
    }
}
