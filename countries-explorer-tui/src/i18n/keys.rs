//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `listing.*`, `detail.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 加载页文本
    pub loading: LoadingTexts,
    /// 加载失败页文本
    pub failed: FailedTexts,
    /// 列表页文本
    pub listing: ListingTexts,
    /// 详情页文本
    pub detail: DetailTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub gateway: &'static str,
    pub loaded_at: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
    pub page: &'static str,      // "PgUp/PgDn"
    pub quit: &'static str,      // "q"
    pub retry: &'static str,     // "r"
    pub language: &'static str,  // "Alt+L"
    pub ctrl_u: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub page: &'static str,
    pub change_region: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub clear: &'static str,
    pub retry: &'static str,
    pub quit: &'static str,
    pub language: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 加载页文本
pub struct LoadingTexts {
    pub title: &'static str,
    pub message: &'static str,
}

/// 加载失败页文本
pub struct FailedTexts {
    pub title: &'static str,
    pub heading: &'static str,
    pub retry_hint: &'static str,
}

/// 列表页文本
pub struct ListingTexts {
    pub title: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub region: &'static str,
    pub all_regions: &'static str,
    pub no_results: &'static str,
    pub no_results_hint: &'static str,
    /// 表头
    pub columns: ListingColumns,
}

/// 列表页表头
pub struct ListingColumns {
    pub name: &'static str,
    pub population: &'static str,
    pub region: &'static str,
    pub capital: &'static str,
}

/// 详情页文本
pub struct DetailTexts {
    pub title: &'static str,
    pub official_name: &'static str,
    pub capital: &'static str,
    pub region: &'static str,
    pub subregion: &'static str,
    pub population: &'static str,
    pub area: &'static str,
    pub currencies: &'static str,
    pub languages: &'static str,
    pub calling_code: &'static str,
    pub map_link: &'static str,
    pub flag: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    /// 接在数量之后："250 countries loaded"
    pub countries_loaded: &'static str,
    /// 接在数量之后："12 shown"
    pub shown: &'static str,
}
