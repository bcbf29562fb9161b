//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, DetailTexts, FailedTexts, HintTexts, KeyNames, ListingColumns,
    ListingTexts, LoadingTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "国家浏览器",
        gateway: "网关",
        loaded_at: "加载于",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            page: "PgUp/PgDn",
            quit: "q",
            retry: "r",
            language: "Alt+L",
            ctrl_u: "Ctrl+U",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            move_up_down: "上下移动",
            page: "翻页",
            change_region: "切换地区",
            open: "详情",
            back: "返回",
            clear: "清空",
            retry: "重试",
            quit: "退出",
            language: "English",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    loading: LoadingTexts {
        title: "加载中",
        message: "正在加载国家列表...",
    },

    failed: FailedTexts {
        title: "错误",
        heading: "无法加载国家列表",
        retry_hint: "按 r 重试",
    },

    listing: ListingTexts {
        title: "国家",
        search: "搜索",
        search_placeholder: "按国家或首都名称搜索...",
        region: "地区",
        all_regions: "全部地区",
        no_results: "没有找到国家",
        no_results_hint: "请调整搜索词或筛选条件",
        columns: ListingColumns {
            name: "国家",
            population: "人口",
            region: "地区",
            capital: "首都",
        },
    },

    detail: DetailTexts {
        title: "国家详情",
        official_name: "正式名称",
        capital: "首都",
        region: "地区",
        subregion: "子地区",
        population: "人口",
        area: "面积",
        currencies: "货币",
        languages: "语言",
        calling_code: "电话区号",
        map_link: "Google 地图",
        flag: "国旗",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "就绪",
        loading: "加载中...",
        error: "错误",
        countries_loaded: "个国家已加载",
        shown: "个可见",
    },
};
