//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DetailTexts, FailedTexts, HintTexts, KeyNames, ListingColumns,
    ListingTexts, LoadingTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Countries Explorer",
        gateway: "Gateway",
        loaded_at: "Loaded at",
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
            switch_panel: "Switch panel",
            move_up_down: "Move",
            page: "Page",
            change_region: "Region",
            open: "Details",
            back: "Back",
            clear: "Clear",
            retry: "Retry",
            quit: "Quit",
            language: "中文",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    loading: LoadingTexts {
        title: "Loading",
        message: "Loading countries...",
    },

    failed: FailedTexts {
        title: "Error",
        heading: "Could not load countries",
        retry_hint: "Press r to try again",
    },

    listing: ListingTexts {
        title: "Countries",
        search: "Search",
        search_placeholder: "Search by country or capital name...",
        region: "Region",
        all_regions: "All Regions",
        no_results: "No countries found",
        no_results_hint: "Try adjusting your search or filter criteria",
        columns: ListingColumns {
            name: "Country",
            population: "Population",
            region: "Region",
            capital: "Capital",
        },
    },

    detail: DetailTexts {
        title: "Country Details",
        official_name: "Official Name",
        capital: "Capital",
        region: "Region",
        subregion: "Subregion",
        population: "Population",
        area: "Area",
        currencies: "Currencies",
        languages: "Languages",
        calling_code: "Calling Code",
        map_link: "Google Maps",
        flag: "Flag",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        loading: "Loading...",
        error: "Error",
        countries_loaded: "countries loaded",
        shown: "shown",
    },
};
