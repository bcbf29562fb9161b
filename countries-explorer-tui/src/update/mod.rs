//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod search;             // 搜索框子消息处理
//!         mod listing;            // 列表子消息处理
//!         mod loading;            // 加载完成 / 重试
//!
//!
//!     Update 层不做任何 IO。需要加载目录时，只把 ticket 写入
//!     `app.pending_load`，由主循环（app.rs）交给 Backend 层执行。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod listing;
mod loading;
mod search;

use crate::i18n::{current_language, set_language};
use crate::message::AppMessage;
use crate::model::App;

/// 主更新函数
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }
        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }
        AppMessage::Listing(listing_msg) => {
            listing::update(app, listing_msg);
        }
        AppMessage::GoBack => {
            app.view.back();
        }
        AppMessage::Retry => {
            loading::retry(app);
        }
        AppMessage::CatalogLoaded { ticket, result } => {
            loading::catalog_loaded(app, ticket, result);
        }
        AppMessage::ToggleLanguage => {
            set_language(current_language().next());
        }
        AppMessage::Noop => {}
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ready_app;
    use super::*;
    use crate::backend::AppConfig;
    use crate::message::{ListingMessage, SearchMessage};
    use crate::model::Page;

    #[test]
    fn new_app_queues_first_load() {
        let app = App::new(&AppConfig::default());
        assert_eq!(app.pending_load, Some(1));
        assert_eq!(app.current_page(), Page::Loading);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = ready_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn select_then_back_keeps_search() {
        let mut app = ready_app();
        for c in "an".chars() {
            update(&mut app, AppMessage::Search(SearchMessage::Input(c)));
        }
        // France, Germany
        assert_eq!(app.visible().len(), 2);
        update(&mut app, AppMessage::Listing(ListingMessage::SelectNext));
        update(&mut app, AppMessage::Listing(ListingMessage::OpenDetail));
        assert_eq!(
            app.current_page(),
            Page::Detail {
                cca3: "DEU".to_string()
            }
        );

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page(), Page::Listing);
        assert_eq!(app.view.filter().search_term, "an");
        assert_eq!(app.listing.selected, 1);
    }

    #[test]
    fn toggle_focus() {
        let mut app = ready_app();
        assert!(app.focus.is_search());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_results());
    }
}
