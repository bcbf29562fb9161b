//! 列表消息处理

use crate::message::ListingMessage;
use crate::model::App;

/// PageUp / PageDown 移动的行数
const PAGE_SIZE: usize = 10;

pub fn update(app: &mut App, msg: ListingMessage) {
    let len = app.visible().len();
    match msg {
        ListingMessage::SelectPrevious => app.listing.select_previous(),
        ListingMessage::SelectNext => app.listing.select_next(len),
        ListingMessage::PageUp => app.listing.page_up(PAGE_SIZE),
        ListingMessage::PageDown => app.listing.page_down(PAGE_SIZE, len),
        ListingMessage::NextRegion | ListingMessage::PrevRegion => {
            let regions = app.view.regions();
            if msg == ListingMessage::NextRegion {
                app.listing.next_region(regions.len());
            } else {
                app.listing.prev_region(regions.len());
            }
            let region = app
                .listing
                .region_index
                .checked_sub(1)
                .and_then(|i| regions.get(i).cloned());
            if app.view.set_region(region) {
                app.listing.selected = 0;
            }
        }
        ListingMessage::OpenDetail => {
            if let Some(cca3) = app.highlighted().map(|c| c.cca3.clone()) {
                app.view.select(&cca3);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::update::test_support::ready_app;

    #[test]
    fn region_cycle_filters_then_returns_to_all() {
        let mut app = ready_app();
        // Americas, Europe
        update(&mut app, ListingMessage::NextRegion);
        assert_eq!(app.selected_region(), Some("Americas"));
        assert_eq!(app.visible().len(), 1);

        update(&mut app, ListingMessage::NextRegion);
        assert_eq!(app.selected_region(), Some("Europe"));
        assert_eq!(app.visible().len(), 2);

        update(&mut app, ListingMessage::NextRegion);
        assert_eq!(app.selected_region(), None);
        assert_eq!(app.visible().len(), 3);

        update(&mut app, ListingMessage::PrevRegion);
        assert_eq!(app.selected_region(), Some("Europe"));
    }

    #[test]
    fn cursor_clamped_to_visible() {
        let mut app = ready_app();
        for _ in 0..10 {
            update(&mut app, ListingMessage::SelectNext);
        }
        assert_eq!(app.listing.selected, 2);
        update(&mut app, ListingMessage::PageUp);
        assert_eq!(app.listing.selected, 0);
        update(&mut app, ListingMessage::PageDown);
        assert_eq!(app.listing.selected, 2);
    }

    #[test]
    fn open_detail_uses_cursor() {
        let mut app = ready_app();
        update(&mut app, ListingMessage::SelectNext);
        update(&mut app, ListingMessage::OpenDetail);
        assert_eq!(
            app.current_page(),
            Page::Detail {
                cca3: "BRA".to_string()
            }
        );
    }

    #[test]
    fn open_detail_with_no_results_is_noop() {
        let mut app = ready_app();
        app.view.set_search_term("zz");
        update(&mut app, ListingMessage::OpenDetail);
        assert_eq!(app.current_page(), Page::Listing);
    }
}
