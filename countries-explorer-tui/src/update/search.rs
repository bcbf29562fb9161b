//! 搜索框消息处理

use crate::message::SearchMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: SearchMessage) {
    let mut term = app.view.filter().search_term.clone();
    match msg {
        SearchMessage::Input(c) => term.push(c),
        SearchMessage::Backspace => {
            term.pop();
        }
        SearchMessage::Clear => term.clear(),
    }

    // 筛选条件变化后光标回到顶部
    if app.view.set_search_term(term) {
        app.listing.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::ready_app;

    fn codes(app: &App) -> Vec<String> {
        app.visible().iter().map(|c| c.cca3.clone()).collect()
    }

    #[test]
    fn typing_filters_case_insensitively() {
        let mut app = ready_app();
        for c in "PAR".chars() {
            update(&mut app, SearchMessage::Input(c));
        }
        assert_eq!(codes(&app), ["FRA"]);

        update(&mut app, SearchMessage::Backspace);
        update(&mut app, SearchMessage::Backspace);
        update(&mut app, SearchMessage::Backspace);
        assert_eq!(codes(&app), ["FRA", "BRA", "DEU"]);
    }

    #[test]
    fn filter_change_resets_cursor() {
        let mut app = ready_app();
        app.listing.selected = 2;
        update(&mut app, SearchMessage::Input('e'));
        assert_eq!(app.listing.selected, 0);
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut app = ready_app();
        app.listing.selected = 1;
        update(&mut app, SearchMessage::Backspace);
        assert_eq!(app.listing.selected, 1);
    }

    #[test]
    fn clear_restores_everything() {
        let mut app = ready_app();
        update(&mut app, SearchMessage::Input('z'));
        update(&mut app, SearchMessage::Input('z'));
        assert!(app.view.has_no_results());
        update(&mut app, SearchMessage::Clear);
        assert_eq!(codes(&app).len(), 3);
    }
}
