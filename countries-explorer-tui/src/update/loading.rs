//! 目录加载结果处理

use countries_explorer_core::{Catalog, CoreResult, LoadTicket};

use crate::i18n::t;
use crate::model::App;

/// 后台加载完成
pub fn catalog_loaded(app: &mut App, ticket: LoadTicket, result: CoreResult<Catalog>) {
    let count = result.as_ref().map(Catalog::len).ok();
    if !app.view.complete_load(ticket, result) {
        return;
    }

    sync_region_index(app);
    app.listing.clamp(app.visible().len());

    match count {
        Some(count) => {
            log::info!("Catalog ready: {count} countries");
            app.set_status(format!("{count} {}", t().status_bar.countries_loaded));
        }
        None => app.clear_status(),
    }
}

/// 失败页按 r：开始新的加载
pub fn retry(app: &mut App) {
    if let Some(ticket) = app.view.retry() {
        app.pending_load = Some(ticket);
        app.clear_status();
    }
}

/// 目录换了以后，地区选择器位置与筛选条件重新对齐
fn sync_region_index(app: &mut App) {
    let regions = app.view.regions();
    let position = app
        .selected_region()
        .and_then(|r| regions.iter().position(|x| x == r));
    match position {
        Some(i) => app.listing.region_index = i + 1,
        None => {
            app.listing.region_index = 0;
            app.view.set_region(None);
        }
    }
}
