//! 筛选栏组件：搜索框 + 地区选择器

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::text::{display_width, truncate};
use crate::view::theme::{Styles, colors};

/// 渲染筛选栏（占 3 行）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_search(app, frame, columns[0]);
    render_region(app, frame, columns[1]);
}

fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_search();
    let term = &app.view.filter().search_term;

    let block = Block::default()
        .title(format!(" {} ", texts.listing.search))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let line = if term.is_empty() {
        Line::styled(texts.listing.search_placeholder, Style::default().fg(c.muted))
    } else {
        Line::styled(term.as_str(), Style::default().fg(c.fg))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 {
        let offset = u16::try_from(display_width(term)).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset.min(inner.width - 1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_region(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.listing.region))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let region = app.selected_region().unwrap_or(texts.listing.all_regions);
    let width = usize::from(block.inner(area).width).saturating_sub(4);
    let line = Line::from(vec![
        Span::styled("◀ ", Styles::hint_key()),
        Span::styled(truncate(region, width), Style::default().fg(c.fg)),
        Span::styled(" ▶", Styles::hint_key()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
