//! 主布局渲染

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::{current_language, t};
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 渲染页面内容
    render_page_content(app, frame, content_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", texts.common.app_name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("│ {}: {} ", texts.common.gateway, app.gateway_url)),
    ];

    if let Some(catalog) = app.view.catalog() {
        let loaded_at = catalog.loaded_at().with_timezone(&Local);
        spans.push(Span::raw(format!(
            "│ {} {} ",
            texts.common.loaded_at,
            loaded_at.format("%H:%M:%S")
        )));
    }

    spans.push(Span::raw(format!("│ {}", current_language().display_name())));

    let title = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let page = app.current_page();

    // 根据当前页面获取 i18n 标题
    let page_title = match &page {
        Page::Loading => texts.loading.title,
        Page::Failed => texts.failed.title,
        Page::Listing => texts.listing.title,
        Page::Detail { .. } => texts.detail.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match &page {
        Page::Loading => pages::loading::render(app, frame, inner_area),
        Page::Failed => pages::failed::render(app, frame, inner_area),
        Page::Listing => pages::listing::render(app, frame, inner_area),
        Page::Detail { .. } => pages::detail::render(app, frame, inner_area),
    }
}
