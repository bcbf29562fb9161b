//! 国家列表页面视图

use countries_explorer_core::CountryCard;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::filterbar;
use crate::view::text::{pad, pad_left};
use crate::view::theme::{Styles, colors};

/// 列宽（显示列数）
struct Columns {
    name: usize,
    population: usize,
    region: usize,
    capital: usize,
}

impl Columns {
    fn for_width(width: u16) -> Self {
        let width = usize::from(width);
        let population = 15;
        let region = 12;
        // 两列间各留 2 个空格
        let rest = width.saturating_sub(population + region + 6);
        let name = rest * 3 / 5;
        Self {
            name,
            population,
            region,
            capital: rest - name,
        }
    }
}

/// 渲染列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 筛选栏
            Constraint::Length(1), // 表头
            Constraint::Min(1),    // 结果
        ])
        .split(area);

    filterbar::render(app, frame, rows[0]);

    let columns = Columns::for_width(rows[2].width);
    render_header(&columns, frame, rows[1]);

    if app.view.has_no_results() {
        render_empty(frame, rows[2]);
    } else {
        render_list(app, &columns, frame, rows[2]);
    }
}

fn render_header(columns: &Columns, frame: &mut Frame, area: Rect) {
    let names = &t().listing.columns;
    let line = format!(
        "{}  {}  {}  {}",
        pad(names.name, columns.name),
        pad_left(names.population, columns.population),
        pad(names.region, columns.region),
        pad(names.capital, columns.capital),
    );
    frame.render_widget(Paragraph::new(line).style(Styles::label()), area);
}

/// 渲染空结果
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.listing.no_results),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.listing.no_results_hint),
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染国家列表
fn render_list(app: &App, columns: &Columns, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .visible()
        .into_iter()
        .map(|country| {
            let card = CountryCard::new(country, &app.number_format);
            let name = if card.flag.is_empty() {
                card.common_name
            } else {
                format!("{} {}", card.flag, card.common_name)
            };
            ListItem::new(Line::from(vec![
                Span::styled(pad(&name, columns.name), Style::default().fg(c.fg)),
                Span::raw("  "),
                Span::styled(
                    pad_left(&card.population, columns.population),
                    Style::default().fg(c.success),
                ),
                Span::raw("  "),
                Span::styled(pad(&card.region, columns.region), Style::default().fg(c.muted)),
                Span::raw("  "),
                Span::styled(pad(&card.capital, columns.capital), Style::default().fg(c.fg)),
            ]))
        })
        .collect();

    // 焦点在搜索框时，光标行只做弱高亮
    let highlight = if app.focus.is_results() {
        Styles::selected()
    } else {
        Style::default().bg(c.border)
    };

    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default();
    state.select(Some(app.listing.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
