//! 国家详情页面视图

use countries_explorer_core::{CountryDetails, PLACEHOLDER};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::text::{display_width, pad};
use crate::view::theme::{Styles, colors};

/// 渲染详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(country) = app.view.selected() else {
        return;
    };
    let details = CountryDetails::new(country, &app.number_format);
    let texts = &t().detail;
    let c = colors();

    let heading = if details.flag == PLACEHOLDER {
        details.common_name.clone()
    } else {
        format!("{} {}", details.flag, details.common_name)
    };

    let fields = [
        (texts.official_name, details.official_name.clone()),
        (texts.flag, details.flag_alt.clone()),
        (texts.capital, details.capital.clone()),
        (texts.region, details.region.clone()),
        (texts.subregion, details.subregion.clone()),
        (texts.population, details.population.clone()),
        (texts.area, details.area.clone()),
        (texts.currencies, details.currencies.join(", ")),
        (texts.languages, details.languages.join(", ")),
        (texts.calling_code, details.calling_code.clone()),
        (texts.map_link, details.map_link.clone()),
    ];
    let label_width = fields
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                heading,
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", details.cca3), Styles::label()),
        ]),
        Line::from(""),
    ];

    content.extend(fields.into_iter().map(|(label, value)| {
        let value_style = if value == PLACEHOLDER {
            Styles::label()
        } else {
            Style::default().fg(c.fg)
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(pad(label, label_width), Styles::label()),
            Span::raw("  "),
            Span::styled(value, value_style),
        ])
    }));

    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: false }), area);
}

