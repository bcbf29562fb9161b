//! 加载页面视图

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染加载页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let top = area.height.saturating_sub(3) / 2;
    let mut content: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    content.push(Line::styled(texts.loading.message, Style::default().fg(c.fg)));
    content.push(Line::from(""));
    content.push(Line::styled(
        format!("{}: {}", texts.common.gateway, app.gateway_url),
        Style::default().fg(c.muted),
    ));

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
