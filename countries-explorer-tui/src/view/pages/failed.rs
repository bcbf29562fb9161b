//! 加载失败页面视图

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染加载失败页面：错误信息 + 重试提示
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let message = app.view.error_message().unwrap_or_default();

    let top = area.height.saturating_sub(5) / 2;
    let mut content: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    content.push(Line::styled(
        texts.failed.heading,
        Style::default().fg(c.error).add_modifier(Modifier::BOLD),
    ));
    content.push(Line::from(""));
    content.push(Line::styled(message.to_string(), Style::default().fg(c.fg)));
    content.push(Line::from(""));
    content.push(Line::styled(
        texts.failed.retry_hint,
        Style::default().fg(c.warning),
    ));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
