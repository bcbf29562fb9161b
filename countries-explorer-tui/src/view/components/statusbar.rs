//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::{Styles, colors};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态信息显示在提示之后
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(state_span(app));

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 当前状态：加载中 / 错误 / 状态消息 + 可见数量
fn state_span(app: &App) -> Span<'static> {
    let texts = &t().status_bar;
    let c = colors();
    match app.current_page() {
        Page::Loading => Span::raw(texts.loading),
        Page::Failed => Span::styled(texts.error, Style::default().fg(c.error)),
        Page::Listing | Page::Detail { .. } => {
            let shown = format!("{} {}", app.visible().len(), texts.shown);
            let text = match &app.status_message {
                Some(msg) => format!("{msg}, {shown}"),
                None => format!("{}, {shown}", texts.ready),
            };
            Span::styled(text, Style::default().fg(Color::Yellow))
        }
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    match app.current_page() {
        Page::Loading => {}
        Page::Failed => {
            hints.push((keys.retry, actions.retry));
        }
        Page::Listing => {
            hints.push((keys.tab, actions.switch_panel));
            hints.push((keys.arrows_ud, actions.move_up_down));
            hints.push((keys.page, actions.page));
            hints.push((keys.arrows_lr, actions.change_region));
            hints.push((keys.enter, actions.open));
            if app.focus.is_search() {
                hints.push((keys.ctrl_u, actions.clear));
            }
        }
        Page::Detail { .. } => {
            hints.push((keys.esc, actions.back));
        }
    }

    hints.push((keys.language, actions.language));

    // 搜索框有焦点时 q 是输入字符
    if !(app.current_page() == Page::Listing && app.focus.is_search()) {
        hints.push((keys.quit, actions.quit));
    }

    hints
}
