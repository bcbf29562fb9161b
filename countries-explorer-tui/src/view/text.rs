//! 按终端显示宽度处理文本
//!
//! 中文字符和国旗 emoji 占两列，不能用 `len()` 或 `chars().count()` 对齐。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 文本的显示宽度
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// 截断到最多 `width` 列，被截断时以 `…` 结尾
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// 截断并右侧补空格到恰好 `width` 列
pub fn pad(s: &str, width: usize) -> String {
    let mut out = truncate(s, width);
    let w = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// 左侧补空格（右对齐数字列）
pub fn pad_left(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let w = display_width(&s);
    format!("{}{s}", " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_counts_double() {
        assert_eq!(display_width("国家"), 4);
        assert_eq!(display_width("France"), 6);
    }

    #[test]
    fn pad_aligns_mixed_text() {
        assert_eq!(display_width(&pad("首都", 8)), 8);
        assert_eq!(pad("Paris", 8), "Paris   ");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("South Georgia", 6), "South…");
        assert_eq!(truncate("Chad", 6), "Chad");
        assert_eq!(display_width(&truncate("中华人民共和国", 5)), 5);
    }

    #[test]
    fn pad_left_right_aligns() {
        assert_eq!(pad_left("1,234", 7), "  1,234");
    }
}
