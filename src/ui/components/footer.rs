//! 底部快捷键提示栏

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染快捷键提示（键名高亮、说明弱化）
pub fn render(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(colors.border)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(colors.highlight),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(colors.text_dim),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
