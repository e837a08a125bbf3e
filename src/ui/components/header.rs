//! 顶部标题栏

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染标题栏：左侧应用名，右侧当前连接的后端
pub fn render(frame: &mut Frame, area: Rect, server_label: &str, colors: &ThemeColors) {
    let line = Line::from(vec![
        Span::styled(
            " Taskman ",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {server_label}"),
            Style::default().fg(colors.text_dim),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
