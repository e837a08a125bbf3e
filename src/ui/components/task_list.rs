//! 任务列表组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

/// 状态对应的显示颜色
fn status_color(status: &str, colors: &ThemeColors) -> ratatui::style::Color {
    match status {
        "Completed" => colors.success,
        "in-progress" => colors.highlight,
        "Pending" => colors.warning,
        _ => colors.text_dim, // TODO 及自由文本
    }
}

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    state: &mut ListState,
    focused: bool,
    colors: &ThemeColors,
) {
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(format!(" Tasks ({}) ", tasks.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if tasks.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new("No tasks yet — press n to create one")
            .style(Style::default().fg(colors.text_dim));
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let title_line = Line::from(vec![
                Span::styled(
                    format!("#{:<4}", task.id),
                    Style::default().fg(colors.text_dim),
                ),
                Span::styled(
                    task.title.clone(),
                    Style::default()
                        .fg(colors.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let detail_line = Line::from(vec![
                Span::raw("     "),
                Span::styled(
                    task.status.clone(),
                    Style::default().fg(status_color(&task.status, colors)),
                ),
                Span::styled(
                    format!(" · {}", task.description),
                    Style::default().fg(colors.text_dim),
                ),
            ]);
            ListItem::new(vec![title_line, detail_line])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors.bg_secondary));

    frame.render_stateful_widget(list, area, state);
}
