//! TUI 渲染入口
//!
//! 每帧从 `App` 重读状态并整体重绘，渲染层不持有任何任务数据。

pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Focus};

/// 渲染整个界面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.colors.bg)), area);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    components::header::render(frame, header_area, &app.server_label, &app.colors);

    let [list_area, form_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(body_area);

    components::task_list::render(
        frame,
        list_area,
        app.controller.tasks(),
        &mut app.list_state,
        app.focus == Focus::List,
        &app.colors,
    );

    components::task_form::render(
        frame,
        form_area,
        &app.form,
        app.controller.editing(),
        app.focus == Focus::Form,
        &app.colors,
    );

    let hints: &[(&str, &str)] = match app.focus {
        Focus::List => &[
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("r", "Refresh"),
            ("↑↓", "Select"),
            ("q", "Quit"),
        ],
        Focus::Form => &[
            ("Enter", "Save"),
            ("Esc", "Cancel"),
            ("Tab", "Next field"),
            ("◂▸", "Status"),
        ],
    };
    components::footer::render(frame, footer_area, hints, &app.colors);

    if let Some(ref toast) = app.toast {
        components::toast::render(frame, &toast.message, toast.kind, &app.colors);
    }
}
