//! 事件处理
//!
//! 所有变更操作都在按键处理内同步执行完毕（阻塞等待存储调用返回），
//! 事件循环天然串行化了对任务列表的修改，不存在并发的在途请求。

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, Focus};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.focus {
        Focus::List => handle_list_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

/// 列表区按键
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('r') => app.refresh_tasks(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('n') => app.begin_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Tab => app.focus = Focus::Form,
        _ => {}
    }
}

/// 表单区按键
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form.field = app.form.field.next(),
        KeyCode::BackTab | KeyCode::Up => app.form.field = app.form.field.prev(),
        KeyCode::Left => app.form.cycle_status(-1),
        KeyCode::Right => app.form.cycle_status(1),
        KeyCode::Backspace => app.form.delete_char(),
        KeyCode::Char(c) => app.form.input_char(c),
        _ => {}
    }
}
