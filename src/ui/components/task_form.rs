//! 任务表单组件
//!
//! 表单持有自己的草稿缓冲，只有当控制器的表单代数越过自己记录的代数时
//! 才会用编辑目标（或默认值）重置，避免正在输入的内容被每帧渲染冲掉。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Task, TaskDraft, STATUS_OPTIONS};
use crate::theme::ThemeColors;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Status,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Status,
            FormField::Description => FormField::Title,
            FormField::Status => FormField::Description,
        }
    }
}

/// 表单状态
#[derive(Debug)]
pub struct FormState {
    /// 标题输入
    pub title: String,
    /// 描述输入
    pub description: String,
    /// 状态（通过 ←/→ 在 STATUS_OPTIONS 间循环）
    pub status: String,
    /// 当前聚焦字段
    pub field: FormField,
    /// 已同步到的表单代数（落后于控制器时需要重置）
    pub seen_generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: STATUS_OPTIONS[0].to_string(),
            field: FormField::Title,
            seen_generation: 0,
        }
    }

    /// 重置表单：有编辑目标则填充其字段，否则回到新建默认值
    pub fn reset(&mut self, editing: Option<&Task>, generation: u64) {
        match editing {
            Some(task) => {
                self.title = task.title.clone();
                self.description = task.description.clone();
                self.status = task.status.clone();
            }
            None => {
                self.title.clear();
                self.description.clear();
                self.status = STATUS_OPTIONS[0].to_string();
            }
        }
        self.field = FormField::Title;
        self.seen_generation = generation;
    }

    /// 当前草稿
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
        }
    }

    /// 向聚焦字段输入字符（状态字段不接受自由输入）
    pub fn input_char(&mut self, c: char) {
        match self.field {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Status => {}
        }
    }

    /// 删除聚焦字段末尾字符
    pub fn delete_char(&mut self) {
        match self.field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Status => {}
        }
    }

    /// 在状态选项间循环（step 为 ±1）
    pub fn cycle_status(&mut self, step: i64) {
        let len = STATUS_OPTIONS.len() as i64;
        let next = match STATUS_OPTIONS.iter().position(|s| *s == self.status) {
            Some(i) => (i as i64 + step).rem_euclid(len),
            // 当前值不在选项里（服务端自由文本），从第一个选项重新开始
            None => 0,
        };
        self.status = STATUS_OPTIONS[next as usize].to_string();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 渲染任务表单
pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    editing: Option<&Task>,
    focused: bool,
    colors: &ThemeColors,
) {
    let title = match editing {
        Some(task) => format!(" Edit Task #{} ", task.id),
        None => " New Task ".to_string(),
    };

    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, description_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(inner);

    render_input(
        frame,
        title_area,
        "Title",
        &form.title,
        focused && form.field == FormField::Title,
        colors,
    );
    render_input(
        frame,
        description_area,
        "Description",
        &form.description,
        focused && form.field == FormField::Description,
        colors,
    );
    render_status(
        frame,
        status_area,
        &form.status,
        focused && form.field == FormField::Status,
        colors,
    );
}

fn field_block<'a>(label: &'a str, active: bool, colors: &ThemeColors) -> Block<'a> {
    let border_color = if active { colors.highlight } else { colors.border };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    active: bool,
    colors: &ThemeColors,
) {
    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(colors.text),
    )];
    if active {
        // 简易光标
        spans.push(Span::styled("▏", Style::default().fg(colors.highlight)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block(label, active, colors));
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: &str, active: bool, colors: &ThemeColors) {
    let line = if active {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(colors.highlight)),
            Span::styled(
                status.to_string(),
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▸", Style::default().fg(colors.highlight)),
        ])
    } else {
        Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(colors.text),
        ))
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Left)
        .block(field_block("Status", active, colors));
    frame.render_widget(paragraph, area);
}
