//! 应用状态
//!
//! `App` 组合同步控制器与各 UI 状态。控制器是任务列表的唯一持有者，
//! 这里只做两件事：把按键翻译成控制器操作，把操作结果翻译成 Toast。

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::controller::SyncController;
use crate::model::Task;
use crate::theme::{get_theme_colors, Theme, ThemeColors};
use crate::ui::components::task_form::FormState;

/// Toast 默认展示时长
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Toast 类型（决定边框颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 焦点区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Form,
}

/// 应用状态
pub struct App {
    pub controller: SyncController,
    /// 列表选中状态
    pub list_state: ListState,
    /// 表单草稿状态
    pub form: FormState,
    /// 当前焦点
    pub focus: Focus,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 标题栏展示的后端标识（地址或 "demo"）
    pub server_label: String,
    /// 退出标记
    pub should_quit: bool,
}

impl App {
    /// 创建应用并完成首次加载；首次 list 失败时列表保持为空，仅提示错误
    pub fn new(controller: SyncController, server_label: impl Into<String>, theme: Theme) -> Self {
        let mut app = Self {
            controller,
            list_state: ListState::default(),
            form: FormState::new(),
            focus: Focus::List,
            toast: None,
            colors: get_theme_colors(theme),
            server_label: server_label.into(),
            should_quit: false,
        };

        if let Err(e) = app.controller.refresh() {
            app.show_error(format!("Error fetching tasks: {e}"));
        }
        app.ensure_selection();
        app.sync_form();
        app
    }

    // === Toast ===

    /// 显示普通 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, ToastKind::Info, TOAST_DURATION));
    }

    /// 显示错误 Toast 消息
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, ToastKind::Error, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    // === 列表选择 ===

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.list_state.selected()?;
        self.controller.tasks().get(index)
    }

    /// 确保列表有合法选中项（列表为空时清空选择）
    pub fn ensure_selection(&mut self) {
        let len = self.controller.tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i < len => {}
            // 删除末尾项后选中项可能越界，收缩到最后一项
            Some(_) => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.controller.tasks().len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.controller.tasks().len();
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    // === 表单同步 ===

    /// 表单代数落后于控制器时，用编辑目标（或默认值）重置表单
    pub fn sync_form(&mut self) {
        let generation = self.controller.form_generation();
        if self.form.seen_generation != generation {
            self.form.reset(self.controller.editing(), generation);
        }
    }

    // === 控制器操作封装（失败统一转 Toast，状态保持原样）===

    /// 手动刷新任务列表
    pub fn refresh_tasks(&mut self) {
        match self.controller.refresh() {
            Ok(()) => self.show_toast("Tasks refreshed"),
            Err(e) => self.show_error(format!("Error fetching tasks: {e}")),
        }
        self.ensure_selection();
    }

    /// 以选中任务为目标进入编辑模式
    pub fn begin_edit_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        self.controller.begin_edit(task);
        self.sync_form();
        self.focus = Focus::Form;
    }

    /// 进入新建模式（清掉可能存在的编辑目标）
    pub fn begin_create(&mut self) {
        self.controller.cancel_edit();
        self.sync_form();
        self.focus = Focus::Form;
    }

    /// 删除选中任务（无确认，立即执行）
    pub fn delete_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        match self.controller.remove(task.id) {
            Ok(()) => self.show_toast(format!("Deleted task #{}", task.id)),
            Err(e) => self.show_error(format!("Error deleting task: {e}")),
        }
        self.ensure_selection();
    }

    /// 提交表单，成功后焦点回到列表
    pub fn submit_form(&mut self) {
        let draft = self.form.draft();
        let updating = self.controller.editing().is_some();
        match self.controller.submit(&draft) {
            Ok(()) => {
                if updating {
                    self.show_toast("Task updated");
                } else {
                    self.show_toast("Task created");
                    // 新建的任务追加在末尾，顺手选中它
                    let len = self.controller.tasks().len();
                    self.list_state.select(Some(len - 1));
                }
                self.focus = Focus::List;
            }
            Err(e) => {
                let verb = if updating { "updating" } else { "adding" };
                self.show_error(format!("Error {verb} task: {e}"));
            }
        }
        self.sync_form();
        self.ensure_selection();
    }

    /// 取消编辑，表单回到默认值，焦点回到列表
    pub fn cancel_form(&mut self) {
        self.controller.cancel_edit();
        self.sync_form();
        self.focus = Focus::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskDraft;
    use crate::store::MemoryStore;

    fn app_with(tasks: Vec<Task>) -> App {
        let controller = SyncController::new(Box::new(MemoryStore::with_tasks(tasks)));
        App::new(controller, "test", Theme::Dark)
    }

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: "d".to_string(),
            status: "TODO".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_new_loads_and_selects_first() {
        let app = app_with(vec![task(1, "a"), task(2, "b")]);
        assert_eq!(app.controller.tasks().len(), 2);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app_with(vec![task(1, "a"), task(2, "b")]);
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_begin_edit_populates_form_and_moves_focus() {
        let mut app = app_with(vec![task(1, "First Task")]);
        app.begin_edit_selected();

        assert_eq!(app.focus, Focus::Form);
        assert_eq!(app.form.title, "First Task");
        assert_eq!(app.controller.editing().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_begin_create_resets_stale_draft() {
        let mut app = app_with(vec![task(1, "First Task")]);
        app.begin_edit_selected();
        app.form.title = "half edited".to_string();

        app.begin_create();
        assert!(app.form.title.is_empty());
        assert!(app.controller.editing().is_none());
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn test_submit_create_selects_new_task() {
        let mut app = app_with(vec![task(1, "a")]);
        app.begin_create();
        app.form.title = "fresh".to_string();
        app.form.description = "desc".to_string();

        app.submit_form();
        assert_eq!(app.controller.tasks().len(), 2);
        assert_eq!(app.list_state.selected(), Some(1));
        assert_eq!(app.focus, Focus::List);
        // 提交完成后表单回到新建默认值
        assert!(app.form.title.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_focus() {
        let mut app = app_with(vec![task(1, "a")]);
        app.begin_create();
        app.form.description = "desc only, no title".to_string();

        // MemoryStore 会因 title 为空而拒绝
        app.submit_form();
        assert_eq!(app.controller.tasks().len(), 1);
        assert_eq!(app.focus, Focus::Form);
        assert_eq!(app.form.description, "desc only, no title");
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = app_with(vec![task(1, "a"), task(2, "b")]);
        app.select_next();
        app.delete_selected(); // 删除 #2，选中项越界
        assert_eq!(app.controller.tasks().len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_cancel_form_restores_list_focus() {
        let mut app = app_with(vec![task(1, "a")]);
        app.begin_edit_selected();
        app.form.title = "scratch".to_string();

        app.cancel_form();
        assert_eq!(app.focus, Focus::List);
        assert!(app.controller.editing().is_none());
        assert!(app.form.title.is_empty());
    }

    #[test]
    fn test_edit_then_submit_updates_in_place() {
        let mut app = app_with(vec![task(1, "a"), task(2, "b")]);
        app.select_next();
        app.begin_edit_selected();
        app.form.title = "b2".to_string();
        app.form.status = "Completed".to_string();

        app.submit_form();
        let tasks = app.controller.tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 2);
        assert_eq!(tasks[1].title, "b2");
        assert_eq!(tasks[1].status, "Completed");
    }

    #[test]
    fn test_draft_round_trip() {
        let mut app = app_with(vec![]);
        app.begin_create();
        app.form.title = "t".to_string();
        app.form.description = "d".to_string();
        app.form.cycle_status(1);
        assert_eq!(
            app.form.draft(),
            TaskDraft {
                title: "t".to_string(),
                description: "d".to_string(),
                status: "in-progress".to_string(),
            }
        );
    }
}
