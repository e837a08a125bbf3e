//! 任务同步控制器
//!
//! 持有本地任务列表与当前编辑目标，是唯一允许修改这份状态的组件。
//! 每次 create/update/delete 成功后用服务端返回值对齐本地列表；
//! 失败的操作不留下任何局部修改，本地状态始终等于最后一次成功响应。

use crate::error::Result;
use crate::model::{Task, TaskDraft};
use crate::store::TaskStore;

/// 同步控制器
pub struct SyncController {
    store: Box<dyn TaskStore>,
    /// 本地任务列表（顺序 = 服务端返回顺序，新建追加到末尾）
    tasks: Vec<Task>,
    /// 当前编辑目标（None = 表单处于新建模式）
    editing: Option<Task>,
    /// 表单代数：编辑目标变化或提交完成后 +1，表单据此丢弃未提交的草稿
    form_generation: u64,
}

impl SyncController {
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            editing: None,
            form_generation: 0,
        }
    }

    /// 当前任务列表快照（表现层每帧重读）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 当前编辑目标
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// 当前表单代数
    pub fn form_generation(&self) -> u64 {
        self.form_generation
    }

    /// 首次加载 / 手动刷新：成功时整体替换本地列表，失败时列表保持原样
    pub fn refresh(&mut self) -> Result<()> {
        let tasks = self.store.list()?;
        self.tasks = tasks;
        Ok(())
    }

    /// 进入编辑模式，表单改为从 task 填充
    pub fn begin_edit(&mut self, task: Task) {
        self.editing = Some(task);
        self.form_generation += 1;
    }

    /// 退出编辑模式，表单回到新建默认值
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form_generation += 1;
    }

    /// 提交表单：有编辑目标走更新，否则走新建
    ///
    /// 失败时 tasks/editing/form_generation 全部保持原样。
    pub fn submit(&mut self, draft: &TaskDraft) -> Result<()> {
        match self.editing.clone() {
            None => {
                let created = self.store.create(draft)?;
                self.tasks.push(created);
            }
            Some(target) => {
                let updated = self.store.update(target.id, &target.with_draft(draft))?;
                // 按返回值的 ID 替换而不是按下标，列表顺序变化时也不会错位
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
            }
        }
        self.editing = None;
        self.form_generation += 1;
        Ok(())
    }

    /// 删除任务：立即执行，无确认环节
    pub fn remove(&mut self, id: i64) -> Result<()> {
        self.store.delete(id)?;
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }
}
