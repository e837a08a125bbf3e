//! 内存版任务存储
//!
//! 供 `--demo` 模式和测试使用：行为对齐远端 /tasks（自增 ID、字段必填校验、
//! 按 ID 更新/删除），数据只存活于进程内。

use std::sync::Mutex;

use chrono::Utc;

use crate::error::{Result, TaskmanError};
use crate::model::{Task, TaskDraft};

use super::TaskStore;

/// 进程内任务存储
///
/// Mutex 只因为 trait 以 `&self` 访问；事件循环本身是单线程的。
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
}

impl MemoryStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// 用给定任务初始化（ID 从现有最大值 +1 开始分配）
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { tasks, next_id }),
        }
    }

    /// 带演示数据的存储（--demo 模式）
    pub fn with_demo_tasks() -> Self {
        let seed = [
            ("Write the release notes", "Summarize changes since 0.4", "TODO"),
            ("Fix login redirect", "Safari drops the query string", "in-progress"),
            ("Review PR #42", "Waiting on CI", "Pending"),
            ("Update onboarding doc", "Screenshots were stale", "Completed"),
        ];
        let tasks = seed
            .into_iter()
            .enumerate()
            .map(|(i, (title, description, status))| Task {
                id: i as i64 + 1,
                title: title.to_string(),
                description: description.to_string(),
                status: status.to_string(),
                created_at: Some(Utc::now()),
            })
            .collect();
        Self::with_tasks(tasks)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 与后端相同的必填校验（后端对空字段返回 400）
fn validate(title: &str, description: &str, status: &str) -> Result<()> {
    if title.is_empty() {
        return Err(TaskmanError::invalid_data("title is required"));
    }
    if description.is_empty() {
        return Err(TaskmanError::invalid_data("description is required"));
    }
    if status.is_empty() {
        return Err(TaskmanError::invalid_data("status is required"));
    }
    Ok(())
}

impl TaskStore for MemoryStore {
    fn list(&self) -> Result<Vec<Task>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.tasks.clone())
    }

    fn create(&self, draft: &TaskDraft) -> Result<Task> {
        validate(&draft.title, &draft.description, &draft.status)?;

        let mut inner = self.inner.lock().expect("store lock poisoned");
        let task = Task {
            id: inner.next_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
            created_at: Some(Utc::now()),
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        Ok(task)
    }

    fn update(&self, id: i64, task: &Task) -> Result<Task> {
        validate(&task.title, &task.description, &task.status)?;

        let mut inner = self.inner.lock().expect("store lock poisoned");
        let slot = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskmanError::not_found(format!("task {id}")))?;

        // 与后端一致：只覆盖可编辑字段，id/created_at 不动
        slot.title = task.title.clone();
        slot.description = task.description.clone();
        slot.status = task.status.clone();
        Ok(slot.clone())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        if inner.tasks.len() == before {
            return Err(TaskmanError::not_found(format!("task {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            status: "TODO".to_string(),
        }
    }

    #[test]
    fn test_list_is_idempotent() {
        let store = MemoryStore::with_demo_tasks();
        let first = store.list().unwrap();
        let second = store.list().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.create(&draft("a")).unwrap();
        let b = store.create(&draft("b")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.created_at.is_some());
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let store = MemoryStore::new();
        let err = store.create(&draft("")).unwrap_err();
        assert!(err.to_string().contains("title is required"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let store = MemoryStore::new();
        let created = store.create(&draft("a")).unwrap();

        let mut wanted = created.clone();
        wanted.title = "renamed".to_string();
        wanted.status = "Completed".to_string();
        let updated = store.update(created.id, &wanted).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "renamed");
    }

    #[test]
    fn test_update_unknown_id() {
        let store = MemoryStore::new();
        let task = Task {
            id: 99,
            title: "x".to_string(),
            description: "y".to_string(),
            status: "TODO".to_string(),
            created_at: None,
        };
        assert!(store.update(99, &task).is_err());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = MemoryStore::with_demo_tasks();
        let before = store.list().unwrap();
        store.delete(before[1].id).unwrap();

        let after = store.list().unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|t| t.id != before[1].id));
        // 其余条目原样保留
        assert_eq!(after[0], before[0]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let store = MemoryStore::new();
        assert!(store.delete(1).is_err());
    }
}
