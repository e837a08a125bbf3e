use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 表单默认提供的状态选项
///
/// 后端不做枚举校验，status 本质上是自由文本；这里的取值与后端种子数据保持一致。
pub const STATUS_OPTIONS: &[&str] = &["TODO", "in-progress", "Pending", "Completed"];

/// 任务数据（服务端为权威数据源）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（服务端分配，创建前不存在，创建后不可变）
    pub id: i64,
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 状态（自由文本，见 STATUS_OPTIONS）
    pub status: String,
    /// 创建时间（服务端写入，客户端只读透传）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// 用表单草稿覆盖可编辑字段，保留 id 和 created_at
    pub fn with_draft(&self, draft: &TaskDraft) -> Task {
        Task {
            id: self.id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
            created_at: self.created_at,
        }
    }
}

/// 表单草稿：尚未获得服务端 ID 的任务字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: STATUS_OPTIONS[0].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_format() {
        // 后端返回的典型记录
        let json = r#"{
            "id": 1,
            "title": "First Task",
            "description": "write docs",
            "status": "TODO",
            "created_at": "2024-05-01T10:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.status, "TODO");
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_task_without_created_at() {
        let json = r#"{"id": 2, "title": "t", "description": "d", "status": "Pending"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.created_at, None);

        // 缺失的 created_at 不应出现在序列化结果里
        let out = serde_json::to_string(&task).unwrap();
        assert!(!out.contains("created_at"));
    }

    #[test]
    fn test_draft_has_no_id() {
        let draft = TaskDraft::default();
        let out = serde_json::to_string(&draft).unwrap();
        assert!(!out.contains("\"id\""));
        assert_eq!(draft.status, "TODO");
    }

    #[test]
    fn test_with_draft_preserves_identity() {
        let task = Task {
            id: 7,
            title: "old".to_string(),
            description: "old desc".to_string(),
            status: "TODO".to_string(),
            created_at: None,
        };
        let draft = TaskDraft {
            title: "new".to_string(),
            description: "new desc".to_string(),
            status: "Completed".to_string(),
        };
        let merged = task.with_draft(&draft);
        assert_eq!(merged.id, 7);
        assert_eq!(merged.title, "new");
        assert_eq!(merged.status, "Completed");
    }
}
