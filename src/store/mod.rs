//! 任务存储访问层
//!
//! `TaskStore` 对应后端的 /tasks 资源集合：四个操作、每个操作一次往返。
//! 实现有两个：走 HTTP 的 [`HttpStore`] 和进程内的 [`MemoryStore`]（--demo 模式与测试用）。

pub mod http;
pub mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{Task, TaskDraft};

/// 任务集合的远端句柄
///
/// 无内部可见状态、无重试、无缓存；失败的调用不产生任何副作用，
/// 调用方不得假设失败时拿到部分结果。
pub trait TaskStore {
    /// 拉取全部任务
    fn list(&self) -> Result<Vec<Task>>;

    /// 新建任务，返回服务端分配了 ID 的完整记录
    fn create(&self, draft: &TaskDraft) -> Result<Task>;

    /// 整体替换 id 对应的任务；返回值以服务端存储结果为准，调用方必须采纳返回值
    fn update(&self, id: i64, task: &Task) -> Result<Task>;

    /// 删除 id 对应的任务
    fn delete(&self, id: i64) -> Result<()>;
}
