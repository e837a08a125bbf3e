pub mod task;

pub use task::{Task, TaskDraft, STATUS_OPTIONS};
