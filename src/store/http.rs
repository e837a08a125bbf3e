//! HTTP implementation of the task store.
//!
//! Talks to the backend's /tasks collection. Every operation is a single
//! blocking round trip with no retries; non-2xx responses surface as
//! `TaskmanError::Transport` (ureq treats 4xx/5xx as errors), so a missing
//! id on update/delete looks the same as any other remote failure.

use std::time::Duration;

use crate::error::{Result, TaskmanError};
use crate::model::{Task, TaskDraft};

use super::TaskStore;

/// ureq-backed store bound to a fixed base URL
pub struct HttpStore {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpStore {
    /// `base_url` is the server root (e.g. "http://localhost:8080"),
    /// not the collection path; a trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    fn decode<T: serde::de::DeserializeOwned>(response: ureq::Response) -> Result<T> {
        response
            .into_json()
            .map_err(|e| TaskmanError::transport(format!("invalid response body: {e}")))
    }
}

impl TaskStore for HttpStore {
    fn list(&self) -> Result<Vec<Task>> {
        let response = self.agent.get(&self.collection_url()).call()?;
        Self::decode(response)
    }

    fn create(&self, draft: &TaskDraft) -> Result<Task> {
        let response = self.agent.post(&self.collection_url()).send_json(draft)?;
        Self::decode(response)
    }

    fn update(&self, id: i64, task: &Task) -> Result<Task> {
        let response = self.agent.put(&self.item_url(id)).send_json(task)?;
        Self::decode(response)
    }

    fn delete(&self, id: i64) -> Result<()> {
        // 204, no body
        self.agent.delete(&self.item_url(id)).call()?;
        Ok(())
    }
}
