//! Driven port for task persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CaseId, Error as DomainError, Task, TaskDraft, TaskId};

/// Infrastructure failures surfaced by [`TaskRepository`] implementations.
#[derive(Debug, Error)]
pub enum TaskRepositoryError {
    #[error("task store connection failed: {0}")]
    Connection(String),
    #[error("task query failed: {0}")]
    Query(String),
}

impl TaskRepositoryError {
    pub fn connection(err: impl std::fmt::Display) -> Self {
        Self::Connection(err.to_string())
    }

    pub fn query(err: impl std::fmt::Display) -> Self {
        Self::Query(err.to_string())
    }
}

impl From<TaskRepositoryError> for DomainError {
    fn from(err: TaskRepositoryError) -> Self {
        tracing::error!(error = %err, "task repository failure");
        DomainError::service_unavailable("task store unavailable")
    }
}

/// Persistence port for case tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new open task under `case` and return it with its id.
    async fn add(&self, case: CaseId, draft: &TaskDraft) -> Result<Task, TaskRepositoryError>;

    /// All tasks under `case`, soonest due date first.
    async fn list_for_case(&self, case: CaseId) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Look up a task by id. `Ok(None)` when no such row exists.
    async fn find(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError>;

    /// Flip the completion flag of `id` and return the new value.
    ///
    /// The read-modify-write must be atomic with respect to concurrent
    /// toggles of the same task.
    async fn toggle_completed(&self, id: TaskId) -> Result<bool, TaskRepositoryError>;
}
