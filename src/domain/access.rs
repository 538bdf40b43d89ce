//! Ownership checks for cases and tasks.
//!
//! Every authenticated route that touches a case or task goes through this
//! service. A resource that does not exist and a resource owned by someone
//! else produce the same [`ErrorCode::AccessDenied`](crate::domain::ErrorCode)
//! outcome, so responses leak nothing about which ids are in use.

use std::sync::Arc;

use crate::domain::ports::{CaseRepository, TaskRepository};
use crate::domain::{Case, CaseId, Error, Task, TaskId, UserId};

/// Resolves resources while enforcing that the caller owns them.
#[derive(Clone)]
pub struct AccessControl {
    cases: Arc<dyn CaseRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl AccessControl {
    pub fn new(cases: Arc<dyn CaseRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { cases, tasks }
    }

    /// Fetch `case_id` if and only if `user` owns it.
    pub async fn authorize_case(&self, user: UserId, case_id: CaseId) -> Result<Case, Error> {
        let case = self.cases.find(case_id).await?;
        match case {
            Some(case) if case.owner() == user => Ok(case),
            _ => Err(Error::access_denied("case not found")),
        }
    }

    /// Fetch `task_id` together with its owning case, if `user` owns that
    /// case. Task ownership is transitive through the case.
    pub async fn authorize_task(
        &self,
        user: UserId,
        task_id: TaskId,
    ) -> Result<(Case, Task), Error> {
        let Some(task) = self.tasks.find(task_id).await? else {
            return Err(Error::access_denied("task not found"));
        };
        let case = self.authorize_case(user, task.case()).await?;
        Ok((case, task))
    }
}
