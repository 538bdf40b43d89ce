//! Driven port for case persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Case, CaseDraft, CaseId, Error as DomainError, UserId};

/// Infrastructure failures surfaced by [`CaseRepository`] implementations.
#[derive(Debug, Error)]
pub enum CaseRepositoryError {
    #[error("case store connection failed: {0}")]
    Connection(String),
    #[error("case query failed: {0}")]
    Query(String),
}

impl CaseRepositoryError {
    pub fn connection(err: impl std::fmt::Display) -> Self {
        Self::Connection(err.to_string())
    }

    pub fn query(err: impl std::fmt::Display) -> Self {
        Self::Query(err.to_string())
    }
}

impl From<CaseRepositoryError> for DomainError {
    fn from(err: CaseRepositoryError) -> Self {
        tracing::error!(error = %err, "case repository failure");
        DomainError::service_unavailable("case store unavailable")
    }
}

/// Persistence port for legal cases.
///
/// Lookup by id deliberately returns the case regardless of owner; the
/// ownership decision belongs to [`crate::domain::AccessControl`], not the
/// storage layer.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Persist a new case owned by `owner` and return it with its id.
    async fn create(&self, owner: UserId, draft: &CaseDraft) -> Result<Case, CaseRepositoryError>;

    /// All cases owned by `owner`, newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Case>, CaseRepositoryError>;

    /// Look up a case by id. `Ok(None)` when no such row exists.
    async fn find(&self, id: CaseId) -> Result<Option<Case>, CaseRepositoryError>;
}
