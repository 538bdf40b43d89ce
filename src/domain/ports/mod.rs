//! Ports through which the domain talks to the outside world.
//!
//! Driving ports ([`CredentialService`]) are entry points for inbound
//! adapters; driven ports ([`CaseRepository`], [`TaskRepository`],
//! [`SessionStore`], [`Summarizer`]) are implemented by outbound adapters.
//! Handlers and the access-control service hold `Arc<dyn Port>` handles,
//! which keeps every adapter swappable in tests.

pub mod case_repository;
pub mod credential_service;
pub mod session_store;
pub mod summarizer;
pub mod task_repository;

pub use case_repository::{CaseRepository, CaseRepositoryError};
pub use credential_service::CredentialService;
pub use session_store::{
    DEFAULT_SESSION_TTL, InMemorySessionStore, SessionStore, SessionToken,
};
pub use summarizer::{HeuristicSummarizer, Summarizer};
pub use task_repository::{TaskRepository, TaskRepositoryError};
