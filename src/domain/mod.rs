//! Core business logic, transport and storage agnostic.
//!
//! Value types validate at construction; [`ports`] define the seams adapters
//! implement; [`AccessControl`] is the one place ownership is decided.

pub mod access;
pub mod auth;
pub mod case;
pub mod error;
pub mod password;
pub mod ports;
pub mod summary;
pub mod task;
pub mod user;

pub use access::AccessControl;
pub use auth::{Credentials, CredentialValidationError, EMAIL_MAX};
pub use case::{Case, CaseDraft, CaseId, CaseValidationError, CLIENT_NAME_MAX, TITLE_MAX};
pub use error::{Error, ErrorCode};
pub use password::{PasswordVerifier, PasswordVerifierError};
pub use summary::{heuristic_summary, DEFAULT_SUMMARY_SENTENCES};
pub use task::{Task, TaskDraft, TaskId, TaskValidationError, DESCRIPTION_MAX, DUE_DATE_FORMAT};
pub use user::UserId;
