//! Driving port for registration and authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register or authenticate credentials without knowing (or importing) the
//! backing infrastructure. HTTP handler tests substitute a test double
//! instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, UserId};

/// Domain use-case port for credential management.
///
/// Contract notes:
/// - `register` relies on the store's uniqueness constraint to reject a
///   taken email, never on a prior read, so concurrent duplicate attempts
///   settle atomically.
/// - `authenticate` reports unknown email and wrong password identically
///   ([`crate::domain::ErrorCode::Unauthorized`] with a generic message)
///   and performs digest work in both cases.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Create an account and return the new user id.
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error>;

    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error>;
}
