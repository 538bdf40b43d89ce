//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::AccessControl;
use crate::domain::ports::{
    CaseRepository, CredentialService, SessionStore, Summarizer, TaskRepository,
    DEFAULT_SESSION_TTL,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<dyn CredentialService>,
    pub sessions: Arc<dyn SessionStore>,
    pub cases: Arc<dyn CaseRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub access: AccessControl,
    pub summarizer: Arc<dyn Summarizer>,
    /// Max-Age applied to issued session cookies; server-side expiry is the
    /// session store's concern.
    pub session_ttl: Duration,
    /// Whether issued cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub credentials: Arc<dyn CredentialService>,
    pub sessions: Arc<dyn SessionStore>,
    pub cases: Arc<dyn CaseRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl HttpState {
    /// Construct state from a ports bundle with default cookie policy.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::with_cookie_policy(ports, DEFAULT_SESSION_TTL, false)
    }

    /// Construct state with an explicit session TTL and `Secure` flag.
    pub fn with_cookie_policy(
        ports: HttpStatePorts,
        session_ttl: Duration,
        cookie_secure: bool,
    ) -> Self {
        let HttpStatePorts {
            credentials,
            sessions,
            cases,
            tasks,
            summarizer,
        } = ports;
        let access = AccessControl::new(Arc::clone(&cases), Arc::clone(&tasks));
        Self {
            credentials,
            sessions,
            cases,
            tasks,
            access,
            summarizer,
            session_ttl,
            cookie_secure,
        }
    }
}
