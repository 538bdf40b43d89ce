//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The extractor reads the session cookie and resolves it against the
//! [`SessionStore`] port before the handler runs, so handlers deal only with
//! a domain-friendly "who is calling" view.

use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::SessionToken;
use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;

/// Cookie under which the session token travels.
pub const SESSION_COOKIE: &str = "session";

/// Resolved session view for one request.
#[derive(Clone)]
pub struct SessionContext {
    token: Option<SessionToken>,
    user: Option<UserId>,
}

impl SessionContext {
    /// Token presented by the request, whether or not it resolved.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// The authenticated user, if the presented token resolved.
    pub fn user_id(&self) -> Option<UserId> {
        self.user
    }

    /// Require an authenticated user or redirect to the login form.
    pub fn require_user(&self) -> Result<UserId, Error> {
        self.user
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let raw = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned());
        Box::pin(async move {
            let Some(state) = state else {
                return Err(Error::internal("HTTP state not configured").into());
            };
            let token = raw.map(SessionToken::from_raw);
            let user = match &token {
                Some(token) => state.sessions.resolve(token).await,
                None => None,
            };
            Ok(Self { token, user })
        })
    }
}

/// Build the cookie carrying a freshly issued session token.
pub fn session_cookie(token: &SessionToken, state: &HttpState) -> Cookie<'static> {
    let max_age = i64::try_from(state.session_ttl.as_secs())
        .map(time::Duration::seconds)
        .unwrap_or(time::Duration::MAX);
    Cookie::build(SESSION_COOKIE, token.as_str().to_owned())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .max_age(max_age)
        .finish()
}

/// Build the removal cookie that logs a browser out.
pub fn session_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}
