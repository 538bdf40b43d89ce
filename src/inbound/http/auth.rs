//! Registration, login, and logout handlers.
//!
//! Validation failures re-render the form with the visitor's email intact
//! and an explanatory banner; only infrastructure failures propagate to the
//! error mapping. Login failure is answered with the same message whether
//! the email is unknown or the password wrong.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{Credentials, Error, ErrorCode, UserId};
use crate::inbound::http::session::{SessionContext, session_cookie, session_removal_cookie};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html, render, see_other};

/// Raw email/password form payload; defaults keep missing fields from
/// failing deserialization so validation can answer instead.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

async fn start_session(state: &HttpState, user: UserId) -> HttpResponse {
    let token = state.sessions.create(user).await;
    HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, "/dashboard"))
        .cookie(session_cookie(&token, state))
        .finish()
}

#[get("/register")]
pub async fn register_form() -> HttpResponse {
    html(StatusCode::OK, render::register_page(None, ""))
}

#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let credentials = match Credentials::try_from_parts(&form.email, &form.password) {
        Ok(credentials) => credentials,
        Err(err) => {
            return Ok(html(
                StatusCode::BAD_REQUEST,
                render::register_page(Some(&err.to_string()), &form.email),
            ));
        }
    };

    match state.credentials.register(&credentials).await {
        Ok(user) => {
            // A fresh account still has to log in; no session is issued here.
            tracing::info!(user = %user, "account registered");
            Ok(see_other("/login"))
        }
        Err(err) if err.code() == ErrorCode::DuplicateEmail => Ok(html(
            StatusCode::CONFLICT,
            render::register_page(Some(err.message()), &form.email),
        )),
        Err(err) => Err(err),
    }
}

#[get("/login")]
pub async fn login_form() -> HttpResponse {
    html(StatusCode::OK, render::login_page(None, ""))
}

#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let rejected = |message: &str| {
        html(
            StatusCode::UNAUTHORIZED,
            render::login_page(Some(message), &form.email),
        )
    };

    let Ok(credentials) = Credentials::try_from_parts(&form.email, &form.password) else {
        // Malformed input gets the same answer as a bad password.
        return Ok(rejected("invalid email or password"));
    };

    match state.credentials.authenticate(&credentials).await {
        Ok(user) => Ok(start_session(&state, user).await),
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            Ok(rejected("invalid email or password"))
        }
        Err(err) => Err(err),
    }
}

#[get("/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> Result<HttpResponse, Error> {
    if let Some(token) = session.token() {
        state.sessions.destroy(token).await;
    }
    let mut response = see_other("/");
    response
        .add_cookie(&session_removal_cookie())
        .map_err(|err| Error::internal(format!("failed to clear session cookie: {err}")))?;
    Ok(response)
}
