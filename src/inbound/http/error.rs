//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into consistent status codes and rendered
//! pages. An unauthenticated request is redirected to the login form rather
//! than answered with a bare 401, since every route here serves a browser.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::render;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        // Browser flow: send the visitor to the login form.
        ErrorCode::Unauthorized => StatusCode::SEE_OTHER,
        // Missing and foreign resources answer identically.
        ErrorCode::AccessDenied => StatusCode::NOT_FOUND,
        ErrorCode::DuplicateEmail => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    match error.code() {
        // Never leak internal detail to the page.
        ErrorCode::InternalError => "Internal server error",
        _ => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if self.code() == ErrorCode::Unauthorized {
            return builder
                .insert_header((header::LOCATION, "/login"))
                .finish();
        }

        builder
            .content_type(header::ContentType::html())
            .body(render::error_page(status, public_message(self)))
    }
}
