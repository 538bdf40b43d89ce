//! HTTP adapter: handlers, session plumbing, rendering, error mapping.

pub mod auth;
pub mod cases;
pub mod error;
pub mod pages;
pub mod render;
pub mod session;
pub mod state;
pub mod summarise;
pub mod tasks;

#[cfg(test)]
pub mod test_utils;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

pub use error::{ApiResult, TRACE_ID_HEADER};
pub use state::{HttpState, HttpStatePorts};

/// Register every route of the application on `cfg`.
///
/// Shared between the real server and handler tests so both exercise the
/// same routing table.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(auth::register_form)
        .service(auth::register)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
        .service(cases::dashboard)
        .service(cases::new_case_form)
        .service(cases::create_case)
        .service(cases::case_detail)
        .service(tasks::new_task_form)
        .service(tasks::create_task)
        .service(tasks::complete_task)
        .service(summarise::summarise_case);
}

pub(crate) fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}
