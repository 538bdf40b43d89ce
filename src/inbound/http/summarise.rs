//! Case summary handler.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};

use crate::domain::{CaseId, DEFAULT_SUMMARY_SENTENCES};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html, render};

#[get("/summarise/{case_id}")]
pub async fn summarise_case(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let case = state
        .access
        .authorize_case(user, CaseId::new(path.into_inner()))
        .await?;
    let summary = state
        .summarizer
        .summarise(case.description(), DEFAULT_SUMMARY_SENTENCES)
        .await;
    Ok(html(StatusCode::OK, render::summary_page(&case, &summary)))
}
