//! Case handlers: dashboard, creation, and detail.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{CaseDraft, CaseId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html, render, see_other};

#[derive(Debug, Deserialize)]
pub struct CaseForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
}

#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let cases = state.cases.list_for_owner(user).await?;
    Ok(html(StatusCode::OK, render::dashboard_page(&cases)))
}

#[get("/case/new")]
pub async fn new_case_form(session: SessionContext) -> ApiResult<HttpResponse> {
    session.require_user()?;
    Ok(html(StatusCode::OK, render::new_case_page(None, "", "", "")))
}

#[post("/case/new")]
pub async fn create_case(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CaseForm>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let form = form.into_inner();
    let draft = match CaseDraft::try_from_parts(&form.title, &form.client_name, &form.description) {
        Ok(draft) => draft,
        Err(err) => {
            return Ok(html(
                StatusCode::BAD_REQUEST,
                render::new_case_page(
                    Some(&err.to_string()),
                    &form.title,
                    &form.client_name,
                    &form.description,
                ),
            ));
        }
    };

    let case = state.cases.create(user, &draft).await?;
    tracing::info!(case = %case.id(), owner = %user, "case opened");
    Ok(see_other("/dashboard"))
}

#[get("/case/{id}")]
pub async fn case_detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let case = state
        .access
        .authorize_case(user, CaseId::new(path.into_inner()))
        .await?;
    let tasks = state.tasks.list_for_case(case.id()).await?;
    Ok(html(StatusCode::OK, render::case_page(&case, &tasks)))
}
