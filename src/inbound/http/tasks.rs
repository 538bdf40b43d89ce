//! Task handlers: creation and completion toggling.
//!
//! Every route authorizes through the owning case first, so a task id from
//! another user's case behaves exactly like an id that never existed.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{CaseId, TaskDraft, TaskId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, html, render, see_other};

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
}

#[get("/case/{id}/task/new")]
pub async fn new_task_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let case = state
        .access
        .authorize_case(user, CaseId::new(path.into_inner()))
        .await?;
    Ok(html(
        StatusCode::OK,
        render::new_task_page(&case, None, "", ""),
    ))
}

#[post("/case/{id}/task/new")]
pub async fn create_task(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    form: web::Form<TaskForm>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let case = state
        .access
        .authorize_case(user, CaseId::new(path.into_inner()))
        .await?;

    let form = form.into_inner();
    let draft = match TaskDraft::try_from_parts(&form.description, &form.due_date) {
        Ok(draft) => draft,
        Err(err) => {
            return Ok(html(
                StatusCode::BAD_REQUEST,
                render::new_task_page(
                    &case,
                    Some(&err.to_string()),
                    &form.description,
                    &form.due_date,
                ),
            ));
        }
    };

    let task = state.tasks.add(case.id(), &draft).await?;
    tracing::info!(task = %task.id(), case = %case.id(), "task added");
    Ok(see_other(&format!("/case/{}", case.id())))
}

// A plain link on the case page drives the toggle, hence GET.
#[get("/task/{id}/complete")]
pub async fn complete_task(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user()?;
    let (case, task) = state
        .access
        .authorize_task(user, TaskId::new(path.into_inner()))
        .await?;
    let completed = state.tasks.toggle_completed(task.id()).await?;
    tracing::info!(task = %task.id(), completed, "task completion toggled");
    Ok(see_other(&format!("/case/{}", case.id())))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::test;
    use rstest::rstest;

    use crate::inbound::http::test_utils::{
        add_task_via_form, authed_form_request, create_case_via_form, register_and_login, test_app,
    };

    #[actix_web::test]
    async fn added_task_appears_on_case_page() {
        let app = test::init_service(test_app()).await;
        let cookie = register_and_login(&app, "ada@example.com").await;
        let location = create_case_via_form(&app, &cookie, "Estate", "Byrne", "Probate.").await;
        add_task_via_form(&app, &cookie, &location, "File inventory", "2026-09-01").await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&location)
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("UTF-8 body");
        assert!(body.contains("File inventory"));
        assert!(body.contains("2026-09-01"));
    }

    #[rstest]
    #[case(&[("description", ""), ("due_date", "2026-09-01")])]
    #[case(&[("description", "File inventory"), ("due_date", "")])]
    #[case(&[("description", "File inventory"), ("due_date", "01/09/2026")])]
    #[case(&[("description", "File inventory"), ("due_date", "2026-13-40")])]
    #[actix_web::test]
    async fn invalid_task_form_re_renders_with_400(#[case] fields: &[(&str, &str)]) {
        let app = test::init_service(test_app()).await;
        let cookie = register_and_login(&app, "ada@example.com").await;
        let location = create_case_via_form(&app, &cookie, "Estate", "Byrne", "Probate.").await;

        let res = test::call_service(
            &app,
            authed_form_request(&format!("{location}/task/new"), fields, &cookie),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn toggling_twice_restores_open_state() {
        let app = test::init_service(test_app()).await;
        let cookie = register_and_login(&app, "ada@example.com").await;
        let location = create_case_via_form(&app, &cookie, "Estate", "Byrne", "Probate.").await;
        add_task_via_form(&app, &cookie, &location, "File inventory", "2026-09-01").await;

        for _ in 0..2 {
            let res = test::call_service(
                &app,
                test::TestRequest::get()
                    .uri("/task/1/complete")
                    .cookie(cookie.clone())
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER);
            assert_eq!(
                res.headers().get(header::LOCATION).expect("location"),
                location.as_str()
            );
        }

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&location)
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("UTF-8 body");
        assert!(body.contains("Complete"), "task should be open again");
    }

    #[actix_web::test]
    async fn foreign_task_toggle_is_not_found() {
        let app = test::init_service(test_app()).await;
        let ada = register_and_login(&app, "ada@example.com").await;
        let bob = register_and_login(&app, "bob@example.com").await;
        let location = create_case_via_form(&app, &ada, "Estate", "Byrne", "Probate.").await;
        add_task_via_form(&app, &ada, &location, "File inventory", "2026-09-01").await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/task/1/complete")
                .cookie(bob)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn task_form_on_foreign_case_is_not_found() {
        let app = test::init_service(test_app()).await;
        let ada = register_and_login(&app, "ada@example.com").await;
        let bob = register_and_login(&app, "bob@example.com").await;
        let location = create_case_via_form(&app, &ada, "Estate", "Byrne", "Probate.").await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("{location}/task/new"))
                .cookie(bob)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_task_toggle_is_not_found() {
        let app = test::init_service(test_app()).await;
        let cookie = register_and_login(&app, "ada@example.com").await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/task/404/complete")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
