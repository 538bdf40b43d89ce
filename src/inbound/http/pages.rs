//! Public landing page.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get};

use crate::inbound::http::session::SessionContext;
use crate::inbound::http::{html, render, see_other};

/// Visitors get the landing page; signed-in users go straight to their
/// dashboard.
#[get("/")]
pub async fn home(session: SessionContext) -> HttpResponse {
    if session.user_id().is_some() {
        return see_other("/dashboard");
    }
    html(StatusCode::OK, render::home_page())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::test;

    use crate::inbound::http::test_utils::{register_and_login, test_app};

    #[actix_web::test]
    async fn home_offers_login_to_visitors() {
        let app = test::init_service(test_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("UTF-8 body");
        assert!(body.contains("/login"));
        assert!(body.contains("/register"));
    }

    #[actix_web::test]
    async fn home_redirects_members_to_dashboard() {
        let app = test::init_service(test_app()).await;
        let cookie = register_and_login(&app, "ada@example.com").await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).expect("location"),
            "/dashboard"
        );
    }
}
