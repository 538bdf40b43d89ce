//! Shared fixtures for handler tests.
//!
//! Provides in-memory port implementations and an app factory wired through
//! the production routing table, so handler tests exercise real routes
//! without touching a database.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    CaseRepository, CaseRepositoryError, CredentialService, HeuristicSummarizer,
    InMemorySessionStore, TaskRepository, TaskRepositoryError,
};
use crate::domain::{
    Case, CaseDraft, CaseId, Credentials, Error, Task, TaskDraft, TaskId, UserId,
};
use crate::inbound::http::session::SESSION_COOKIE;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Credential service holding accounts in a map; passwords are compared in
/// the clear since nothing here outlives the test.
#[derive(Default)]
pub struct StubCredentialService {
    users: RwLock<HashMap<String, (i32, String)>>,
    next_id: AtomicI32,
}

#[async_trait]
impl CredentialService for StubCredentialService {
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.contains_key(credentials.email()) {
            return Err(Error::duplicate_email("email already registered"));
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        users.insert(
            credentials.email().to_owned(),
            (id, credentials.password().to_owned()),
        );
        Ok(UserId::new(id))
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        match users.get(credentials.email()) {
            Some((id, password)) if password == credentials.password() => Ok(UserId::new(*id)),
            _ => Err(Error::unauthorized("invalid email or password")),
        }
    }
}

#[derive(Default)]
pub struct InMemoryCaseRepository {
    cases: RwLock<Vec<Case>>,
    next_id: AtomicI32,
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn create(&self, owner: UserId, draft: &CaseDraft) -> Result<Case, CaseRepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let case = Case::new(
            CaseId::new(id),
            owner,
            draft.title().to_owned(),
            draft.client_name().to_owned(),
            draft.description().to_owned(),
            Utc::now().naive_utc(),
        );
        let mut cases = self.cases.write().unwrap_or_else(|e| e.into_inner());
        cases.push(case.clone());
        Ok(case)
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Case>, CaseRepositoryError> {
        let cases = self.cases.read().unwrap_or_else(|e| e.into_inner());
        let mut owned: Vec<Case> = cases
            .iter()
            .filter(|case| case.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|case| std::cmp::Reverse(case.id().get()));
        Ok(owned)
    }

    async fn find(&self, id: CaseId) -> Result<Option<Case>, CaseRepositoryError> {
        let cases = self.cases.read().unwrap_or_else(|e| e.into_inner());
        Ok(cases.iter().find(|case| case.id() == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
    next_id: AtomicI32,
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add(&self, case: CaseId, draft: &TaskDraft) -> Result<Task, TaskRepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let task = Task::new(
            TaskId::new(id),
            case,
            draft.description().to_owned(),
            draft.due_date(),
            false,
        );
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        tasks.push(task.clone());
        Ok(task)
    }

    async fn list_for_case(&self, case: CaseId) -> Result<Vec<Task>, TaskRepositoryError> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        let mut listed: Vec<Task> = tasks
            .iter()
            .filter(|task| task.case() == case)
            .cloned()
            .collect();
        listed.sort_by_key(Task::due_date);
        Ok(listed)
    }

    async fn find(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn toggle_completed(&self, id: TaskId) -> Result<bool, TaskRepositoryError> {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        let Some(index) = tasks.iter().position(|task| task.id() == id) else {
            return Err(TaskRepositoryError::query("no such task"));
        };
        let task = &tasks[index];
        let toggled = Task::new(
            task.id(),
            task.case(),
            task.description().to_owned(),
            task.due_date(),
            !task.completed(),
        );
        let completed = toggled.completed();
        tasks[index] = toggled;
        Ok(completed)
    }
}

/// State backed entirely by in-memory ports.
pub fn test_state() -> HttpState {
    HttpState::new(HttpStatePorts {
        credentials: Arc::new(StubCredentialService::default()),
        sessions: Arc::new(InMemorySessionStore::new()),
        cases: Arc::new(InMemoryCaseRepository::default()),
        tasks: Arc::new(InMemoryTaskRepository::default()),
        summarizer: Arc::new(HeuristicSummarizer),
    })
}

/// App with the production routing table over in-memory ports.
pub fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(test_state()))
        .configure(crate::inbound::http::routes)
}

/// Build a form POST request.
pub fn form_request(path: &str, fields: &[(&str, &str)]) -> actix_http::Request {
    test::TestRequest::post()
        .uri(path)
        .set_form(fields)
        .to_request()
}

/// Build a form POST request carrying a session cookie.
pub fn authed_form_request(
    path: &str,
    fields: &[(&str, &str)],
    cookie: &Cookie<'static>,
) -> actix_http::Request {
    test::TestRequest::post()
        .uri(path)
        .cookie(cookie.clone())
        .set_form(fields)
        .to_request()
}

/// Pull the session cookie out of a response.
pub fn session_cookie_from(
    res: &actix_web::dev::ServiceResponse,
) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}

/// Register a fresh account, log it in, and return the session cookie.
pub async fn register_and_login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
) -> Cookie<'static> {
    let fields = [("email", email), ("password", "pw")];
    let registered = test::call_service(app, form_request("/register", &fields)).await;
    assert_eq!(
        registered.status(),
        StatusCode::SEE_OTHER,
        "registration should redirect to the login form"
    );
    let logged_in = test::call_service(app, form_request("/login", &fields)).await;
    assert_eq!(
        logged_in.status(),
        StatusCode::SEE_OTHER,
        "login should redirect to the dashboard"
    );
    session_cookie_from(&logged_in).expect("session cookie issued on login")
}

/// Every `/case/{id}` link in an HTML body, as ids.
fn case_ids_in(body: &str) -> Vec<i32> {
    let mut ids = Vec::new();
    let mut rest = body;
    while let Some(pos) = rest.find("/case/") {
        rest = &rest[pos + "/case/".len()..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if let Ok(id) = digits.parse() {
            ids.push(id);
        }
    }
    ids
}

/// Create a case through the form and return its detail page location.
///
/// Creation answers with a redirect to the dashboard, so the new case's id
/// is recovered from the dashboard listing (ids ascend, newest is highest).
pub async fn create_case_via_form(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    cookie: &Cookie<'static>,
    title: &str,
    client_name: &str,
    description: &str,
) -> String {
    let res = test::call_service(
        app,
        authed_form_request(
            "/case/new",
            &[
                ("title", title),
                ("client_name", client_name),
                ("description", description),
            ],
            cookie,
        ),
    )
    .await;
    assert_eq!(
        res.status(),
        StatusCode::SEE_OTHER,
        "case creation should redirect"
    );
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .expect("location header"),
        "/dashboard"
    );

    let dashboard = test::call_service(
        app,
        test::TestRequest::get()
            .uri("/dashboard")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body = test::read_body(dashboard).await;
    let body = std::str::from_utf8(&body).expect("UTF-8 body");
    let id = case_ids_in(body)
        .into_iter()
        .max()
        .expect("created case is listed");
    format!("/case/{id}")
}

/// Add a task to the case behind `case_location` through the form.
pub async fn add_task_via_form(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    cookie: &Cookie<'static>,
    case_location: &str,
    description: &str,
    due_date: &str,
) {
    let res = test::call_service(
        app,
        authed_form_request(
            &format!("{case_location}/task/new"),
            &[("description", description), ("due_date", due_date)],
            cookie,
        ),
    )
    .await;
    assert!(
        res.status().is_redirection(),
        "task creation should redirect, got {}",
        res.status()
    );
}
