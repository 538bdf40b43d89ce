//! Server-rendered HTML pages.
//!
//! The UI is deliberately plain: one shared shell, form pages that re-render
//! with the visitor's input on validation failure, and entity pages built
//! from domain types. All interpolated user content passes through
//! [`escape`].

use actix_web::http::StatusCode;

use crate::domain::{Case, Task};

/// Escape text for safe interpolation into HTML bodies and attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn nav(authenticated: bool) -> &'static str {
    if authenticated {
        concat!(
            r#"<nav><a href="/dashboard">Dashboard</a> | <a href="/case/new">New case</a> | "#,
            r#"<a href="/logout">Log out</a></nav>"#
        )
    } else {
        r#"<nav><a href="/login">Log in</a> | <a href="/register">Register</a></nav>"#
    }
}

fn page(title: &str, authenticated: bool, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><title>{title} - Docket</title></head>"#,
            "<body><header><h1>Docket</h1>{nav}</header><main>{body}</main></body></html>"
        ),
        title = escape(title),
        nav = nav(authenticated),
        body = body,
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    }
}

pub fn home_page() -> String {
    let body = r#"<p>Practice management for small firms. <a href="/register">Register</a> or <a href="/login">log in</a> to begin.</p>"#;
    page("Home", false, body)
}

pub fn register_page(error: Option<&str>, email: &str) -> String {
    let body = format!(
        concat!(
            "<h2>Register</h2>{banner}",
            r#"<form method="post" action="/register">"#,
            r#"<label>Email <input type="email" name="email" value="{email}"></label>"#,
            r#"<label>Password <input type="password" name="password"></label>"#,
            r#"<button type="submit">Register</button></form>"#,
            r#"<p>Already registered? <a href="/login">Log in</a>.</p>"#
        ),
        banner = error_banner(error),
        email = escape(email),
    );
    page("Register", false, &body)
}

pub fn login_page(error: Option<&str>, email: &str) -> String {
    let body = format!(
        concat!(
            "<h2>Log in</h2>{banner}",
            r#"<form method="post" action="/login">"#,
            r#"<label>Email <input type="email" name="email" value="{email}"></label>"#,
            r#"<label>Password <input type="password" name="password"></label>"#,
            r#"<button type="submit">Log in</button></form>"#,
            r#"<p>New here? <a href="/register">Register</a>.</p>"#
        ),
        banner = error_banner(error),
        email = escape(email),
    );
    page("Log in", false, &body)
}

pub fn dashboard_page(cases: &[Case]) -> String {
    let listing = if cases.is_empty() {
        r#"<p>No cases yet. <a href="/case/new">Open your first case</a>.</p>"#.to_owned()
    } else {
        let items: String = cases
            .iter()
            .map(|case| {
                format!(
                    r#"<li><a href="/case/{id}">{title}</a> &mdash; {client}</li>"#,
                    id = case.id(),
                    title = escape(case.title()),
                    client = escape(case.client_name()),
                )
            })
            .collect();
        format!("<ul>{items}</ul>")
    };
    let body = format!("<h2>Your cases</h2>{listing}");
    page("Dashboard", true, &body)
}

pub fn new_case_page(
    error: Option<&str>,
    title: &str,
    client_name: &str,
    description: &str,
) -> String {
    let body = format!(
        concat!(
            "<h2>New case</h2>{banner}",
            r#"<form method="post" action="/case/new">"#,
            r#"<label>Title <input type="text" name="title" value="{title}"></label>"#,
            r#"<label>Client <input type="text" name="client_name" value="{client}"></label>"#,
            r#"<label>Description <textarea name="description">{description}</textarea></label>"#,
            r#"<button type="submit">Create case</button></form>"#
        ),
        banner = error_banner(error),
        title = escape(title),
        client = escape(client_name),
        description = escape(description),
    );
    page("New case", true, &body)
}

fn task_item(task: &Task) -> String {
    let status = if task.completed() { "done" } else { "open" };
    format!(
        concat!(
            r#"<li class="{status}">{description} (due {due}) "#,
            r#"<a href="/task/{id}/complete">{action}</a></li>"#
        ),
        status = status,
        description = escape(task.description()),
        due = task.due_date(),
        id = task.id(),
        action = if task.completed() { "Reopen" } else { "Complete" },
    )
}

pub fn case_page(case: &Case, tasks: &[Task]) -> String {
    let task_listing = if tasks.is_empty() {
        "<p>No tasks yet.</p>".to_owned()
    } else {
        let items: String = tasks.iter().map(task_item).collect();
        format!("<ul>{items}</ul>")
    };
    let body = format!(
        concat!(
            "<h2>{title}</h2>",
            "<p>Client: {client}</p>",
            "<p>Opened: {opened}</p>",
            "<p>{description}</p>",
            r#"<p><a href="/summarise/{id}">Summarise</a></p>"#,
            "<h3>Tasks</h3>{tasks}",
            r#"<p><a href="/case/{id}/task/new">Add a task</a></p>"#
        ),
        title = escape(case.title()),
        client = escape(case.client_name()),
        opened = case.created_at().format("%Y-%m-%d %H:%M"),
        description = escape(case.description()),
        id = case.id(),
        tasks = task_listing,
    );
    page(case.title(), true, &body)
}

pub fn new_task_page(case: &Case, error: Option<&str>, description: &str, due_date: &str) -> String {
    let body = format!(
        concat!(
            "<h2>New task for {title}</h2>{banner}",
            r#"<form method="post" action="/case/{id}/task/new">"#,
            r#"<label>Description <input type="text" name="description" value="{description}"></label>"#,
            r#"<label>Due <input type="date" name="due_date" value="{due}"></label>"#,
            r#"<button type="submit">Add task</button></form>"#,
            r#"<p><a href="/case/{id}">Back to case</a></p>"#
        ),
        title = escape(case.title()),
        banner = error_banner(error),
        id = case.id(),
        description = escape(description),
        due = escape(due_date),
    );
    page("New task", true, &body)
}

pub fn summary_page(case: &Case, summary: &str) -> String {
    let body = format!(
        concat!(
            "<h2>Summary: {title}</h2>",
            "<blockquote>{summary}</blockquote>",
            r#"<p><a href="/case/{id}">Back to case</a></p>"#
        ),
        title = escape(case.title()),
        summary = escape(summary),
        id = case.id(),
    );
    page("Summary", true, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h2>{status} {title}</h2><p>{message}</p>",
        status = status.as_u16(),
        title = escape(title),
        message = escape(message),
    );
    page(title, false, &body)
}
