//! Row types bridging Diesel and the domain.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::{Case, CaseId, Task, TaskId, UserId};

use super::schema::{cases, tasks, users};

/// Credential columns read back during authentication.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub email: String,
    pub password_salt: String,
    pub password_digest: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_salt: String,
    pub password_digest: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = cases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CaseRow {
    pub id: i32,
    pub title: String,
    pub client_name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub owner_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cases)]
pub struct NewCaseRow<'a> {
    pub title: &'a str,
    pub client_name: &'a str,
    pub description: &'a str,
    pub created_at: NaiveDateTime,
    pub owner_id: i32,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    pub id: i32,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub case_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow<'a> {
    pub description: &'a str,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub case_id: i32,
}

impl From<CaseRow> for Case {
    fn from(row: CaseRow) -> Self {
        Case::new(
            CaseId::new(row.id),
            UserId::new(row.owner_id),
            row.title,
            row.client_name,
            row.description,
            row.created_at,
        )
    }
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task::new(
            TaskId::new(row.id),
            CaseId::new(row.case_id),
            row.description,
            row.due_date,
            row.completed,
        )
    }
}
