//! Diesel-backed task repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{CaseId, Task, TaskDraft, TaskId};

use super::models::{NewTaskRow, TaskRow};
use super::pool::{DbPool, PoolError};
use super::schema::tasks;

impl From<PoolError> for TaskRepositoryError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::Build { .. } | PoolError::Checkout { .. } => {
                TaskRepositoryError::connection(err)
            }
            PoolError::Runtime { .. } => TaskRepositoryError::query(err),
        }
    }
}

/// [`TaskRepository`] adapter over the SQLite store.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn add(&self, case: CaseId, draft: &TaskDraft) -> Result<Task, TaskRepositoryError> {
        let description = draft.description().to_owned();
        let due_date = draft.due_date();
        self.pool
            .run(move |conn| {
                let row = NewTaskRow {
                    description: &description,
                    due_date,
                    completed: false,
                    case_id: case.get(),
                };
                diesel::insert_into(tasks::table)
                    .values(&row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(conn)
                    .map(Task::from)
                    .map_err(TaskRepositoryError::query)
            })
            .await
    }

    async fn list_for_case(&self, case: CaseId) -> Result<Vec<Task>, TaskRepositoryError> {
        self.pool
            .run(move |conn| {
                tasks::table
                    .filter(tasks::case_id.eq(case.get()))
                    .order((tasks::due_date.asc(), tasks::id.asc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(conn)
                    .map(|rows| rows.into_iter().map(Task::from).collect())
                    .map_err(TaskRepositoryError::query)
            })
            .await
    }

    async fn find(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        self.pool
            .run(move |conn| {
                tasks::table
                    .find(id.get())
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(conn)
                    .optional()
                    .map(|row| row.map(Task::from))
                    .map_err(TaskRepositoryError::query)
            })
            .await
    }

    async fn toggle_completed(&self, id: TaskId) -> Result<bool, TaskRepositoryError> {
        self.pool
            .run(move |conn| {
                // An immediate transaction takes the write lock up front so
                // concurrent toggles of the same task serialise.
                conn.immediate_transaction::<bool, DieselError, _>(|conn| {
                    let completed: bool = tasks::table
                        .find(id.get())
                        .select(tasks::completed)
                        .first(conn)?;
                    let next = !completed;
                    diesel::update(tasks::table.find(id.get()))
                        .set(tasks::completed.eq(next))
                        .execute(conn)?;
                    Ok(next)
                })
                .map_err(TaskRepositoryError::query)
            })
            .await
    }
}
