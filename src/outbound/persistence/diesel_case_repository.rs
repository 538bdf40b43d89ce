//! Diesel-backed case repository.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::ports::{CaseRepository, CaseRepositoryError};
use crate::domain::{Case, CaseDraft, CaseId, UserId};

use super::models::{CaseRow, NewCaseRow};
use super::pool::{DbPool, PoolError};
use super::schema::cases;

impl From<PoolError> for CaseRepositoryError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::Build { .. } | PoolError::Checkout { .. } => {
                CaseRepositoryError::connection(err)
            }
            PoolError::Runtime { .. } => CaseRepositoryError::query(err),
        }
    }
}

/// [`CaseRepository`] adapter over the SQLite store.
#[derive(Clone)]
pub struct DieselCaseRepository {
    pool: DbPool,
}

impl DieselCaseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaseRepository for DieselCaseRepository {
    async fn create(&self, owner: UserId, draft: &CaseDraft) -> Result<Case, CaseRepositoryError> {
        let title = draft.title().to_owned();
        let client_name = draft.client_name().to_owned();
        let description = draft.description().to_owned();
        self.pool
            .run(move |conn| {
                let row = NewCaseRow {
                    title: &title,
                    client_name: &client_name,
                    description: &description,
                    created_at: Utc::now().naive_utc(),
                    owner_id: owner.get(),
                };
                diesel::insert_into(cases::table)
                    .values(&row)
                    .returning(CaseRow::as_returning())
                    .get_result::<CaseRow>(conn)
                    .map(Case::from)
                    .map_err(CaseRepositoryError::query)
            })
            .await
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Case>, CaseRepositoryError> {
        self.pool
            .run(move |conn| {
                cases::table
                    .filter(cases::owner_id.eq(owner.get()))
                    .order((cases::created_at.desc(), cases::id.desc()))
                    .select(CaseRow::as_select())
                    .load::<CaseRow>(conn)
                    .map(|rows| rows.into_iter().map(Case::from).collect())
                    .map_err(CaseRepositoryError::query)
            })
            .await
    }

    async fn find(&self, id: CaseId) -> Result<Option<Case>, CaseRepositoryError> {
        self.pool
            .run(move |conn| {
                cases::table
                    .find(id.get())
                    .select(CaseRow::as_select())
                    .first::<CaseRow>(conn)
                    .optional()
                    .map(|row| row.map(Case::from))
                    .map_err(CaseRepositoryError::query)
            })
            .await
    }
}
