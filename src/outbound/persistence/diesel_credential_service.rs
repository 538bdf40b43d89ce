//! Diesel-backed credential service.
//!
//! Registration leans on the `users.email` unique index rather than a
//! read-before-write, so two concurrent registrations of the same address
//! cannot both succeed. Authentication performs exactly one digest
//! comparison whether or not the email exists.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::ports::CredentialService;
use crate::domain::{Credentials, Error, PasswordVerifier, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Infrastructure failure inside a database closure; mapped to a domain
/// error once back on the async side so trace capture works.
#[derive(Debug, thiserror::Error)]
pub(super) enum StoreError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Diesel(#[from] DieselError),
}

pub(super) fn map_store_error(err: StoreError) -> Error {
    match err {
        StoreError::Pool(PoolError::Build { .. } | PoolError::Checkout { .. }) => {
            tracing::error!(error = %err, "database unavailable");
            Error::service_unavailable("database unavailable")
        }
        StoreError::Pool(PoolError::Runtime { .. }) | StoreError::Diesel(_) => {
            tracing::error!(error = %err, "database operation failed");
            Error::internal("database operation failed")
        }
    }
}

enum RegisterOutcome {
    Created(i32),
    DuplicateEmail,
}

/// [`CredentialService`] adapter over the SQLite store.
#[derive(Clone)]
pub struct DieselCredentialService {
    pool: DbPool,
}

impl DieselCredentialService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialService for DieselCredentialService {
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let verifier = PasswordVerifier::derive(credentials.password());
        let email = credentials.email().to_owned();

        let outcome = self
            .pool
            .run(move |conn| {
                let row = NewUserRow {
                    email: &email,
                    password_salt: verifier.salt_hex(),
                    password_digest: verifier.digest_hex(),
                    created_at: Utc::now().naive_utc(),
                };
                match diesel::insert_into(users::table)
                    .values(&row)
                    .returning(users::id)
                    .get_result::<i32>(conn)
                {
                    Ok(id) => Ok(RegisterOutcome::Created(id)),
                    Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                        Ok(RegisterOutcome::DuplicateEmail)
                    }
                    Err(err) => Err(StoreError::from(err)),
                }
            })
            .await
            .map_err(map_store_error)?;

        match outcome {
            RegisterOutcome::Created(id) => Ok(UserId::new(id)),
            RegisterOutcome::DuplicateEmail => {
                Err(Error::duplicate_email("email already registered"))
            }
        }
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let email = credentials.email().to_owned();
        let stored = self
            .pool
            .run(move |conn| {
                users::table
                    .filter(users::email.eq(&email))
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(StoreError::from)
            })
            .await
            .map_err(map_store_error)?;

        let Some(row) = stored else {
            // Burn a comparison so unknown emails take as long as bad
            // passwords.
            PasswordVerifier::dummy().verify(credentials.password());
            return Err(Error::unauthorized("invalid email or password"));
        };

        let verifier = PasswordVerifier::from_hex(&row.password_salt, &row.password_digest)
            .map_err(|err| {
                tracing::error!(
                    user = row.id,
                    email = %row.email,
                    error = %err,
                    "stored credentials are undecodable"
                );
                Error::internal("stored credentials are corrupt")
            })?;
        if verifier.verify(credentials.password()) {
            Ok(UserId::new(row.id))
        } else {
            Err(Error::unauthorized("invalid email or password"))
        }
    }
}
