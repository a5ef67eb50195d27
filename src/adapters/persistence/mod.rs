use sqlx::PgPool;

use crate::app_error::AppError;

pub mod waitlist;

/// PostgreSQL SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::Database(db_err) => {
                let is_unique_violation = db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                    || db_err.message().contains("duplicate key");
                if is_unique_violation {
                    AppError::AlreadyOnWaitlist
                } else {
                    // Log the actual error for debugging, but don't expose details
                    tracing::error!(error = ?err, "Database error");
                    AppError::Database("Database operation failed".into())
                }
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
