use serde::Serialize;
use thiserror::Error;

/// One rejected field of a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input")]
    Validation(Vec<FieldError>),

    #[error("Email parameter required")]
    MissingEmail,

    #[error("This email is already on the waitlist")]
    AlreadyOnWaitlist,

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// An unclassified failure, carrying the client-safe message of the endpoint it surfaced from.
    #[error("{message} ({detail})")]
    Failed {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn invalid_field(field: &str, message: &str) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }

    /// Replaces the message of an unclassified failure. Classified errors pass through unchanged.
    pub fn with_failure_message(self, message: &'static str) -> Self {
        match self {
            AppError::Database(detail) | AppError::Internal(detail) => {
                AppError::Failed { message, detail }
            }
            other => other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInput,
    MissingEmail,
    AlreadyOnWaitlist,
    NotFound,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::MissingEmail => "MISSING_EMAIL",
            ErrorCode::AlreadyOnWaitlist => "ALREADY_ON_WAITLIST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl From<&AppError> for ErrorCode {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Validation(_) => ErrorCode::InvalidInput,
            AppError::MissingEmail => ErrorCode::MissingEmail,
            AppError::AlreadyOnWaitlist => ErrorCode::AlreadyOnWaitlist,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) | AppError::Failed { .. } => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
