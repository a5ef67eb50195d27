use crate::app_error::{AppError, ErrorCode, FieldError};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let code = ErrorCode::from(&self);
        match self {
            AppError::Validation(details) => {
                error_resp(StatusCode::BAD_REQUEST, code, "Invalid input", Some(details))
            }
            AppError::MissingEmail => {
                error_resp(StatusCode::BAD_REQUEST, code, "Email parameter required", None)
            }
            AppError::AlreadyOnWaitlist => error_resp(
                StatusCode::BAD_REQUEST,
                code,
                "This email is already on the waitlist",
                None,
            ),
            AppError::NotFound => error_resp(StatusCode::NOT_FOUND, code, "Not found", None),
            AppError::Database(_) | AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, "Internal error", None)
            }
            AppError::Failed { message, .. } => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, message, None)
            }
        }
    }
}

fn error_resp(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
    details: Option<Vec<FieldError>>,
) -> Response {
    let body = match details {
        Some(details) => {
            serde_json::json!({ "error": message, "code": code.as_str(), "details": details })
        }
        None => serde_json::json!({ "error": message, "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
