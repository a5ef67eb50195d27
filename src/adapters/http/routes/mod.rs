pub mod landing;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

/// API routes, nested under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().nest("/waitlist", waitlist::router())
}
