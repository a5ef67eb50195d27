use axum::{Router, response::Html, routing::get};

use crate::adapters::http::{app_state::AppState, views::page};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing_page))
}

/// GET /
async fn landing_page() -> Html<String> {
    Html(page::render().into_string())
}
