use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistStatus,
    use_cases::waitlist::{JoinWaitlistInput, WaitlistUseCases},
};

const JOIN_FAILED: &str = "Failed to join waitlist. Please try again.";
const STATUS_FAILED: &str = "Failed to check waitlist status";

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(join_waitlist).get(waitlist_status))
}

#[derive(Serialize)]
struct JoinWaitlistResponse {
    message: &'static str,
    data: JoinedEntry,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinedEntry {
    email: String,
    created_at: DateTime<Utc>,
}

/// POST /api/waitlist
async fn join_waitlist(
    State(use_cases): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<JoinWaitlistInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) =
        payload.map_err(|rejection| AppError::invalid_field("body", &rejection.body_text()))?;

    let entry = use_cases
        .join(input)
        .await
        .map_err(|e| e.with_failure_message(JOIN_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(JoinWaitlistResponse {
            message: "Successfully joined the waitlist!",
            data: JoinedEntry {
                email: entry.email,
                created_at: entry.created_at,
            },
        }),
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    on_waitlist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    joined_at: Option<DateTime<Utc>>,
}

impl From<WaitlistStatus> for StatusResponse {
    fn from(status: WaitlistStatus) -> Self {
        match status {
            WaitlistStatus::NotListed => StatusResponse {
                on_waitlist: false,
                joined_at: None,
            },
            WaitlistStatus::Listed { joined_at } => StatusResponse {
                on_waitlist: true,
                joined_at: Some(joined_at),
            },
        }
    }
}

/// GET /api/waitlist?email=...
async fn waitlist_status(
    State(use_cases): State<Arc<WaitlistUseCases>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) =
        params.map_err(|rejection| AppError::invalid_field("query", &rejection.body_text()))?;
    // A repeated parameter resolves to its first value.
    let email = params
        .into_iter()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or(AppError::MissingEmail)?;

    let status = use_cases
        .status(&email)
        .await
        .map_err(|e| e.with_failure_message(STATUS_FAILED))?;

    Ok(Json(StatusResponse::from(status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::test_utils::{
        FailingWaitlistRepo, InMemoryWaitlistRepo, TestAppStateBuilder, create_test_entry,
        test_datetime,
    };

    fn build_test_router(app_state: AppState) -> Router<()> {
        router().with_state(app_state)
    }

    fn server_with(repo: Arc<InMemoryWaitlistRepo>) -> TestServer {
        let app_state = TestAppStateBuilder::new().with_repo(repo).build();
        TestServer::new(build_test_router(app_state)).unwrap()
    }

    // =========================================================================
    // POST /api/waitlist
    // =========================================================================

    #[tokio::test]
    async fn join_new_email_returns_201_and_stores_entry() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = server_with(repo.clone());

        let response = server
            .post("/")
            .json(&json!({ "email": "Founder@Startup.io", "name": "Ada" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Successfully joined the waitlist!");
        assert_eq!(body["data"]["email"], "founder@startup.io");
        assert!(body["data"]["createdAt"].is_string());
        assert_eq!(repo.emails(), vec!["founder@startup.io".to_string()]);
    }

    #[tokio::test]
    async fn join_same_email_twice_returns_400_without_duplicate() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = server_with(repo.clone());

        server
            .post("/")
            .json(&json!({ "email": "twice@example.com" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/")
            .json(&json!({ "email": "TWICE@example.com" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "This email is already on the waitlist");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn join_malformed_email_returns_400_with_details() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = server_with(repo.clone());

        let response = server
            .post("/")
            .json(&json!({ "email": "not-an-email" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid input");
        assert_eq!(body["details"][0]["field"], "email");
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn join_missing_email_returns_400_with_details() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server.post("/").json(&json!({ "name": "Ada" })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid input");
        assert!(!body["details"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn join_non_json_body_returns_400() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server
            .post("/")
            .content_type("application/json")
            .bytes(Bytes::from_static(b"{not json"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid input");
        assert_eq!(body["details"][0]["field"], "body");
    }

    #[tokio::test]
    async fn join_store_failure_returns_500() {
        let app_state = TestAppStateBuilder::new()
            .with_repo(Arc::new(FailingWaitlistRepo))
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server
            .post("/")
            .json(&json!({ "email": "ok@example.com" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], JOIN_FAILED);
    }

    // =========================================================================
    // GET /api/waitlist?email=...
    // =========================================================================

    #[tokio::test]
    async fn status_unknown_email_is_not_on_waitlist() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server
            .get("/")
            .add_query_param("email", "ghost@example.com")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "onWaitlist": false }));
    }

    #[tokio::test]
    async fn status_registered_email_reports_join_time() {
        let entry = create_test_entry(|e| e.email = "member@example.com".into());
        let server = server_with(Arc::new(InMemoryWaitlistRepo::with_entries(vec![entry])));

        let response = server
            .get("/")
            .add_query_param("email", "Member@Example.com")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "onWaitlist": true,
            "joinedAt": test_datetime(),
        }));
    }

    #[tokio::test]
    async fn status_after_join_matches_created_at() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let joined: Value = server
            .post("/")
            .json(&json!({ "email": "roundtrip@example.com" }))
            .await
            .json();

        let status: Value = server
            .get("/")
            .add_query_param("email", "roundtrip@example.com")
            .await
            .json();

        assert_eq!(status["onWaitlist"], true);
        assert_eq!(status["joinedAt"], joined["data"]["createdAt"]);
    }

    #[tokio::test]
    async fn status_without_email_returns_400() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server.get("/").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Email parameter required");
    }

    #[tokio::test]
    async fn status_with_empty_email_returns_400() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server.get("/").add_query_param("email", "").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_repeated_email_uses_first_value() {
        let entry = create_test_entry(|e| e.email = "first@example.com".into());
        let server = server_with(Arc::new(InMemoryWaitlistRepo::with_entries(vec![entry])));

        let response = server
            .get("/")
            .add_query_param("email", "first@example.com")
            .add_query_param("email", "second@example.com")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "onWaitlist": true,
            "joinedAt": test_datetime(),
        }));
    }

    #[tokio::test]
    async fn status_ignores_unrelated_params() {
        let server = server_with(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server
            .get("/")
            .add_query_param("ref", "newsletter")
            .add_query_param("email", "ghost@example.com")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "onWaitlist": false }));
    }

    #[tokio::test]
    async fn status_store_failure_returns_500() {
        let app_state = TestAppStateBuilder::new()
            .with_repo(Arc::new(FailingWaitlistRepo))
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server
            .get("/")
            .add_query_param("email", "a@b.co")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], STATUS_FAILED);
    }
}
