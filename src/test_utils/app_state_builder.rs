//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` backed by in-memory mocks.

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

/// Config that never touches a real database or log file.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: SecretString::new("postgres://unused@localhost/test".into()),
        database_max_connections: 1,
        bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        log_file: None,
        run_migrations: false,
    }
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::with_entries(vec![create_test_entry(|_| {})]));
/// let app_state = TestAppStateBuilder::new().with_repo(repo.clone()).build();
/// ```
pub struct TestAppStateBuilder {
    repo: Arc<dyn WaitlistRepo>,
    config: AppConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
            config: test_config(),
        }
    }

    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = repo;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(self.config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo)),
        }
    }
}
