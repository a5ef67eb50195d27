//! In-memory mock implementations of `WaitlistRepo`.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo that enforces email uniqueness on insert.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    entries: Mutex<Vec<WaitlistEntry>>,
    /// Stored rows that lookups do not see yet, simulating a concurrent insert.
    hidden: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            hidden: Mutex::default(),
        }
    }

    pub fn with_hidden_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::default(),
            hidden: Mutex::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len() + self.hidden.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn emails(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.email.clone())
            .collect()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let taken = |rows: &[WaitlistEntry]| rows.iter().any(|e| e.email == entry.email);
        if taken(self.hidden.lock().unwrap().as_slice()) {
            return Err(AppError::AlreadyOnWaitlist);
        }

        let mut entries = self.entries.lock().unwrap();
        if taken(entries.as_slice()) {
            return Err(AppError::AlreadyOnWaitlist);
        }

        let stored = WaitlistEntry {
            id: Uuid::new_v4(),
            email: entry.email.clone(),
            name: entry.name.clone(),
            company: entry.company.clone(),
            created_at: Utc::now(),
        };
        entries.push(stored.clone());
        Ok(stored)
    }
}

// ============================================================================
// FailingWaitlistRepo
// ============================================================================

/// Repo whose every call fails like an unreachable database.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("connection refused".into()))
    }
}
