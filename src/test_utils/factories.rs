//! Test data factories for creating valid test fixtures.
//!
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::waitlist_entry::WaitlistEntry;

/// Create a stored waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_string(),
        name: Some("Jane".to_string()),
        company: None,
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp so assertions on serialised dates stay deterministic.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
        .single()
        .expect("valid test datetime")
}
