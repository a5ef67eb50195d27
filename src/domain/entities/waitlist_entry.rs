use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored waitlist signup. Unique by `email`, which is always normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated signup data, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
}

/// Result of a waitlist status lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistStatus {
    NotListed,
    Listed { joined_at: DateTime<Utc> },
}

impl From<Option<WaitlistEntry>> for WaitlistStatus {
    fn from(entry: Option<WaitlistEntry>) -> Self {
        match entry {
            Some(entry) => WaitlistStatus::Listed {
                joined_at: entry.created_at,
            },
            None => WaitlistStatus::NotListed,
        }
    }
}
