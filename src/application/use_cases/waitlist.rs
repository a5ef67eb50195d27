use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;
use validator::{Validate, ValidationErrors};

use crate::{
    app_error::{AppError, AppResult, FieldError},
    application::validators::{normalize_email, normalize_optional},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry, WaitlistStatus},
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    /// Must fail with `AppError::AlreadyOnWaitlist` when the email is already stored.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
}

/// Signup payload accepted by the waitlist endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct JoinWaitlistInput {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<String>,
}

impl JoinWaitlistInput {
    /// Normalises the payload, then checks it. Returns every rejected field on failure.
    pub fn validated(self) -> Result<NewWaitlistEntry, Vec<FieldError>> {
        let normalized = JoinWaitlistInput {
            email: normalize_email(&self.email),
            name: normalize_optional(self.name),
            company: normalize_optional(self.company),
        };
        normalized.validate().map_err(field_errors)?;
        Ok(NewWaitlistEntry {
            email: normalized.email,
            name: normalized.name,
            company: normalized.company,
        })
    }
}

fn field_errors(errors: ValidationErrors) -> Vec<FieldError> {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldError::new(field.to_string(), message)
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input))]
    pub async fn join(&self, input: JoinWaitlistInput) -> AppResult<WaitlistEntry> {
        let entry = input.validated().map_err(AppError::Validation)?;

        if self.repo.find_by_email(&entry.email).await?.is_some() {
            return Err(AppError::AlreadyOnWaitlist);
        }

        let stored = self.repo.insert(&entry).await?;
        tracing::info!(entry_id = %stored.id, "Waitlist signup stored");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn status(&self, email: &str) -> AppResult<WaitlistStatus> {
        if email.trim().is_empty() {
            return Err(AppError::MissingEmail);
        }
        let entry = self.repo.find_by_email(&normalize_email(email)).await?;
        Ok(WaitlistStatus::from(entry))
    }
}
