use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistDb {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<WaitlistDb> for WaitlistEntry {
    fn from(row: WaitlistDb) -> Self {
        WaitlistEntry {
            id: row.id,
            email: row.email,
            name: row.name,
            company: row.company,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let rec = sqlx::query_as::<_, WaitlistDb>(
            "SELECT id, email, name, company, created_at FROM waitlist WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rec.map(WaitlistEntry::from))
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistDb>(
            r#"
                INSERT INTO waitlist (id, email, name, company)
                VALUES ($1, $2, $3, $4)
                RETURNING id, email, name, company, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.email)
        .bind(&entry.name)
        .bind(&entry.company)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rec.into())
    }
}
