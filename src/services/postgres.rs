use crate::models::{Competitor, JudgeParticipation, JudgeProfile, MatchRecord};
use chrono::{Datelike, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from the club database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read-only client over the club management database.
///
/// The pairing core never writes: proposals are handed back to the
/// caller, which persists the ones a coach confirms through the main
/// application. Everything here is a plain snapshot query.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Competitors registered for an event, registration status
    /// "registered" only.
    pub async fn list_registered_competitors(
        &self,
        event_id: &str,
    ) -> Result<Vec<Competitor>, StoreError> {
        let query = r#"
            SELECT c.competitor_id, c.name, c.weight_kg, c.belt, c.date_of_birth, c.is_active
            FROM competitors c
            JOIN registrations r ON r.competitor_id = c.competitor_id
            WHERE r.event_id = $1 AND r.status = 'registered'
            ORDER BY c.competitor_id
        "#;

        let rows = sqlx::query(query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;

        let roster: Vec<Competitor> = rows.iter().map(competitor_from_row).collect();

        tracing::debug!("Event {} has {} registered competitors", event_id, roster.len());

        Ok(roster)
    }

    /// Every active club member with an active linked account, for the
    /// global matching pool. Independent of any event.
    pub async fn list_active_members(&self) -> Result<Vec<Competitor>, StoreError> {
        let query = r#"
            SELECT competitor_id, name, weight_kg, belt, date_of_birth, is_active
            FROM competitors
            WHERE is_active AND account_active
            ORDER BY competitor_id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(competitor_from_row).collect())
    }

    /// Full match history of an event, all statuses.
    pub async fn list_event_matches(
        &self,
        event_id: &str,
    ) -> Result<Vec<MatchRecord>, StoreError> {
        let query = r#"
            SELECT match_id, event_id, competitor_a, competitor_b, status
            FROM matches
            WHERE event_id = $1
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;

        let history: Vec<MatchRecord> = rows
            .iter()
            .map(|row| MatchRecord {
                match_id: row.get("match_id"),
                event_id: row.get("event_id"),
                competitor_a: row.get("competitor_a"),
                competitor_b: row.get("competitor_b"),
                status: row.get("status"),
            })
            .collect();

        tracing::debug!("Event {} has {} matches on record", event_id, history.len());

        Ok(history)
    }

    /// Resolve a judge profile and its optional competitor link.
    pub async fn resolve_judge(&self, judge_id: &str) -> Result<JudgeProfile, StoreError> {
        let query = r#"
            SELECT judge_id, name, competitor_id
            FROM judges
            WHERE judge_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(judge_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("judge {}", judge_id)))?;

        Ok(JudgeProfile {
            judge_id: row.get("judge_id"),
            name: row.get("name"),
            competitor_id: row.get("competitor_id"),
        })
    }

    /// Competitor-side involvement of a judge's linked competitor in an
    /// event: registration plus non-cancelled match participation.
    pub async fn judge_participation(
        &self,
        competitor_id: &str,
        event_id: &str,
    ) -> Result<JudgeParticipation, StoreError> {
        let query = r#"
            SELECT
                EXISTS (
                    SELECT 1 FROM registrations
                    WHERE competitor_id = $1 AND event_id = $2 AND status = 'registered'
                ) AS registered,
                (
                    SELECT COUNT(*) FROM matches
                    WHERE event_id = $2
                      AND status <> 'cancelled'
                      AND (competitor_a = $1 OR competitor_b = $1)
                ) AS non_cancelled_matches
        "#;

        let row = sqlx::query(query)
            .bind(competitor_id)
            .bind(event_id)
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.get("non_cancelled_matches");

        Ok(JudgeParticipation {
            registered: row.get("registered"),
            non_cancelled_matches: count.max(0) as u32,
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn competitor_from_row(row: &sqlx::postgres::PgRow) -> Competitor {
    let date_of_birth: Option<NaiveDate> = row.get("date_of_birth");

    Competitor {
        competitor_id: row.get("competitor_id"),
        name: row.get("name"),
        weight_kg: row.get("weight_kg"),
        belt: row.get("belt"),
        age: age_from_date_of_birth(date_of_birth),
        is_active: row.get("is_active"),
    }
}

/// Whole years between the date of birth and today. A missing date of
/// birth yields an unknown age, which the eligibility check tolerates.
fn age_from_date_of_birth(date_of_birth: Option<NaiveDate>) -> Option<u32> {
    let born = date_of_birth?;
    let today = Utc::now().date_naive();

    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }

    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_from_date_of_birth() {
        let today = Utc::now().date_naive();

        let twenty_years_ago = NaiveDate::from_ymd_opt(today.year() - 20, 1, 1);
        assert_eq!(age_from_date_of_birth(twenty_years_ago), Some(20));

        assert_eq!(age_from_date_of_birth(None), None);
    }

    #[test]
    fn test_age_respects_upcoming_birthday() {
        let today = Utc::now().date_naive();

        // Born 25 years ago, one day after today's date: birthday has
        // not happened yet this year.
        if let Some(born) = today
            .with_year(today.year() - 25)
            .and_then(|d| d.succ_opt())
        {
            if born.year() == today.year() - 25 {
                assert_eq!(age_from_date_of_birth(Some(born)), Some(24));
            }
        }
    }
}
