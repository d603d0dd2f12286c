//! Schedule entry repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use recap_core::{new_v7, Error, NewSchedule, Result, ScheduleEntry, ScheduleRepository};

/// PostgreSQL implementation of ScheduleRepository.
pub struct PgScheduleRepository {
    pool: Pool<Postgres>,
}

impl PgScheduleRepository {
    /// Create a new PgScheduleRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, title, description, scheduled_time, notification_type, is_completed, created_at_utc";

fn map_row(row: PgRow) -> ScheduleEntry {
    ScheduleEntry {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        scheduled_time: row.get("scheduled_time"),
        notification_type: row.get("notification_type"),
        is_completed: row.get("is_completed"),
        created_at_utc: row.get("created_at_utc"),
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    async fn insert(&self, req: NewSchedule) -> Result<ScheduleEntry> {
        if req.title.trim().is_empty() {
            return Err(Error::InvalidInput("Schedule title cannot be empty".into()));
        }

        let id = new_v7();
        let row = sqlx::query(&format!(
            "INSERT INTO schedule_entry (id, title, description, scheduled_time, notification_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.scheduled_time)
        .bind(&req.notification_type)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            db_table = "schedule_entry",
            schedule_id = %id,
            scheduled_time = %req.scheduled_time,
            "Inserted schedule entry"
        );
        Ok(map_row(row))
    }

    async fn list(&self) -> Result<Vec<ScheduleEntry>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM schedule_entry ORDER BY scheduled_time ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row).collect())
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<ScheduleEntry>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM schedule_entry
             WHERE scheduled_time >= $1
             ORDER BY scheduled_time ASC"
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row).collect())
    }

    async fn mark_complete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("UPDATE schedule_entry SET is_completed = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::ScheduleNotFound(id));
        }
        Ok(())
    }
}
