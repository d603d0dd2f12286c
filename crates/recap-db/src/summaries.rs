//! Summary record repository implementation.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

use recap_core::{
    new_v7, Error, GenerationMethod, NewSummary, Result, SourceKind, SummaryOutcome,
    SummaryRecord, SummaryRepository,
};

/// PostgreSQL implementation of SummaryRepository.
pub struct PgSummaryRepository {
    pool: Pool<Postgres>,
}

impl PgSummaryRepository {
    /// Create a new PgSummaryRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, filename, source_kind, source_text, summary, generation_method, \
                       text_length, created_at_utc, updated_at_utc";

fn map_row(row: PgRow) -> Result<SummaryRecord> {
    let kind_str: String = row.get("source_kind");
    let method_str: String = row.get("generation_method");
    Ok(SummaryRecord {
        id: row.get("id"),
        filename: row.get("filename"),
        source_kind: SourceKind::from_str(&kind_str)?,
        source_text: row.get("source_text"),
        summary: row.get("summary"),
        generation_method: GenerationMethod::from_str(&method_str)?,
        text_length: row.get("text_length"),
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    })
}

#[async_trait]
impl SummaryRepository for PgSummaryRepository {
    async fn insert(&self, req: NewSummary) -> Result<SummaryRecord> {
        let id = new_v7();
        let text_length = req.source_text.chars().count() as i64;

        let row = sqlx::query(&format!(
            "INSERT INTO summary_record
                 (id, filename, source_kind, source_text, summary, generation_method, text_length)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&req.filename)
        .bind(req.source_kind.as_str())
        .bind(&req.source_text)
        .bind(&req.outcome.summary)
        .bind(req.outcome.method.as_str())
        .bind(text_length)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            db_table = "summary_record",
            summary_id = %id,
            generation_method = req.outcome.method.as_str(),
            "Inserted summary record"
        );
        map_row(row)
    }

    async fn fetch(&self, id: Uuid) -> Result<SummaryRecord> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM summary_record WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(map_row).transpose()?.ok_or(Error::SummaryNotFound(id))
    }

    async fn list(&self) -> Result<Vec<SummaryRecord>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM summary_record ORDER BY created_at_utc DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        rows.into_iter().map(map_row).collect()
    }

    async fn update_summary(&self, id: Uuid, outcome: &SummaryOutcome) -> Result<SummaryRecord> {
        // Only the regenerated fields move; id, filename, and source
        // columns keep their original values.
        let row = sqlx::query(&format!(
            "UPDATE summary_record
             SET summary = $2, generation_method = $3, updated_at_utc = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&outcome.summary)
        .bind(outcome.method.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            db_table = "summary_record",
            summary_id = %id,
            generation_method = outcome.method.as_str(),
            op = "refresh",
            "Updated summary record"
        );
        row.map(map_row).transpose()?.ok_or(Error::SummaryNotFound(id))
    }
}
