//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use recap_core::{new_v7, Error, NewNote, Note, NoteRepository, Result};

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at_utc: row.get("created_at_utc"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: NewNote) -> Result<Note> {
        if req.title.trim().is_empty() {
            return Err(Error::InvalidInput("Note title cannot be empty".into()));
        }
        if req.content.trim().is_empty() {
            return Err(Error::InvalidInput("Note content cannot be empty".into()));
        }

        let id = new_v7();
        let row = sqlx::query(
            "INSERT INTO note (id, title, content)
             VALUES ($1, $2, $3)
             RETURNING id, title, content, created_at_utc",
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.content)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            db_table = "note",
            note_id = %id,
            "Inserted note"
        );
        Ok(map_row(row))
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let row = sqlx::query(
            "SELECT id, title, content, created_at_utc FROM note WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(map_row).ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, content, created_at_utc FROM note
             ORDER BY created_at_utc DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }
}
