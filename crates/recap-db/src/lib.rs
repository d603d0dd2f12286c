//! # recap-db
//!
//! PostgreSQL database layer for recap.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for notes, schedule entries, and
//!   summary records
//! - Schema migrations (feature `migrations`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use recap_db::Database;
//! use recap_core::{NewNote, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/recap").await?;
//!
//!     let note = db.notes.insert(NewNote {
//!         title: "Meeting".to_string(),
//!         content: "Discussed the Q3 roadmap.".to_string(),
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod schedules;
pub mod summaries;

// Re-export core types
pub use recap_core::*;

pub use notes::PgNoteRepository;
pub use pool::create_pool;
pub use schedules::PgScheduleRepository;
pub use summaries::PgSummaryRepository;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
    /// Schedule entry repository.
    pub schedules: PgScheduleRepository,
    /// Summary record repository.
    pub summaries: PgSummaryRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            schedules: PgScheduleRepository::new(pool.clone()),
            summaries: PgSummaryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    /// Lightweight connectivity probe (`SELECT 1`).
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
