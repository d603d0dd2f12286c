//! Database connection pool setup.

use std::time::{Duration, Instant};

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use recap_core::{Error, Result};

/// Default maximum number of connections in the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Timeout for acquiring a connection from the pool, in seconds.
pub const ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Idle connections are reaped after this many seconds.
pub const IDLE_TIMEOUT_SECS: u64 = 600;

/// Resolve the pool size from an optional `RECAP_DB_MAX_CONNECTIONS`
/// value. Unset, empty, or unparseable values fall back to the default;
/// zero is rejected since a zero-sized pool can never serve a request.
fn max_connections_from(value: Option<String>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Create the PostgreSQL connection pool.
///
/// `RECAP_DB_MAX_CONNECTIONS` overrides the pool size; the timeouts are
/// fixed because this backend runs a single pool per process.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let max_connections = max_connections_from(std::env::var("RECAP_DB_MAX_CONNECTIONS").ok());
    let start = Instant::now();

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .idle_timeout(Duration::from_secs(IDLE_TIMEOUT_SECS))
        .connect(database_url)
        .await
        .map_err(Error::Database)?;

    info!(
        subsystem = "db",
        component = "pool",
        op = "create",
        max_connections,
        pool_size = pool.size(),
        pool_idle = pool.num_idle(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Database connection pool established"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_connections_default_when_unset() {
        assert_eq!(max_connections_from(None), DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_max_connections_parses_override() {
        assert_eq!(max_connections_from(Some("25".to_string())), 25);
        assert_eq!(max_connections_from(Some(" 4 ".to_string())), 4);
    }

    #[test]
    fn test_max_connections_rejects_garbage_and_zero() {
        assert_eq!(
            max_connections_from(Some("lots".to_string())),
            DEFAULT_MAX_CONNECTIONS
        );
        assert_eq!(
            max_connections_from(Some(String::new())),
            DEFAULT_MAX_CONNECTIONS
        );
        assert_eq!(
            max_connections_from(Some("0".to_string())),
            DEFAULT_MAX_CONNECTIONS
        );
    }
}
