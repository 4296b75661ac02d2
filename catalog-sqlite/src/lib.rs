#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use tokio::try_join;
use tracing::{Level, event};

pub mod config;
mod r#impl;
pub mod types;

use config::SqliteConfig;

/// SQLite database implementation of the catalog repositories.
///
/// This struct provides separate reader and writer connection pools to a SQLite database,
/// implementing the repository traits defined in `catalog-core`.
///
/// # Connection Management
///
/// - `reader`: A connection pool for read operations, allowing concurrent reads
/// - `writer`: A single-connection pool for write operations, ensuring serialized writes
///
/// # Example
///
/// ```no_run
/// # use catalog_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SqliteConfig::default();
/// let db = Db::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing` is true)
    /// and applies all pending migrations.
    ///
    /// # Database Configuration
    ///
    /// - WAL mode for better concurrency
    /// - Foreign keys enabled for referential integrity
    /// - A busy timeout so the reader pool waits out the writer instead of failing
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection fails or a migration fails to apply.
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        // Both pools must be built from the same options: for `:memory:`, sqlx
        // generates a shared-cache name once and the clone reuses it.
        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .pragma("journal_size_limit", "27103364")
                .pragma("mmap_size", "134217728")
                .pragma("temp_store", "memory")
                .create_if_missing(config.create_if_missing);

        let reader =
            Self::pool_options(config, config.max_readers).connect_with(options.clone());
        let writer = Self::pool_options(config, Some(1)).connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        sqlx::migrate!("./schema").run(&writer).await?;

        event!(
            Level::INFO,
            database = db_path.as_deref().unwrap_or(":memory:"),
            "opened product database"
        );

        Ok(Self { reader, writer })
    }

    /// Pool settings shared by the reader and the writer.
    ///
    /// An in-memory database disappears with its last connection, so those
    /// pools hold on to theirs instead of reaping idle or aged ones.
    fn pool_options(
        config: &SqliteConfig,
        max_connections: Option<u32>,
    ) -> sqlite::SqlitePoolOptions {
        let mut pool = sqlite::SqlitePoolOptions::new();
        if let Some(n) = max_connections {
            pool = pool.max_connections(n);
        }

        if config.database_path.is_none() {
            pool.min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else if let Some(timeout) = config.idle_timeout {
            pool.idle_timeout(timeout)
        } else {
            pool
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn in_memory_pools_keep_their_connections() {
        let config = SqliteConfig {
            idle_timeout: Some(Duration::from_secs(1)),
            ..Default::default()
        };
        let pool = Db::pool_options(&config, Some(1));
        assert_eq!(pool.get_idle_timeout(), None);
        assert_eq!(pool.get_max_lifetime(), None);
        assert_eq!(pool.get_min_connections(), 1);
        assert_eq!(pool.get_max_connections(), 1);
    }

    #[test]
    fn file_pools_use_the_configured_idle_timeout() {
        let config = SqliteConfig {
            database_path: Some(PathBuf::from("catalog.db")),
            idle_timeout: Some(Duration::from_secs(30)),
            ..Default::default()
        };
        let pool = Db::pool_options(&config, None);
        assert_eq!(pool.get_idle_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(pool.get_min_connections(), 0);
    }
}
