//! Settings for opening the product database.

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// How [`crate::Db::open`] connects to SQLite.
///
/// # Examples
///
/// ```
/// use catalog_sqlite::config::SqliteConfig;
/// use std::path::PathBuf;
///
/// // A private in-memory database
/// let config = SqliteConfig::default();
/// assert!(config.database_path.is_none());
///
/// // A database file, which must already exist
/// let config = SqliteConfig {
///     database_path: Some(PathBuf::from("catalog.db")),
///     create_if_missing: false,
///     max_readers: Some(4),
///     idle_timeout: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// Path of the database file; an in-memory database is used when absent
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Create the database file on open if it does not exist yet
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,

    /// Upper bound on the reader pool (sqlx's default applies when absent)
    #[serde(default)]
    pub max_readers: Option<u32>,

    /// How long a pooled connection to a database file may sit unused before
    /// it is closed, e.g. `"5m"` (sqlx's default applies when absent).
    /// Connections to an in-memory database are never closed, since the
    /// data lives only as long as they do.
    #[serde(default, with = "humantime_serde::option")]
    pub idle_timeout: Option<Duration>,
}

fn default_create_if_missing() -> bool {
    true
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: default_create_if_missing(),
            max_readers: None,
            idle_timeout: None,
        }
    }
}
