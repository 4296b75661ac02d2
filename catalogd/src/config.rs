//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::Cli;
use serde::{Deserialize, Serialize};

/// The API keys the server accepts.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AuthConfig {
    /// Keys that may list and read products
    #[serde(default)]
    pub readers: Vec<String>,

    /// Keys that may also create products
    #[serde(default)]
    pub managers: Vec<String>,
}

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, CORS)
    #[serde(default)]
    pub server: catalog_axum::config::AxumConfig,

    /// Database configuration (file path, pool size)
    #[serde(default)]
    pub database: catalog_sqlite::config::SqliteConfig,

    /// Accepted API keys
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`. The key lists
    /// accept comma-separated values.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep the products in a file
    /// export APP_DATABASE__DATABASE_PATH="/var/lib/catalog/catalog.db"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    ///
    /// # Issue two read-only keys
    /// export APP_AUTH__READERS="alpha,bravo"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("auth.readers")
                .with_list_parse_key("auth.managers")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("catalogd-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_a_file() {
        let config = AppConfig::load(&Cli::default()).unwrap();
        assert_eq!(config.server, Default::default());
        assert_eq!(config.database, Default::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let path = write_config(
            "overrides",
            r#"
            [server]
            bind_address = "127.0.0.1:3000"
            permissive_cors = true

            [database]
            database_path = "catalog.db"
            idle_timeout = "90s"

            [auth]
            readers = ["r1"]
            managers = ["m1", "m2"]
            "#,
        );
        let cli = Cli {
            config: Some(path.clone()),
            ..Default::default()
        };

        let config = AppConfig::load(&cli).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert!(config.server.permissive_cors);
        assert_eq!(
            config.database.database_path,
            Some(PathBuf::from("catalog.db"))
        );
        assert!(config.database.create_if_missing);
        assert_eq!(
            config.database.idle_timeout,
            Some(std::time::Duration::from_secs(90))
        );
        assert_eq!(config.auth.readers, ["r1"]);
        assert_eq!(config.auth.managers, ["m1", "m2"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
