//! Application implementation with API-key authorization.
//!
//! This module ties the SQLite repository to a fixed set of API keys read
//! from configuration.

use crate::AuthConfig;
use catalog_axum::ApiKey;
use catalog_core::ports::Application;
use catalog_sqlite::Db;
use std::{collections::HashSet, sync::Arc};

/// The API keys the server accepts, split by what they are allowed to do.
///
/// Managers may also view.
#[derive(Debug, Default)]
pub struct KeyRing {
    readers: HashSet<String>,
    managers: HashSet<String>,
}

impl KeyRing {
    /// Collect the keys from configuration, plus extra manager keys (e.g.
    /// from the command line). Blank keys are ignored.
    pub fn new(auth: &AuthConfig, extra_managers: &[String]) -> Self {
        fn clean<'a>(keys: impl IntoIterator<Item = &'a String>) -> HashSet<String> {
            keys.into_iter()
                .map(|key| key.trim())
                .filter(|key| !key.is_empty())
                .map(str::to_owned)
                .collect()
        }

        Self {
            readers: clean(&auth.readers),
            managers: clean(auth.managers.iter().chain(extra_managers)),
        }
    }

    /// Whether no key at all is configured.
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty() && self.managers.is_empty()
    }

    fn can_view(&self, key: &str) -> bool {
        self.readers.contains(key) || self.managers.contains(key)
    }

    fn can_manage(&self, key: &str) -> bool {
        self.managers.contains(key)
    }
}

/// Main application implementation combining storage and authorization.
#[derive(Clone)]
pub struct CatalogApp {
    /// Database connection for persistent storage
    pub db: Db,
    /// The accepted API keys
    pub keys: Arc<KeyRing>,
}

impl Application for CatalogApp {
    type Context = ApiKey;
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    async fn can_view_products(&self, context: &Self::Context) -> bool {
        self.keys.can_view(context.as_str())
    }

    async fn can_manage_products(&self, context: &Self::Context) -> bool {
        self.keys.can_manage(context.as_str())
    }
}
