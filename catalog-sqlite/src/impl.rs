//! Repository trait implementations for the SQLite database.

use crate::{Db, types::ProductId};
use catalog_core::ports::Repository;

mod product;

impl Repository for Db {
    type Error = sqlx::Error;
    type ProductId = ProductId;
}
