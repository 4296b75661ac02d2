//! Types shared by the SQLite backend and its callers.
//!
//! The public [`ProductId`] is what the API hands out; [`ProductRow`] is the
//! internal row mapping for the `product` table.

use catalog_core::models::{ProductData, ProductRecord};

mod ids;
pub use ids::ProductId;

#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: ProductId,
    pub category: String,
    pub unit_price: f64,
}

impl From<ProductRow> for ProductRecord<ProductId> {
    fn from(row: ProductRow) -> Self {
        ProductRecord {
            id: row.id,
            data: ProductData {
                category: row.category,
                unit_price: row.unit_price,
            },
        }
    }
}
