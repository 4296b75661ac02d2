use crate::models::{ProductData, ProductRecord};
use std::future::Future;

/// Repository interface for the product collection.
///
/// Implementations own the canonical records. They are responsible for
/// assigning identifiers, and for doing so atomically when creates arrive
/// concurrently.
pub trait ProductRepository: super::Repository {
    /// Get every stored product, in the order they were created.
    fn list_products(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductRecord<Self::ProductId>>, Self::Error>> + Send;

    /// Store a new product, assigning it a fresh identifier.
    ///
    /// Callers are expected to have validated `data` already; backends may
    /// still refuse it with an error.
    fn create_product(
        &self,
        data: ProductData,
    ) -> impl Future<Output = Result<ProductRecord<Self::ProductId>, Self::Error>> + Send;

    /// Get a single product.
    ///
    /// # Returns
    ///
    /// Ok(None) if no product has this identifier.
    fn get_product(
        &self,
        product_id: Self::ProductId,
    ) -> impl Future<Output = Result<Option<ProductRecord<Self::ProductId>>, Self::Error>> + Send;
}
