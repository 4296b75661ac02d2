mod product;

pub use product::ProductRepository;

use std::{fmt::Debug, future::Future};

/// The base trait of every storage backend.
///
/// It names the types a backend works with; the operations themselves live
/// in the per-resource traits such as [`ProductRepository`].
pub trait Repository {
    /// The error a storage operation may fail with
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier storage assigns to a product
    type ProductId: Clone + Debug + PartialEq + Send + Sync + 'static;
}

/// The integration point for a running catalog.
///
/// An application bundles a storage backend with the authorization policy
/// applied at the API boundary. The `Context` is whatever credential the
/// transport layer extracted from the request (for the HTTP API, an API key).
pub trait Application {
    /// The credential presented with a request
    type Context: Send + Sync;

    /// The storage backend
    type Repository: ProductRepository;

    /// Get the storage backend
    fn database(&self) -> &Self::Repository;

    /// Whether the credential may list and read products.
    fn can_view_products(&self, context: &Self::Context) -> impl Future<Output = bool> + Send;

    /// Whether the credential may create products.
    fn can_manage_products(&self, context: &Self::Context) -> impl Future<Output = bool> + Send;
}
