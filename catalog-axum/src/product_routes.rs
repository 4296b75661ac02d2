//! REST API endpoints for the product collection.
//!
//! Products can be listed, created and read back by id. There is no update
//! or delete: a product record never changes once storage has assigned its
//! identifier.

use crate::{ApiApplication, auth::SECURITY_SCHEME, error::ErrorBody};
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::Json;
use catalog_core::{models::ProductRecord, ports::Repository};

mod crud;
use crud::*;

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct Id {
    /// The unique identifier of the product
    product_id: String,
}

type Record<T> =
    ProductRecord<<<T as catalog_core::ports::Application>::Repository as Repository>::ProductId>;

/// Creates a router with product-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/",
            get_with(list_products::<T>, list_products_docs::<T>)
                .post_with(create_product::<T>, create_product_docs::<T>),
            |route| route.security_requirement(SECURITY_SCHEME).tag("products"),
        )
        .api_route_with(
            "/{product_id}",
            get_with(read_product::<T>, read_product_docs::<T>),
            |route| route.security_requirement(SECURITY_SCHEME).tag("products"),
        )
}

fn list_products_docs<T: ApiApplication>(op: TransformOperation<'_>) -> TransformOperation<'_> {
    op.summary("List products")
        .description(
            r#"
            Get every stored product, in the order they were created.

            Requires `can_view_products` permission.
            "#,
        )
        .response_with::<200, Json<Vec<Record<T>>>, _>(|res| res.description("All products"))
        .response_with::<401, Json<ErrorBody>, _>(|res| res.description("Missing or unknown API key"))
        .response_with::<403, Json<ErrorBody>, _>(|res| res.description("Missing view permission"))
        .response_with::<500, Json<ErrorBody>, _>(|res| res.description("Database query failed"))
}

fn create_product_docs<T: ApiApplication>(op: TransformOperation<'_>) -> TransformOperation<'_> {
    op.summary("Create product")
        .description(
            r#"
            Store a new product. The identifier is assigned by the server.

            `categorie` must not be blank and `unit_price` must be a finite,
            non-negative number.

            Requires `can_manage_products` permission.
            "#,
        )
        .response_with::<201, Json<Record<T>>, _>(|res| res.description("The created product"))
        .response_with::<400, Json<ErrorBody>, _>(|res| res.description("Invalid request body"))
        .response_with::<401, Json<ErrorBody>, _>(|res| res.description("Missing or unknown API key"))
        .response_with::<403, Json<ErrorBody>, _>(|res| res.description("Missing manage permission"))
        .response_with::<500, Json<ErrorBody>, _>(|res| res.description("Database operation failed"))
}

fn read_product_docs<T: ApiApplication>(op: TransformOperation<'_>) -> TransformOperation<'_> {
    op.summary("Get product")
        .description(
            r#"
            Get a single product by its identifier.

            Requires `can_view_products` permission.
            "#,
        )
        .response_with::<200, Json<Record<T>>, _>(|res| res.description("The product"))
        .response_with::<401, Json<ErrorBody>, _>(|res| res.description("Missing or unknown API key"))
        .response_with::<403, Json<ErrorBody>, _>(|res| res.description("Missing view permission"))
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("Product does not exist"))
        .response_with::<500, Json<ErrorBody>, _>(|res| res.description("Database query failed"))
}
