//! OpenAPI documentation generation and serving.
//!
//! The document is assembled by aide from the route metadata when the router
//! is built; these endpoints only hand it out, raw or rendered by RapiDoc.

use std::sync::Arc;

use crate::auth::SECURITY_SCHEME;
use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{ApiKeyLocation, OpenApi, SecurityScheme, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

/// Serve the RapiDoc interactive API documentation interface.
async fn serve_rapidoc() -> impl IntoApiResponse {
    let html = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Product Catalog API</title>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        show-method-in-nav-bar="as-colored-text"
        use-path-in-nav-bar="true"
        allow-authentication="true"
    ></rapi-doc>
  </body>
</html>"#;
    Html(html).into_response()
}

/// Serve the raw OpenAPI specification as JSON.
async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Creates a router for documentation endpoints.
pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(serve_rapidoc))
        .route("/api.json", get(serve_docs))
}

/// Configure the OpenAPI documentation metadata.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Product Catalog API")
        .summary("A REST API for listing, creating and reading products.")
        .description("Products carry a category (`categorie`) and a non-negative `unit_price`; identifiers are assigned by the server.")
        .version(env!("CARGO_PKG_VERSION"))
        .security_scheme(
            SECURITY_SCHEME,
            SecurityScheme::ApiKey {
                location: ApiKeyLocation::Header,
                name: "x-api-key".into(),
                description: Some("An API key issued by the operator of the catalog".into()),
                extensions: Default::default(),
            },
        )
        .tag(Tag {
            name: "products".into(),
            description: Some("Operations on the product collection".into()),
            ..Default::default()
        })
}
