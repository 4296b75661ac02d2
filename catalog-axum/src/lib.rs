#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod product_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use catalog_core::ports::{Application, Repository};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Display, str::FromStr, sync::Arc};
use tower_http::cors::CorsLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod auth;
pub use auth::ApiKey;

pub mod error;

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the full API router for `state`, along with the OpenAPI
/// document describing it.
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> (axum::Router, OpenApi) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/v1/products", product_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    // Arc is very important here or you will face massive memory and performance issues
    let router = router.layer(Extension(api.clone())).with_state(state);

    let router = if config.permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    (router, Arc::unwrap_or_clone(api))
}

/// Starts the HTTP server with the provided configuration.
///
/// Runs until the listener fails or the process receives Ctrl-C, in which
/// case in-flight requests are allowed to finish.
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app, config);
    axum::serve(listener, service)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutting down");
            }
        })
        .await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<
        Context = ApiKey,
        Repository: Clone
                        + Send
                        + Sync
                        + 'static
                        + Repository<
            ProductId: Display + FromStr + Serialize + DeserializeOwned + JsonSchema,
        >,
    >
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<
            Context = ApiKey,
            Repository: Clone
                            + Send
                            + Sync
                            + 'static
                            + Repository<
                ProductId: Display + FromStr + Serialize + DeserializeOwned + JsonSchema,
            >,
        >
{
}
