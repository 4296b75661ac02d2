//! The error type shared by every endpoint.
//!
//! Whatever goes wrong, the client receives a JSON [`ErrorBody`] with a
//! status code matching the [`ApiError`] variant. Storage failures are logged
//! here and reported to the client without their details.

use aide::operation::OperationOutput;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_core::models::InvalidProduct;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{Level, event};

/// The JSON payload of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// A stable, machine-readable tag (`invalid_request`, `unauthorized`,
    /// `forbidden`, `not_found` or `internal`)
    pub code: String,
    /// A human-readable explanation
    pub message: String,
}

/// Everything a request can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is malformed, incomplete or violates a product invariant
    #[error("{0}")]
    InvalidRequest(String),

    /// No API key was presented, or nobody owns it
    #[error("missing or unknown API key")]
    Unauthorized,

    /// The API key is known but lacks the permission for this operation
    #[error("API key is not allowed to {0}")]
    Forbidden(&'static str),

    /// No product has the requested identifier
    #[error("unknown product {0}")]
    NotFound(String),

    /// Storage failed; the message is deliberately generic
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Log a storage error and turn it into a generic 500.
    pub(crate) fn storage(err: impl Display, message: impl Into<String>) -> Self {
        event!(Level::ERROR, err = err.to_string());
        Self::Internal(message.into())
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<InvalidProduct> for ApiError {
    fn from(err: InvalidProduct) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// The possible statuses are listed per route, see `product_routes`.
impl OperationOutput for ApiError {
    type Inner = ErrorBody;
}
