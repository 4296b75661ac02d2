//! API-key credentials.
//!
//! Clients present a key in the `x-api-key` header. This module only pulls
//! the key out of the request; deciding what the key may do is up to the
//! [`Application`](catalog_core::ports::Application).

use crate::{ApiApplication, error::ApiError};
use aide::operation::OperationInput;
use axum::{
    extract::FromRequestParts,
    http::{HeaderName, HeaderValue, request::Parts},
};
use headers::{Header, HeaderMapExt as _};
use std::fmt;

static X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// The name of the security scheme in the OpenAPI document.
pub(crate) const SECURITY_SCHEME: &str = "ApiKeyAuth";

/// An API key, taken verbatim (minus surrounding whitespace) from the
/// `x-api-key` header.
///
/// As an extractor it rejects requests without a usable key with a 401.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keys are secrets; keep them out of logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

impl Header for ApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let key = values
            .next()
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(headers::Error::invalid)?;
        Ok(Self(key.to_owned()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.typed_try_get::<ApiKey>() {
            Ok(Some(key)) => Ok(key),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

// Documented through the security scheme rather than as a plain header parameter.
impl OperationInput for ApiKey {}

/// The two things a key can be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Permission {
    View,
    Manage,
}

impl Permission {
    fn describe(self) -> &'static str {
        match self {
            Self::View => "view products",
            Self::Manage => "create products",
        }
    }
}

/// Check `key` against the application's policy.
///
/// A key that grants nothing at all is treated as unknown (401); a key that
/// is known but lacks `permission` is refused with a 403.
pub(crate) async fn require<T: ApiApplication>(
    app: &T,
    key: &ApiKey,
    permission: Permission,
) -> Result<(), ApiError> {
    let allowed = match permission {
        Permission::View => app.can_view_products(key).await,
        Permission::Manage => app.can_manage_products(key).await,
    };

    if allowed {
        Ok(())
    } else if app.can_view_products(key).await || app.can_manage_products(key).await {
        Err(ApiError::Forbidden(permission.describe()))
    } else {
        Err(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn key_is_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_API_KEY, HeaderValue::from_static("  secret "));
        let key = headers.typed_get::<ApiKey>().unwrap();
        assert_eq!(key.as_str(), "secret");
    }

    #[test]
    fn blank_key_is_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_API_KEY, HeaderValue::from_static("   "));
        assert!(headers.typed_try_get::<ApiKey>().is_err());
    }

    #[test]
    fn debug_hides_the_key() {
        assert_eq!(format!("{:?}", ApiKey::new("secret")), "ApiKey(..)");
    }
}
