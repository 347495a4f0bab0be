//! Gateway error types.
//!
//! `GatewayError` never reaches callers of the per-endpoint operations: it is
//! logged and converted into a failed `OperationResult` at the call boundary.
//! It surfaces only from gateway construction, when the HTTP client
//! cannot be built.

/// Errors from talking to the storefront backend.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// HTTP transport error (timeout, DNS, connection refused).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Response body was not JSON.
    #[error("{endpoint} returned a body that is not JSON: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint path {endpoint}: {source}")]
    Endpoint {
        endpoint: String,
        source: url::ParseError,
    },
}

impl GatewayError {
    /// Whether the failure was the request exceeding its time bound.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http { source, .. } if source.is_timeout())
    }
}
