//! RPC error types.

use thiserror::Error;

/// JSON-RPC 2.0 standard error codes.
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP error calling {method} at {url}: {source}")]
    Http {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RPC error {code} from {method}: {message}")]
    Rpc {
        code: i64,
        message: String,
        method: String,
    },

    #[error("no result in response")]
    NoResult,

    #[error("request timed out")]
    Timeout,

    #[error("authentication failed against {url}")]
    AuthFailed { url: String },

    #[error("{method} at {url} returned HTTP {status}: {body}")]
    HttpStatus {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("daemon busy (syncing): {context}")]
    Busy { context: String },

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("portable storage error: {0}")]
    PortableStorage(String),

    #[error("{0}")]
    Other(String),
}

impl RpcError {
    /// Whether this failure is worth retrying with backoff: transport-level
    /// errors, timeouts, and "busy" responses are transient; malformed
    /// responses and authentication failures are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RpcError::Http { .. }
                | RpcError::Timeout
                | RpcError::Busy { .. }
                | RpcError::Connection(_)
                | RpcError::HttpStatus { status: 500..=599, .. }
        )
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(source: reqwest::Error) -> Self {
        RpcError::Http {
            method: "unknown".to_string(),
            url: source.url().map(|u| u.to_string()).unwrap_or_default(),
            source,
        }
    }
}
