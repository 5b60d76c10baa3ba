//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the lifequest client and CLI.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("could not reach the lifequest server: {0}")]
    Request(#[from] reqwest::Error),

    /// Any non-2xx response other than 401 and 404.
    #[error("server answered {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("{resource}")]
    NotFound { resource: String },

    /// Missing, expired or rejected bearer token. Log in again.
    #[error("unauthorized ({0}); run `lifequest-client login` and set LIFEQUEST_TOKEN")]
    Unauthorized(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
