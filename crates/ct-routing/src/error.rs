//! Route proxy error types.
//!
//! `RouteError`'s `Display` output is what callers see, so it never embeds
//! provider detail.  The underlying [`ProviderError`] stays reachable through
//! `source()` for server-side logging.

use thiserror::Error;

/// Failures talking to the routing provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider payload: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// Wrap a `reqwest` error with its URL stripped (the URL carries the API key).
    pub fn transport(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.without_url())
    }
}

/// Caller-facing failures of [`RouteProxy`](crate::RouteProxy).
#[derive(Debug, Error)]
pub enum RouteError {
    /// Missing or malformed `start` / `end`.  The message is safe to return.
    #[error("{0}")]
    Validation(String),

    #[error("Route not found.")]
    NotFound,

    #[error("Failed to fetch route from routing provider.")]
    Upstream(#[source] ProviderError),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
pub type ProxyResult<T> = Result<T, RouteError>;
