//! # Client Error Types
//!
//! Every request funnels into [`ClientError`]. API failures carry the
//! human-readable message the backend put in its error body so the UI
//! layer can show it verbatim.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is taken from the response body's `detail` field,
    /// falling back to `message`, falling back to the HTTP status text.
    #[error("{message}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Best available description of what went wrong.
        message: String,
    },

    /// The request never produced a response (connection refused,
    /// timeout, DNS failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
    },
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// Tests
// =============================================================================
