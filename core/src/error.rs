//! Error types for the accounts API client.
//!
//! # Design
//! One variant per stage of a fetch: the exchange itself (`Transport`), the
//! status line (`Status`), and the body (`Decode`). `OwnershipMismatch` only
//! appears when the client runs in strict mode. Callers match on the variant
//! to decide how to report the failure; the client never retries.

use thiserror::Error;

/// Boxed cause attached to a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `AccountsClient` parse and fetch methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a status outside the 2xx class.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The body was read but does not have the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Strict mode: an account returned for `expected` belongs to `found`.
    #[error("account {account_id} belongs to user {found}, expected user {expected}")]
    OwnershipMismatch {
        account_id: u64,
        expected: u64,
        found: u64,
    },
}

impl ApiError {
    /// HTTP status carried by a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_helpers() {
        let err = ApiError::Status { status: 404 };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());

        let err = ApiError::Status { status: 500 };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "unexpected HTTP status 500");
    }

    #[test]
    fn transport_keeps_its_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::Transport(Box::new(cause));
        assert!(err.status().is_none());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "refused");
    }
}
