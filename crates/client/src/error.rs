//! Client-side error type for API calls.

use campus_core::error::StoreError;

/// Error from a backend API call or the persistence that follows it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, non-JSON body).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered but rejected the request.
    #[error("backend rejected the request: {message}")]
    Api { message: String },

    /// Persisting the session after login failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Serializing the identity record for storage failed.
    #[error("identity serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;
