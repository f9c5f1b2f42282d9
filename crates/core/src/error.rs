//! Session failure taxonomy.
//!
//! The guard collapses every [`SessionError`] variant into the same
//! user-visible outcome (clear the session keys, redirect to login), but the
//! variants stay distinct so callers can log and message each case
//! separately -- "never logged in" is not the same message as "session
//! expired".

use crate::types::Timestamp;

/// Why a session was judged invalid.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No token is present in the store.
    #[error("no active session")]
    NotLoggedIn,

    /// The token string failed structural decoding (wrong segment count,
    /// bad base64, unparseable payload).
    #[error("malformed session token: {0}")]
    Malformed(String),

    /// The token parsed but its expiry instant has passed.
    #[error("session expired at {expired_at}")]
    Expired {
        /// When the token stopped being valid.
        expired_at: Timestamp,
    },

    /// The session store itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure reading or writing the persistent key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
