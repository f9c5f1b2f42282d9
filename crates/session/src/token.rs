//! Compact-token payload decoding.
//!
//! Tokens are three dot-separated base64url segments (header, payload,
//! signature). Only the payload segment is consumed client-side, and it is
//! *parsed*, never verified. Every structural failure maps to
//! [`SessionError::Malformed`] so callers can treat "garbage in storage"
//! uniformly.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use campus_core::error::SessionError;
use campus_core::identity::Identity;

/// Claims carried in the token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration time (UTC Unix timestamp, seconds).
    pub exp: i64,
    /// Issued-at time, when the backend includes one. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// The role-specific identity record embedded alongside the claims.
    #[serde(flatten)]
    pub identity: Identity,
}

/// Decode the payload segment of a compact token.
///
/// Splits on `'.'`, requires exactly three segments, base64url-decodes the
/// middle one (no padding) and parses the bytes as a JSON [`Claims`] record.
///
/// This is a parse, not an authentication check: the signature segment is
/// ignored entirely.
pub fn decode(token: &str) -> Result<Claims, SessionError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| SessionError::Malformed(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&payload)
        .map_err(|e| SessionError::Malformed(format!("payload is not a claims record: {e}")))
}

/// Assemble an *unsigned* token in the compact format.
///
/// The signature segment is left empty, so nothing downstream should ever
/// accept such a token as authentic. Exists for fixtures and local tooling;
/// real tokens come from the backend.
pub fn encode_unsigned(claims: &Claims) -> Result<String, serde_json::Error> {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"none\",\"typ\":\"JWT\"}");
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    Ok(format!("{header}.{payload}."))
}
