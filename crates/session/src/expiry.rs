//! Expiry evaluation for decoded claims.
//!
//! Pure instant arithmetic: no clock-skew leeway, no timezone handling
//! beyond UTC. Callers pick the clock -- [`evaluate`] takes an explicit
//! instant so tests never have to sleep.

use chrono::{DateTime, Duration, Utc};

use campus_core::types::Timestamp;

/// Validity and remaining lifetime of a token at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenExpiry {
    /// When the token stops being valid.
    pub expires_at: Timestamp,
    /// `expires_at - now`; negative once expired.
    pub time_left: Duration,
    /// Whether `expires_at` is strictly in the future.
    pub is_valid: bool,
}

impl TokenExpiry {
    /// Whole hours remaining. Zero once expired.
    pub fn hours_left(&self) -> i64 {
        if self.is_valid {
            self.time_left.num_hours()
        } else {
            0
        }
    }

    /// Minutes remaining after the whole hours. Zero once expired.
    pub fn minutes_left(&self) -> i64 {
        if self.is_valid {
            self.time_left.num_minutes() % 60
        } else {
            0
        }
    }

    /// Still valid but with under an hour left. Advisory only -- the guard
    /// logs a warning and changes nothing.
    pub fn is_expiring_soon(&self) -> bool {
        self.is_valid && self.time_left < Duration::hours(1)
    }
}

/// Evaluate an `exp` claim (Unix seconds) against an explicit instant.
///
/// An `exp` outside the representable timestamp range is treated as long
/// expired.
pub fn evaluate(exp: i64, now: Timestamp) -> TokenExpiry {
    let expires_at = DateTime::<Utc>::from_timestamp(exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC);
    let time_left = expires_at - now;

    TokenExpiry {
        expires_at,
        time_left,
        is_valid: expires_at > now,
    }
}

/// Evaluate an `exp` claim against the current wall clock.
pub fn evaluate_now(exp: i64) -> TokenExpiry {
    evaluate(exp, Utc::now())
}
