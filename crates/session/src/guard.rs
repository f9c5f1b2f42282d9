//! Protected-view session gating.
//!
//! Every failure mode -- missing token, malformed token, expired token,
//! store failure -- produces the same side effects: the three session keys
//! are removed and the navigator is sent to the role's login route, exactly
//! once per check. The returned [`SessionError`] still distinguishes the
//! cases so callers can log and message them separately.

use campus_core::error::SessionError;
use campus_core::identity::Identity;
use campus_core::roles::Role;

use crate::expiry::{self, TokenExpiry};
use crate::store::{clear_session, SessionKeys, SessionStore};
use crate::token;

/// The router seam: where the guard sends the user on an invalid session.
pub trait Navigator: Send + Sync {
    /// Navigate the client to `path`. Must not block.
    fn navigate(&self, path: &str);
}

/// Any `Fn(&str)` works as a navigator; real clients pass their router's
/// push function, tests pass a recording closure.
impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// A passed validity check, with everything a protected view needs.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    /// The identity record decoded from the token payload.
    pub identity: Identity,
    /// Expiry snapshot taken at check time.
    pub expiry: TokenExpiry,
}

/// Gates protected views on token validity for one role.
pub struct SessionGuard<S, N> {
    role: Role,
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigator> SessionGuard<S, N> {
    pub fn new(role: Role, store: S, navigator: N) -> Self {
        Self {
            role,
            store,
            navigator,
        }
    }

    /// The role this guard protects.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The underlying store, for callers that also persist through it.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the validity check. Call once on view entry; the watcher repeats
    /// it on a timer.
    ///
    /// On failure the session keys are already cleared and the navigator
    /// has been sent to the login route by the time this returns.
    pub fn check(&self) -> Result<ActiveSession, SessionError> {
        match self.validate() {
            Ok(session) => {
                if session.expiry.is_expiring_soon() {
                    tracing::warn!(
                        role = %self.role,
                        minutes_left = session.expiry.time_left.num_minutes(),
                        "Session expires in under an hour"
                    );
                }
                Ok(session)
            }
            Err(err) => {
                self.teardown(&err);
                Err(err)
            }
        }
    }

    /// Explicit logout: clear the session keys and go to the login route.
    pub fn logout(&self) {
        tracing::info!(role = %self.role, "Logging out");
        self.teardown(&SessionError::NotLoggedIn);
    }

    /// Pure validity computation: read, decode, evaluate. No side effects.
    fn validate(&self) -> Result<ActiveSession, SessionError> {
        let keys = SessionKeys::for_role(self.role);

        // Missing token short-circuits before any decode work.
        let raw = self
            .store
            .get(&keys.token)?
            .ok_or(SessionError::NotLoggedIn)?;

        let claims = token::decode(&raw)?;

        let expiry = expiry::evaluate_now(claims.exp);
        if !expiry.is_valid {
            return Err(SessionError::Expired {
                expired_at: expiry.expires_at,
            });
        }

        Ok(ActiveSession {
            identity: claims.identity,
            expiry,
        })
    }

    /// Remove the session keys and redirect to the role's login route.
    fn teardown(&self, reason: &SessionError) {
        if let Err(e) = clear_session(&self.store, self.role) {
            tracing::error!(role = %self.role, error = %e, "Failed to clear session keys");
        }

        tracing::info!(role = %self.role, reason = %reason, "Session ended, redirecting to login");
        self.navigator.navigate(&self.role.login_path());
    }
}
