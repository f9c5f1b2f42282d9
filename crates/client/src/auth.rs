//! Login and who-am-i calls against the backend.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use campus_core::identity::Identity;
use campus_core::roles::Role;
use campus_session::store::{write_session, SessionStore};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/<role>/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A successful login: the raw token plus the identity the backend decoded
/// from its own records.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub identity: Identity,
}

/// Wire shape of a login response.
///
/// The backend always sends `success`; which other fields are present
/// depends on it, so everything else is optional until
/// [`into_result`](Self::into_result) collapses the shape.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub identity: Option<Identity>,
}

impl LoginResponse {
    /// Collapse the wire shape into a real result.
    pub fn into_result(self) -> ClientResult<LoginSession> {
        if !self.success {
            return Err(ClientError::Api {
                message: self
                    .message
                    .unwrap_or_else(|| "login failed".to_string()),
            });
        }

        match (self.token, self.identity) {
            (Some(token), Some(identity)) => Ok(LoginSession { token, identity }),
            _ => Err(ClientError::Api {
                message: "login response missing token or identity".to_string(),
            }),
        }
    }
}

/// Wire shape of a who-am-i response.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub identity: Option<Identity>,
}

impl MeResponse {
    /// Collapse the wire shape into a real result.
    pub fn into_result(self) -> ClientResult<Identity> {
        if !self.success {
            return Err(ClientError::Api {
                message: self
                    .message
                    .unwrap_or_else(|| "identity lookup failed".to_string()),
            });
        }

        self.identity.ok_or_else(|| ClientError::Api {
            message: "identity lookup response missing identity".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the role-scoped auth endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, role: Role, tail: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, role.api_segment(), tail)
    }

    /// `POST /api/<role>/login`
    ///
    /// A single best-effort attempt: no retries, failures surface to the
    /// caller as-is.
    pub async fn login(&self, role: Role, request: &LoginRequest) -> ClientResult<LoginSession> {
        let response: LoginResponse = self
            .http
            .post(self.url(role, "login"))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        response.into_result()
    }

    /// `GET /api/<role>/me` with a Bearer token.
    pub async fn me(&self, role: Role, token: &str) -> ClientResult<Identity> {
        let response: MeResponse = self
            .http
            .get(self.url(role, "me"))
            .bearer_auth(token)
            .send()
            .await?
            .json()
            .await?;

        response.into_result()
    }

    /// Login and persist the three session keys (token, identity record,
    /// login instant) through the given store.
    pub async fn login_into<S>(
        &self,
        store: &S,
        role: Role,
        request: &LoginRequest,
    ) -> ClientResult<LoginSession>
    where
        S: SessionStore + ?Sized,
    {
        let session = self.login(role, request).await?;

        let identity_json = serde_json::to_string(&session.identity)?;
        write_session(store, role, &session.token, &identity_json, Utc::now())?;

        tracing::info!(role = %role, user_id = session.identity.id(), "Stored session after login");
        Ok(session)
    }
}
