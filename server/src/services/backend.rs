//! Moderation backend client: single-shot JSON pass-through over reqwest.
//!
//! DESIGN
//! ======
//! One request per call, no retries, no timeout beyond reqwest defaults.
//! Non-2xx upstream statuses surface as `BackendError::Status` carrying the
//! decoded body so route handlers can reflect them to the browser unchanged.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use serde_json::Value;

/// Moderation backend configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Load from `MODERATION_API_URL`. Returns `None` if unset.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("MODERATION_API_URL").ok()?;
        Some(Self { base_url })
    }
}

/// Credential headers forwarded from the browser to the backend.
#[derive(Debug, Clone, Default)]
pub struct ForwardAuth {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
}

/// Decoded upstream response with a successful status.
///
/// `body` is `Null` when the upstream body was empty (e.g. 204 on logout);
/// `set_cookies` carries upstream `Set-Cookie` values for reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct Upstream {
    pub status: u16,
    pub body: Value,
    pub set_cookies: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("api request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api request failed: invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("api request failed: status {status}")]
    Status { status: u16, body: Value },
}

/// Shared reqwest client bound to the moderation backend base URL.
///
/// Cheap to clone; handlers receive it through `AppState`.
#[derive(Clone)]
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
}

impl Backend {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self { http: reqwest::Client::new(), base_url }
    }

    /// `GET <base>/<path>`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Status` for non-2xx responses and
    /// `BackendError::Http`/`Decode` for transport or body failures.
    pub async fn get(&self, path: &str, auth: &ForwardAuth) -> Result<Upstream, BackendError> {
        self.execute(reqwest::Method::GET, path, None, auth).await
    }

    /// `POST <base>/<path>` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Status` for non-2xx responses and
    /// `BackendError::Http`/`Decode` for transport or body failures.
    pub async fn post(&self, path: &str, body: Option<&Value>, auth: &ForwardAuth) -> Result<Upstream, BackendError> {
        self.execute(reqwest::Method::POST, path, body, auth).await
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
        auth: &ForwardAuth,
    ) -> Result<Upstream, BackendError> {
        let url = join_url(&self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = &auth.cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(authorization) = &auth.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }
        if let Some(json) = body {
            request = request.json(json);
        }

        let response = request.send().await?;
        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok().map(ToOwned::to_owned))
            .collect();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // Error payloads pass through; non-JSON bodies degrade to Null.
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(Upstream { status: status.as_u16(), body, set_cookies })
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
