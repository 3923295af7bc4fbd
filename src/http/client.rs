//! Low-level HTTP client — `ChallengeHttp`.
//!
//! Every backend action is a JSON `POST` against `<base_url><path>`. This
//! layer injects the session token, logs, classifies failures into transport
//! (`HttpError`) and domain (`SdkError::Domain`) errors, and decodes the body.
//! It never retries.

use crate::error::{HttpError, SdkError};
use crate::session::{inject_session, SessionContext};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// Low-level HTTP client for the challenge API.
#[derive(Debug, Clone)]
pub struct ChallengeHttp {
    base_url: String,
    client: Client,
    session: SessionContext,
}

impl ChallengeHttp {
    pub fn new(
        base_url: &str,
        session: SessionContext,
        timeout: Option<Duration>,
    ) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.pool_max_idle_per_host(10);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().map_err(HttpError::from)?,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session context this client reads its token from.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// POST `body` to `path` and decode the response as `T`.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);

        let mut payload = serde_json::to_value(body)?;
        if let Some(token) = self.session.token().await {
            inject_session(&mut payload, &token);
        }

        tracing::debug!(method = "POST", url = %url, "Making request");

        let resp = match self.client.post(&url).json(&payload).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "API request failed");
                return Err(HttpError::from(e).into());
            }
        };

        let status = resp.status();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(url = %url, status = status.as_u16(), error = %e, "Failed to read response body");
                return Err(HttpError::from(e).into());
            }
        };

        if !status.is_success() {
            let message = text_error_message(&text).unwrap_or(text);
            tracing::error!(url = %url, status = status.as_u16(), error = %message, "API error");
            return Err(HttpError::from_status(status.as_u16(), message).into());
        }

        decode_body(&text).inspect_err(|e| {
            tracing::error!(url = %url, status = status.as_u16(), error = %e, "API error");
        })
    }
}

/// Decode a successful response body.
///
/// An empty body reads as `{}`. A body shaped like `{"error": ..}` (or a list
/// whose first row is) becomes [`SdkError::Domain`].
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, SdkError> {
    let value: Value = if text.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_str(text)?
    };

    if let Some(message) = embedded_error(&value) {
        return Err(SdkError::Domain(message));
    }

    Ok(serde_json::from_value(value)?)
}

/// Extract the backend's `error` message from a decoded body, if any.
pub fn embedded_error(value: &Value) -> Option<String> {
    let obj = match value {
        Value::Object(map) => map,
        Value::Array(items) => items.first()?.as_object()?,
        _ => return None,
    };

    match obj.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn text_error_message(text: &str) -> Option<String> {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|v| embedded_error(&v))
}
