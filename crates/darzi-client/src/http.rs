//! # HTTP Plumbing
//!
//! One place that knows how to issue a request and interpret the
//! response. Endpoint wrappers in [`crate::api`] stay declarative.
//!
//! ## Response policy
//!
//! - Non-2xx: the error body's `detail` field wins, then `message`,
//!   then the HTTP status text. The result is a [`ClientError::Api`].
//! - 2xx with a 204 status, an empty body, or a body that is not valid
//!   JSON: success with no payload (`Ok(None)`).
//! - 2xx with a JSON body: decoded into the requested type.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Shared request machinery behind every endpoint group.
#[derive(Debug, Clone)]
pub(crate) struct Http {
    client: reqwest::Client,
    base_url: String,
}

impl Http {
    pub(crate) fn new(config: &ClientConfig) -> ClientResult<Self> {
        reqwest::Url::parse(&config.base_url).map_err(|_| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
        })?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET expecting a JSON payload.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Option<T>> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::interpret(Method::GET, path, response).await
    }

    /// POST with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::interpret(Method::POST, path, response).await
    }

    /// PUT with a JSON body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::interpret(Method::PUT, path, response).await
    }

    /// DELETE, payload ignored.
    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::interpret::<serde_json::Value>(Method::DELETE, path, response).await?;
        Ok(())
    }

    async fn interpret<T: DeserializeOwned>(
        method: Method,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<Option<T>> {
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "api response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                tracing::warn!(path, %error, "undecodable success body, treating as empty");
                Ok(None)
            }
        }
    }
}

/// Best available description of a failed response.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins() {
        let message = error_message(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Customer not found", "message": "ignored"}"#,
        );
        assert_eq!(message, "Customer not found");
    }

    #[test]
    fn message_field_is_fallback() {
        let message = error_message(StatusCode::BAD_REQUEST, r#"{"message": "bad input"}"#);
        assert_eq!(message, "bad input");
    }

    #[test]
    fn status_text_when_body_is_not_json() {
        let message = error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn status_text_when_fields_are_missing() {
        let message = error_message(StatusCode::CONFLICT, r#"{"error": "nope"}"#);
        assert_eq!(message, "Conflict");
    }
}
