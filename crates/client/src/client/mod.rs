//! HTTP client for the lifequest API.

pub mod auth;
pub mod health;
pub mod volumes;
pub mod workouts;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Success envelope returned by every JSON endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// HTTP client for the lifequest API.
#[derive(Debug, Clone)]
pub struct LifequestClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl LifequestClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create from environment (LIFEQUEST_URL / LIFEQUEST_TOKEN).
    pub fn from_env() -> Self {
        let base_url = std::env::var("LIFEQUEST_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let client = Self::new(base_url);
        match std::env::var("LIFEQUEST_TOKEN") {
            Ok(token) => client.with_token(token),
            Err(_) => client,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Unwrap the success envelope or turn the error envelope into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Envelope<T>> {
        if response.status().is_success() {
            return response.json().await.map_err(ClientError::from);
        }
        Err(error_from(response).await)
    }

    /// Return the raw body of a non-JSON endpoint.
    async fn handle_text(&self, response: reqwest::Response) -> Result<String> {
        if response.status().is_success() {
            return response.text().await.map_err(ClientError::from);
        }
        Err(error_from(response).await)
    }
}

async fn error_from(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error_for_status(status, &body)
}

/// Maps a failed response to a `ClientError`, preferring the envelope message.
pub fn error_for_status(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| body.to_string());
    match status {
        401 => ClientError::Unauthorized(message),
        404 => ClientError::NotFound { resource: message },
        _ => ClientError::ServerError { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_message_is_used() {
        let body = r#"{"success": false, "message": "Volume 9 not found"}"#;

        match error_for_status(404, body) {
            ClientError::NotFound { resource } => assert_eq!(resource, "Volume 9 not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_kept_verbatim() {
        match error_for_status(502, "Bad Gateway") {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            error_for_status(401, "{}"),
            ClientError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = LifequestClient::new("http://localhost:5000/");

        assert_eq!(client.url("/livez"), "http://localhost:5000/livez");
    }
}
