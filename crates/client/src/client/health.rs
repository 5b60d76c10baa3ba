//! Health check operations.

use serde::{Deserialize, Serialize};

use super::LifequestClient;
use crate::error::{ClientError, Result};

/// Body of `GET /healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub backend: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl LifequestClient {
    /// Server status and storage backend.
    pub async fn health(&self) -> Result<Health> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        let text = self.handle_text(response).await?;
        serde_json::from_str(&text).map_err(ClientError::from)
    }
}
