//! Auth API operations.

use serde::{Deserialize, Serialize};

use super::LifequestClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token issued by `POST /api/auth/login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: serde_json::Value,
}

impl LifequestClient {
    /// Log in and return the bearer token with the user profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .post("/api/auth/login")
            .json(&LoginBody { email, password })
            .send()
            .await?;
        Ok(self.handle_response(response).await?.data)
    }
}
