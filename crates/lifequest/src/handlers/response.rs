//! JSON envelope shared by all API responses.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::AppError;

/// `{"success": true, "data": ..., "count"?: n, "message"?: "..."}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// A list payload, with `count` set to its length.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            success: true,
            data: items,
            count: Some(count),
            message: None,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// An empty object payload carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(serde_json::json!({})).with_message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `Json` extractor whose rejections use the API error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections use the API error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sets_count() {
        let json = serde_json::to_value(ApiResponse::list(vec![1, 2, 3])).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 3);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_payload() {
        let json = serde_json::to_value(ApiResponse::message("Habit removed")).unwrap();

        assert_eq!(json["data"], serde_json::json!({}));
        assert_eq!(json["message"], "Habit removed");
        assert!(json.get("count").is_none());
    }
}
