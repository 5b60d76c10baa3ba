use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use lifequest_core::account::AccountError;
use lifequest_core::book::BookError;
use lifequest_core::book_note::BookNoteError;
use lifequest_core::collectible::CollectibleError;
use lifequest_core::finance::FinanceError;
use lifequest_core::habit::HabitError;
use lifequest_core::media::MediaError;
use lifequest_core::note::NoteError;
use lifequest_core::progression::ProgressionError;
use lifequest_core::storage::{DateRangeError, RepositoryError};
use lifequest_core::task::TaskError;
use lifequest_core::volume::VolumeError;
use lifequest_core::workout::WorkoutError;

/// Error returned by every API handler.
///
/// Renders as `{"success": false, "message": "..."}` with the matching
/// status code. Server-side failures are logged and answered with a
/// generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Repository(err) => match err {
                RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
                RepositoryError::AlreadyExists { .. } => StatusCode::CONFLICT,
                RepositoryError::InvalidData(_) => StatusCode::BAD_REQUEST,
                RepositoryError::ConnectionFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
                RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
            "Server Error".to_string()
        } else {
            tracing::warn!(status = %status, message = %self, "Request rejected");
            self.to_string()
        };

        (
            status,
            Json(json!({
                "success": false,
                "message": message,
            })),
        )
            .into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            AccountError::NotOwned => AppError::Forbidden(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<CollectibleError> for AppError {
    fn from(err: CollectibleError) -> Self {
        match err {
            CollectibleError::UnknownCategory(_) | CollectibleError::EmptyCatalogue => {
                AppError::NotFound(err.to_string())
            }
            CollectibleError::CollectionComplete | CollectibleError::AlreadyOwned => {
                AppError::Conflict(err.to_string())
            }
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::SubtaskNotFound => AppError::NotFound(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

macro_rules! bad_request_from {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::BadRequest(err.to_string())
                }
            }
        )+
    };
}

bad_request_from!(
    BookError,
    BookNoteError,
    DateRangeError,
    FinanceError,
    HabitError,
    MediaError,
    NoteError,
    ProgressionError,
    VolumeError,
    WorkoutError,
);
