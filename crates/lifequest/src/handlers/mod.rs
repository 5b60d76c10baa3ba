pub mod auth;
pub mod books;
pub mod collectibles;
pub mod error;
pub mod finance;
pub mod habits;
pub mod health;
pub mod media;
pub mod notes;
pub mod pokemon;
pub mod public_volumes;
pub mod response;
pub mod tasks;
pub mod users;
pub mod volumes;
pub mod workouts;

use chrono::{NaiveDate, Utc};

pub use error::AppError;
pub use response::{ApiJson, ApiQuery, ApiResponse};

/// Calendar day used for streaks, reading dates and default transaction dates.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
