use thiserror::Error;

/// Errors that can occur when validating account input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Please provide email and password")]
    MissingCredentials,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Username must be between 3 and 20 characters long")]
    InvalidUsername,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Invalid items array. Maximum of {limit} items allowed.")]
    TooManyDisplayedItems { limit: usize },
    #[error("Forbidden. You can only display items you own.")]
    NotOwned,
    #[error("Invalid collection type: {0}")]
    InvalidCollectionType(String),
}
