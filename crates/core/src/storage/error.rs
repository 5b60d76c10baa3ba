use thiserror::Error;

/// Errors that can occur when constructing a date range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date range: 'from' must be on or before 'to'")]
    InvalidRange,
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A uniqueness constraint was violated. `id` names the conflicting key.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn already_exists(entity_type: &'static str, id: impl ToString) -> Self {
        RepositoryError::AlreadyExists {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_error_display() {
        assert_eq!(
            DateRangeError::InvalidRange.to_string(),
            "Invalid date range: 'from' must be on or before 'to'"
        );
    }

    #[test]
    fn test_not_found_helper() {
        let error = RepositoryError::not_found("Habit", "abc-123");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Habit not found: abc-123");
    }

    #[test]
    fn test_already_exists_helper() {
        let error = RepositoryError::already_exists("Volume", 42);
        assert!(!error.is_not_found());
        assert_eq!(error.to_string(), "Volume already exists: 42");
    }

    #[test]
    fn test_backend_error_display() {
        assert_eq!(
            RepositoryError::ConnectionFailed("database is locked".to_string()).to_string(),
            "Connection failed: database is locked"
        );
        assert_eq!(
            RepositoryError::Serialization("invalid blessings json".to_string()).to_string(),
            "Serialization error: invalid blessings json"
        );
        assert_eq!(
            RepositoryError::InvalidData("invalid uuid in column id".to_string()).to_string(),
            "Invalid data: invalid uuid in column id"
        );
    }
}
