use thiserror::Error;

/// Errors that can occur when parsing or manipulating volumes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VolumeError {
    #[error("Raw text content is required.")]
    MissingRawText,
    #[error("Failed to parse Volume number and Title from text.")]
    MissingHeader,
    #[error("Volume title cannot be empty")]
    EmptyTitle,
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),
    #[error("Invalid volume status: {0}")]
    InvalidStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_error_display() {
        assert_eq!(
            VolumeError::MissingHeader.to_string(),
            "Failed to parse Volume number and Title from text."
        );
        assert_eq!(
            VolumeError::InvalidRating(9).to_string(),
            "Rating must be between 1 and 5, got 9"
        );
    }
}
