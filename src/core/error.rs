//! Error types for edit sessions and their collaborators

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// More distinct coordinates were touched than the session allows.
    #[error("Max blocks changed in an operation reached ({limit})")]
    LimitExceeded { limit: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Expression error: {0}")]
    Expression(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_message() {
        let err = Error::LimitExceeded { limit: 10 };
        assert_eq!(err.to_string(), "Max blocks changed in an operation reached (10)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
