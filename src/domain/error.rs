use thiserror::Error;

/// Core domain errors
///
/// The display form is the bare message so it can be surfaced to clients
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The message carried by this error
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("name required");
        assert_eq!(error.to_string(), "name required");
        assert_eq!(error.message(), "name required");
    }

    #[test]
    fn test_validation_errors_compare_by_message() {
        assert_eq!(
            DomainError::validation("email exists"),
            DomainError::validation("email exists")
        );
        assert_ne!(
            DomainError::validation("email exists"),
            DomainError::validation("invalid email")
        );
    }
}
