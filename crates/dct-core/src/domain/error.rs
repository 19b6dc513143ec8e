use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any I/O happens: they describe requests
/// that can never succeed no matter what is on disk.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid artifact type '{value}': {reason}")]
    InvalidArtifactKind { value: String, reason: String },

    #[error("Invalid artifact name '{value}': {reason}")]
    InvalidArtifactName { value: String, reason: String },

    #[error("Invalid file extension '{value}': {reason}")]
    InvalidFileExtension { value: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArtifactKind { .. } => vec![
                "Artifact types are single words such as: command, query, handler".into(),
                "Run 'dct list' to see the types known in this project".into(),
            ],
            Self::InvalidArtifactName { .. } => vec![
                "Pass a type name, optionally prefixed by a directory".into(),
                "Example: dct create command Features/Orders/PlaceOrder".into(),
            ],
            Self::InvalidFileExtension { value, .. } => vec![
                format!("Check \"fileExtension\" in dct-config.json (got '{}')", value),
                "Use a bare extension without the leading dot, e.g. \"cs\"".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArtifactKind { .. } | Self::InvalidArtifactName { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidFileExtension { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
