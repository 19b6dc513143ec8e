//! Application layer errors.
//!
//! These errors represent failures while talking to the outside world
//! (config files, project files, the filesystem, the template engine).
//! Request validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// `dct-config.json` exists but is not valid config JSON.
    #[error("Failed to parse config file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// The project file (`*.csproj`) exists but could not be parsed.
    #[error("Failed to parse project file {path}: {reason}")]
    ProjectFileParse { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed for {path}: {reason}")]
    RenderingFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory state was poisoned.
    #[error("Internal state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the JSON in {}", path.display()),
                "Expected: { \"templatePaths\": { \"command\": \"./.dct/templates/command.tera\" } }"
                    .into(),
                "Or delete the file and run 'dct init' to recreate it".into(),
            ],
            Self::ProjectFileParse { path, .. } => vec![
                format!("Check that {} is well-formed XML", path.display()),
            ],
            Self::RenderingFailed { path, .. } => vec![
                format!("Check the template syntax in {}", path.display()),
                "Placeholders look like {{ name }} and {{ namespace }}".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::ProjectFileParse { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
