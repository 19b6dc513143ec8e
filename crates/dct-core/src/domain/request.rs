//! Generation requests.
//!
//! [`ArtifactKind`] is the lookup key that ties a request to a template;
//! [`ArtifactRequest`] bundles everything `generate` needs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A named category of generated stub, e.g. `command` or `handler`.
///
/// Always stored lowercased so lookups against config keys and conventional
/// template file names are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKind(String);

impl ArtifactKind {
    /// Parse and normalise a user-supplied artifact type.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidArtifactKind {
                value: raw.into(),
                reason: "artifact type cannot be empty".into(),
            });
        }
        if trimmed.contains(['/', '\\']) {
            return Err(DomainError::InvalidArtifactKind {
                value: raw.into(),
                reason: "artifact type cannot contain path separators".into(),
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidArtifactKind {
                value: raw.into(),
                reason: "artifact type cannot contain whitespace".into(),
            });
        }
        if trimmed.starts_with('.') {
            return Err(DomainError::InvalidArtifactKind {
                value: raw.into(),
                reason: "artifact type cannot start with '.'".into(),
            });
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable input to `ScaffoldService::generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    kind: ArtifactKind,
    name: String,
    output_dir: PathBuf,
    project_root: Option<PathBuf>,
}

impl ArtifactRequest {
    /// Build a request. `name` is used verbatim in the rendered output, so it
    /// is only checked for emptiness and path separators.
    ///
    /// Without [`with_project_root`](Self::with_project_root) the project
    /// root is the nearest directory above `output_dir` holding a project
    /// file.
    pub fn new(
        kind: ArtifactKind,
        name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidArtifactName {
                value: name,
                reason: "name cannot be empty".into(),
            });
        }
        if name.contains(['/', '\\']) {
            return Err(DomainError::InvalidArtifactName {
                value: name,
                reason: "name cannot contain path separators".into(),
            });
        }

        Ok(Self {
            kind,
            name,
            output_dir: output_dir.into(),
            project_root: None,
        })
    }

    /// Pin the project root instead of searching for it.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn kind(&self) -> &ArtifactKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }
}
