//! Template resolution and generation results.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{namespace::InferredNamespace, request::ArtifactKind};

/// Where a template path came from, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// An entry in `dct-config.json`.
    Configured,
    /// `<marker>/templates/<kind>.tera`.
    Convention,
    /// `./templates/<kind>.tera`, used when no marker directory exists.
    Fallback,
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured => write!(f, "config"),
            Self::Convention => write!(f, "convention"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A template path that was checked to exist.
///
/// Only `ScaffoldService` constructs these, after the existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    artifact: ArtifactKind,
    path: PathBuf,
    origin: TemplateOrigin,
}

impl ResolvedTemplate {
    pub(crate) fn new(artifact: ArtifactKind, path: PathBuf, origin: TemplateOrigin) -> Self {
        Self {
            artifact,
            path,
            origin,
        }
    }

    pub fn artifact(&self) -> &ArtifactKind {
        &self.artifact
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> TemplateOrigin {
        self.origin
    }
}

/// The two variables every template can use: `{{ name }}` and `{{ namespace }}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    name: String,
    namespace: String,
}

impl RenderContext {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Variables as `(key, value)` pairs, for renderers that take a map.
    pub fn variables(&self) -> [(&'static str, &str); 2] {
        [("name", self.name.as_str()), ("namespace", self.namespace.as_str())]
    }
}

/// Rendered output ready to be written by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// `<name>.<extension>`.
    pub file_name: String,
    pub namespace: InferredNamespace,
    pub template: ResolvedTemplate,
    pub content: String,
}

/// Outcome of `ScaffoldService::generate`.
///
/// A missing template is an expected result, not an error: the caller
/// reports it and exits non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Rendered(GeneratedArtifact),
    TemplateNotFound {
        artifact: ArtifactKind,
        /// The candidate path that was checked.
        path: PathBuf,
    },
}

impl Generation {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn rendered(self) -> Option<GeneratedArtifact> {
        match self {
            Self::Rendered(artifact) => Some(artifact),
            Self::TemplateNotFound { .. } => None,
        }
    }
}
