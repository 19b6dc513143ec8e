//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate an artifact" or "initialise a project".

pub mod config_resolver;
pub mod namespace_inferrer;
pub mod scaffold_service;

pub use config_resolver::{ConfigResolver, ResolvedConfig};
pub use namespace_inferrer::NamespaceInferrer;
pub use scaffold_service::{ArtifactInfo, InitReport, ScaffoldService};

use std::path::{Path, PathBuf};

use crate::domain::normalize_path;

/// Join a relative `path` onto `base` and resolve `.` and `..` lexically.
/// Absolute paths are only normalised.
pub(crate) fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}
