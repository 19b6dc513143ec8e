//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dct-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::RenderContext;
use crate::error::DctResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dct_adapters::filesystem::LocalFilesystem` (production)
/// - `dct_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The working directory is part of the port so services never read
///   process-global state directly.
/// - Relative paths are interpreted against [`Filesystem::current_dir`].
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Directory that relative paths and upward searches start from.
    fn current_dir(&self) -> DctResult<PathBuf>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> DctResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> DctResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DctResult<()>;

    /// Regular files directly inside `path` (no recursion), in any order.
    fn list_files(&self, path: &Path) -> DctResult<Vec<PathBuf>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `dct_adapters::renderer::TeraRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` with the variables in `context`.
    ///
    /// `origin` is only used for error messages.
    fn render(&self, source: &str, context: &RenderContext, origin: &Path) -> DctResult<String>;
}

/// Port for reading the project descriptor that seeds the base namespace.
///
/// Implemented by:
/// - `dct_adapters::project::MsBuildProjectParser` (`*.csproj`)
#[cfg_attr(test, mockall::automock)]
pub trait ProjectFileParser: Send + Sync {
    /// File extension (without the dot) that marks a project file.
    fn extension(&self) -> &'static str;

    /// Root namespace declared in the file, if any.
    fn root_namespace(&self, content: &str, path: &Path) -> DctResult<Option<String>>;
}
