//! MSBuild project files (`*.csproj`).

use std::path::Path;

use dct_core::{
    application::{ApplicationError, ports::ProjectFileParser},
    error::DctResult,
};
use tracing::{debug, instrument};

/// Reads `<RootNamespace>` from a `.csproj`.
///
/// The first `RootNamespace` element at any depth wins, matched by local name
/// so namespaced (old-style) project files work too.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsBuildProjectParser;

impl MsBuildProjectParser {
    pub const EXTENSION: &'static str = "csproj";

    pub fn new() -> Self {
        Self
    }
}

impl ProjectFileParser for MsBuildProjectParser {
    fn extension(&self) -> &'static str {
        Self::EXTENSION
    }

    #[instrument(skip(self, content), fields(path = %path.display()))]
    fn root_namespace(&self, content: &str, path: &Path) -> DctResult<Option<String>> {
        let doc = roxmltree::Document::parse(content).map_err(|e| {
            ApplicationError::ProjectFileParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let value = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "RootNamespace")
            .and_then(|n| n.text())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        debug!(root_namespace = ?value, "read project file");
        Ok(value)
    }
}
