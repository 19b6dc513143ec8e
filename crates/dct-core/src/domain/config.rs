//! Project-level scaffold configuration (`.dct/dct-config.json`).
//!
//! ```json
//! {
//!     "templatePaths": {
//!         "command": "./.dct/templates/command.tera"
//!     },
//!     "fileExtension": "cs"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, request::ArtifactKind};

/// Name of the marker directory that identifies a project root.
pub const MARKER_DIR_NAME: &str = ".dct";

/// Config file inside the marker directory.
pub const CONFIG_FILE_NAME: &str = "dct-config.json";

/// Templates subdirectory inside the marker directory.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Extension of template files.
pub const TEMPLATE_EXTENSION: &str = "tera";

/// Extension of generated files unless the config overrides it.
pub const DEFAULT_FILE_EXTENSION: &str = "cs";

/// Maximum number of directories examined when walking upward.
pub const MAX_ASCENT: usize = 10;

/// Mapping from artifact type to template path, plus output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldConfig {
    #[serde(default)]
    template_paths: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_extension: Option<String>,
}

impl ScaffoldConfig {
    /// Parse config JSON. Keys are lowercased so lookups match
    /// [`ArtifactKind`] normalisation.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(Self {
            template_paths: parsed
                .template_paths
                .into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v))
                .collect(),
            file_extension: parsed.file_extension,
        })
    }

    /// Default config written by `initialize`, pointing at the built-in
    /// templates under `marker_dir_name`.
    pub fn with_builtin_paths(marker_dir_name: &str, kinds: &[&str]) -> Self {
        let template_paths = kinds
            .iter()
            .map(|kind| {
                (
                    kind.to_string(),
                    format!("./{marker_dir_name}/{TEMPLATES_DIR_NAME}/{kind}.{TEMPLATE_EXTENSION}"),
                )
            })
            .collect();

        Self {
            template_paths,
            file_extension: None,
        }
    }

    pub fn insert(&mut self, kind: &ArtifactKind, path: impl Into<String>) {
        self.template_paths
            .insert(kind.as_str().to_string(), path.into());
    }

    /// Configured template path for `kind`, if any.
    pub fn template_path(&self, kind: &ArtifactKind) -> Option<&str> {
        self.template_paths.get(kind.as_str()).map(String::as_str)
    }

    /// Configured artifact types in key order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.template_paths.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.template_paths.is_empty()
    }

    /// Extension for generated files, without the leading dot.
    pub fn file_extension(&self) -> Result<&str, DomainError> {
        let Some(ext) = self.file_extension.as_deref() else {
            return Ok(DEFAULT_FILE_EXTENSION);
        };

        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(DomainError::InvalidFileExtension {
                value: ext.into(),
                reason: "expected a bare extension such as \"cs\"".into(),
            });
        }
        Ok(ext)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Conventional template location inside a marker directory:
/// `<marker>/templates/<kind>.tera`.
pub fn conventional_template_path(marker_dir: &Path, kind: &ArtifactKind) -> PathBuf {
    marker_dir
        .join(TEMPLATES_DIR_NAME)
        .join(format!("{}.{TEMPLATE_EXTENSION}", kind.as_str()))
}

/// Location used when no marker directory exists: `templates/<kind>.tera`,
/// relative to the working directory.
pub fn fallback_template_path(kind: &ArtifactKind) -> PathBuf {
    Path::new(TEMPLATES_DIR_NAME).join(format!("{}.{TEMPLATE_EXTENSION}", kind.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(s: &str) -> ArtifactKind {
        ArtifactKind::new(s).unwrap()
    }

    #[test]
    fn parses_template_paths() {
        let cfg = ScaffoldConfig::from_json(
            r#"{ "templatePaths": { "command": "./t/command.tera" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.template_path(&kind("command")), Some("./t/command.tera"));
        assert_eq!(cfg.template_path(&kind("query")), None);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let cfg =
            ScaffoldConfig::from_json(r#"{ "templatePaths": { "Command": "a.tera" } }"#).unwrap();
        assert_eq!(cfg.template_path(&kind("COMMAND")), Some("a.tera"));
    }

    #[test]
    fn missing_section_is_empty() {
        let cfg = ScaffoldConfig::from_json("{}").unwrap();
        assert!(cfg.is_empty());
        assert_eq!(cfg.file_extension().unwrap(), "cs");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ScaffoldConfig::from_json("{ \"templatePaths\": ").is_err());
        assert!(ScaffoldConfig::from_json(r#"{ "templatePaths": [] }"#).is_err());
    }

    #[test]
    fn file_extension_override() {
        let cfg = ScaffoldConfig::from_json(r#"{ "fileExtension": "fs" }"#).unwrap();
        assert_eq!(cfg.file_extension().unwrap(), "fs");

        let bad = ScaffoldConfig::from_json(r#"{ "fileExtension": ".cs" }"#).unwrap();
        assert!(bad.file_extension().is_err());
    }

    #[test]
    fn builtin_paths_point_into_marker_dir() {
        let cfg = ScaffoldConfig::with_builtin_paths(".dct", &["command", "query"]);
        assert_eq!(
            cfg.template_path(&kind("query")),
            Some("./.dct/templates/query.tera")
        );
        let json = cfg.to_json_pretty().unwrap();
        assert!(json.contains("\"templatePaths\""));
        assert!(!json.contains("fileExtension"));
    }

    #[test]
    fn conventional_and_fallback_paths() {
        assert_eq!(
            conventional_template_path(Path::new("/p/.dct"), &kind("handler")),
            PathBuf::from("/p/.dct/templates/handler.tera")
        );
        assert_eq!(
            fallback_template_path(&kind("handler")),
            PathBuf::from("templates/handler.tera")
        );
    }
}
