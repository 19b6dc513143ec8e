//! Config Resolver - locates the `.dct` marker directory and loads its config.
//!
//! Nothing is cached: every call walks the directory tree again so changes
//! between invocations (or a different working directory) are picked up.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ArtifactKind, CONFIG_FILE_NAME, MARKER_DIR_NAME, MAX_ASCENT, ScaffoldConfig,
        TemplateOrigin, conventional_template_path, fallback_template_path, normalize_path,
    },
    error::DctResult,
};

use super::absolutize;

/// Result of looking for the marker directory and its config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    working_dir: PathBuf,
    marker_dir: Option<PathBuf>,
    config: Option<ScaffoldConfig>,
}

impl ResolvedConfig {
    pub fn new(
        working_dir: PathBuf,
        marker_dir: Option<PathBuf>,
        config: Option<ScaffoldConfig>,
    ) -> Self {
        Self {
            working_dir,
            marker_dir,
            config,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn marker_dir(&self) -> Option<&Path> {
        self.marker_dir.as_deref()
    }

    pub fn config(&self) -> Option<&ScaffoldConfig> {
        self.config.as_ref()
    }

    /// Directory that relative config paths are resolved against: the one
    /// holding the marker directory, or the working directory without one.
    pub fn project_dir(&self) -> &Path {
        self.marker_dir
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.working_dir)
    }

    /// Candidate template path for `kind`, before any existence check.
    ///
    /// 1. config entry
    /// 2. `<marker>/templates/<kind>.tera`
    /// 3. `<working dir>/templates/<kind>.tera` when there is no marker
    pub fn template_candidate(&self, kind: &ArtifactKind) -> (PathBuf, TemplateOrigin) {
        if let Some(configured) = self.config.as_ref().and_then(|c| c.template_path(kind)) {
            return (
                absolutize(self.project_dir(), Path::new(configured)),
                TemplateOrigin::Configured,
            );
        }

        match &self.marker_dir {
            Some(marker) => (
                conventional_template_path(marker, kind),
                TemplateOrigin::Convention,
            ),
            None => (
                self.working_dir.join(fallback_template_path(kind)),
                TemplateOrigin::Fallback,
            ),
        }
    }
}

/// Finds the marker directory and reads `dct-config.json`.
pub struct ConfigResolver<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Walk upward from `start` looking for a `.dct` directory.
    ///
    /// At most [`MAX_ASCENT`] directories are examined, `start` included.
    /// Relative starts are taken relative to the working directory, and `..`
    /// is resolved before walking so only real ancestors are examined.
    #[instrument(skip(self), fields(start = %start.display()))]
    pub fn find_marker_directory(&self, start: &Path) -> DctResult<Option<PathBuf>> {
        let start = if start.is_absolute() {
            normalize_path(start)
        } else {
            absolutize(&self.filesystem.current_dir()?, start)
        };

        let mut current = Some(start.as_path());
        let mut depth = 0;

        while let Some(dir) = current {
            if depth >= MAX_ASCENT {
                break;
            }

            let candidate = dir.join(MARKER_DIR_NAME);
            trace!(depth, dir = %dir.display(), "checking for marker directory");
            if self.filesystem.is_dir(&candidate) {
                debug!(marker = %candidate.display(), depth, "found marker directory");
                return Ok(Some(candidate));
            }

            current = dir.parent();
            depth += 1;
        }

        debug!(levels = depth, "no marker directory found");
        Ok(None)
    }

    /// Read `<marker>/dct-config.json`.
    ///
    /// A missing file is `Ok(None)`; a malformed one is an error.
    pub fn load_config(&self, marker_dir: &Path) -> DctResult<Option<ScaffoldConfig>> {
        let path = marker_dir.join(CONFIG_FILE_NAME);
        if !self.filesystem.is_file(&path) {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let raw = self.filesystem.read_to_string(&path)?;
        let config = ScaffoldConfig::from_json(&raw).map_err(|e| ApplicationError::ConfigParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        debug!(
            path = %path.display(),
            entries = config.kinds().count(),
            "loaded config"
        );
        Ok(Some(config))
    }

    /// Find the marker starting at `start` and load its config if present.
    pub fn resolve(&self, start: &Path) -> DctResult<ResolvedConfig> {
        let working_dir = self.filesystem.current_dir()?;
        let marker_dir = self.find_marker_directory(start)?;

        let config = match &marker_dir {
            Some(marker) => self.load_config(marker)?,
            None => None,
        };

        Ok(ResolvedConfig::new(working_dir, marker_dir, config))
    }
}
