//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve the marker directory and project config
//! 2. Resolve and check the template path
//! 3. Infer the namespace
//! 4. Render the template
//!
//! Writing the result is left to the caller. `initialize` is the only
//! operation that writes.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProjectFileParser, TemplateRenderer},
    domain::{
        ArtifactKind, ArtifactRequest, BUILTIN_TEMPLATES, CONFIG_FILE_NAME, DEFAULT_FILE_EXTENSION,
        GeneratedArtifact, Generation, MARKER_DIR_NAME, MARKER_GITIGNORE, RenderContext,
        ResolvedTemplate, ScaffoldConfig, TEMPLATE_EXTENSION, TEMPLATES_DIR_NAME, TemplateOrigin,
        builtin_kinds,
    },
    error::{DctError, DctResult},
};

use super::{ConfigResolver, NamespaceInferrer, ResolvedConfig, absolutize};

/// An artifact type known to the current project, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub origin: TemplateOrigin,
    /// Whether the template file exists.
    pub available: bool,
}

/// What `initialize` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub marker_dir: PathBuf,
    pub created_marker_dir: bool,
    /// `false` when a config file was already present and left alone.
    pub wrote_config: bool,
    pub templates: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    parser: Box<dyn ProjectFileParser>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use dct_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl TemplateRenderer
    ///     parser,     // impl ProjectFileParser
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        parser: Box<dyn ProjectFileParser>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            parser,
        }
    }

    /// Find the marker directory above the working directory and load its
    /// config. Re-done on every call.
    pub fn resolve_config(&self) -> DctResult<ResolvedConfig> {
        let working_dir = self.filesystem.current_dir()?;
        ConfigResolver::new(self.filesystem.as_ref()).resolve(&working_dir)
    }

    /// Template for `kind`, or `None` if the candidate path does not exist.
    pub fn resolve_template_path(
        &self,
        kind: &ArtifactKind,
        resolved: &ResolvedConfig,
    ) -> Option<ResolvedTemplate> {
        let (path, origin) = resolved.template_candidate(kind);
        debug!(
            kind = %kind,
            path = %path.display(),
            origin = %origin,
            "template candidate"
        );

        self.filesystem
            .is_file(&path)
            .then(|| ResolvedTemplate::new(kind.clone(), path, origin))
    }

    /// Render the template for `request`.
    ///
    /// Relative output and project paths are taken relative to the working
    /// directory. Without an explicit project root the nearest directory
    /// above the output holding a project file is used, else the working
    /// directory. A missing template is `Ok(Generation::TemplateNotFound)`.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind(),
            name = %request.name(),
            output = %request.output_dir().display()
        )
    )]
    pub fn generate(&self, request: &ArtifactRequest) -> DctResult<Generation> {
        let resolved = self.resolve_config()?;

        let Some(template) = self.resolve_template_path(request.kind(), &resolved) else {
            let (path, _) = resolved.template_candidate(request.kind());
            info!(path = %path.display(), "template not found");
            return Ok(Generation::TemplateNotFound {
                artifact: request.kind().clone(),
                path,
            });
        };
        info!(
            path = %template.path().display(),
            origin = %template.origin(),
            "template resolved"
        );

        let file_extension = match resolved.config() {
            Some(config) => config.file_extension()?.to_string(),
            None => DEFAULT_FILE_EXTENSION.to_string(),
        };

        let working_dir = resolved.working_dir();
        let output_dir = absolutize(working_dir, request.output_dir());

        let inferrer = NamespaceInferrer::new(self.filesystem.as_ref(), self.parser.as_ref());
        let project_root = match request.project_root() {
            Some(root) => absolutize(working_dir, root),
            None => inferrer
                .find_project_root(&output_dir)?
                .unwrap_or_else(|| working_dir.to_path_buf()),
        };
        debug!(root = %project_root.display(), "project root");

        let namespace = inferrer.infer(&output_dir, &project_root)?;

        let source = self.filesystem.read_to_string(template.path())?;
        let context = RenderContext::new(request.name(), namespace.to_string());
        let content = self.renderer.render(&source, &context, template.path())?;

        Ok(Generation::Rendered(GeneratedArtifact {
            file_name: format!("{}.{file_extension}", request.name()),
            namespace,
            template,
            content,
        }))
    }

    /// Set up `<project_dir>/.dct` with a default config and the built-in
    /// templates.
    ///
    /// Safe to run repeatedly: an existing config is never touched, the
    /// built-in templates and `.gitignore` are rewritten every time.
    #[instrument(skip(self), fields(dir = %project_dir.display()))]
    pub fn initialize(&self, project_dir: &Path) -> DctResult<InitReport> {
        let project_dir = absolutize(&self.filesystem.current_dir()?, project_dir);
        let marker_dir = project_dir.join(MARKER_DIR_NAME);

        let created_marker_dir = !self.filesystem.is_dir(&marker_dir);
        if created_marker_dir {
            self.filesystem.create_dir_all(&marker_dir)?;
            info!(path = %marker_dir.display(), "created marker directory");
        }

        let config_path = marker_dir.join(CONFIG_FILE_NAME);
        let wrote_config = !self.filesystem.exists(&config_path);
        if wrote_config {
            let config = ScaffoldConfig::with_builtin_paths(MARKER_DIR_NAME, &builtin_kinds());
            let json = config.to_json_pretty().map_err(|e| DctError::Internal {
                message: format!("could not serialise default config: {e}"),
            })?;
            self.filesystem.write_file(&config_path, &json)?;
            info!(path = %config_path.display(), "wrote default config");
        } else {
            debug!(path = %config_path.display(), "config exists, leaving it alone");
        }

        let templates_dir = marker_dir.join(TEMPLATES_DIR_NAME);
        self.filesystem.create_dir_all(&templates_dir)?;

        let mut templates = Vec::with_capacity(BUILTIN_TEMPLATES.len());
        for builtin in BUILTIN_TEMPLATES {
            let path = templates_dir.join(format!("{}.{TEMPLATE_EXTENSION}", builtin.kind));
            self.filesystem.write_file(&path, builtin.source)?;
            debug!(path = %path.display(), "wrote built-in template");
            templates.push(path);
        }

        self.filesystem
            .write_file(&marker_dir.join(".gitignore"), MARKER_GITIGNORE)?;

        Ok(InitReport {
            marker_dir,
            created_marker_dir,
            wrote_config,
            templates,
        })
    }

    /// Artifact types known to the current project: config entries plus
    /// `*.tera` files in the templates directory, sorted by kind.
    pub fn list_artifacts(&self) -> DctResult<Vec<ArtifactInfo>> {
        let resolved = self.resolve_config()?;

        let mut kinds = BTreeSet::new();
        if let Some(config) = resolved.config() {
            for key in config.kinds() {
                match ArtifactKind::new(key) {
                    Ok(kind) => {
                        kinds.insert(kind);
                    }
                    Err(e) => debug!(key, error = %e, "skipping config entry"),
                }
            }
        }

        let templates_dir = match resolved.marker_dir() {
            Some(marker) => marker.join(TEMPLATES_DIR_NAME),
            None => resolved.working_dir().join(TEMPLATES_DIR_NAME),
        };
        if self.filesystem.is_dir(&templates_dir) {
            for path in self.filesystem.list_files(&templates_dir)? {
                if !path.extension().is_some_and(|e| e == TEMPLATE_EXTENSION) {
                    continue;
                }
                let Some(stem) = path.file_stem() else {
                    continue;
                };
                match ArtifactKind::new(stem.to_string_lossy()) {
                    Ok(kind) => {
                        kinds.insert(kind);
                    }
                    Err(e) => debug!(path = %path.display(), error = %e, "skipping template"),
                }
            }
        }

        Ok(kinds
            .into_iter()
            .map(|kind| {
                let (path, origin) = resolved.template_candidate(&kind);
                let available = self.filesystem.is_file(&path);
                ArtifactInfo {
                    kind,
                    path,
                    origin,
                    available,
                }
            })
            .collect())
    }
}
