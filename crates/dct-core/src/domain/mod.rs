//! Core domain layer for dct.
//!
//! This module contains pure logic with no I/O: artifact requests, the
//! project config model, namespace arithmetic, and template resolution
//! results. Filesystem access and rendering are reached through the ports in
//! [`crate::application::ports`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
pub mod config;
pub mod defaults;
pub mod error;
pub mod namespace;
pub mod request;
pub mod template;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_FILE_EXTENSION, MARKER_DIR_NAME, MAX_ASCENT, ScaffoldConfig,
    TEMPLATE_EXTENSION, TEMPLATES_DIR_NAME, conventional_template_path, fallback_template_path,
};
pub use defaults::{BUILTIN_TEMPLATES, BuiltinTemplate, MARKER_GITIGNORE, builtin_kinds};
pub use error::{DomainError, ErrorCategory};
pub use namespace::{
    DEFAULT_NAMESPACE, InferredNamespace, infer_namespace, normalize_path, relative_path,
};
pub use request::{ArtifactKind, ArtifactRequest};
pub use template::{
    GeneratedArtifact, Generation, RenderContext, ResolvedTemplate, TemplateOrigin,
};
