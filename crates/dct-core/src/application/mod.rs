//! Application layer for dct.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ConfigResolver, NamespaceInferrer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Path arithmetic and config rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactInfo, // DTO for `dct list`
    ConfigResolver,
    InitReport,
    NamespaceInferrer,
    ResolvedConfig,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProjectFileParser, TemplateRenderer};

pub use error::ApplicationError;
