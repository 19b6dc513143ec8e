//! Infrastructure adapters for dct.
//!
//! This crate implements the ports defined in `dct-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod project;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project::MsBuildProjectParser;
pub use renderer::TeraRenderer;
