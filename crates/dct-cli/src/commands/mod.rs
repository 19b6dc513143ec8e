//! Command handlers. Each one translates parsed arguments into calls on
//! `ScaffoldService` and formats the result.

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod list;

use dct_adapters::{LocalFilesystem, MsBuildProjectParser, TeraRenderer};
use dct_core::application::ScaffoldService;

/// Service wired to the real filesystem, tera and `.csproj` parsing.
pub fn scaffold_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TeraRenderer::new()),
        Box::new(MsBuildProjectParser::new()),
    )
}
