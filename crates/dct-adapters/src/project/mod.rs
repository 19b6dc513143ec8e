//! Project descriptor adapters.

mod msbuild;

pub use msbuild::MsBuildProjectParser;
