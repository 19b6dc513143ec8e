//! Implementation of the `dct create` command.
//!
//! Responsibility: split the path argument, call the core scaffold service,
//! write the rendered file and report it. No business logic lives here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use dct_core::{
    domain::{ArtifactKind, ArtifactRequest, GeneratedArtifact, Generation},
    error::DctError,
};

use crate::{
    cli::CreateArgs,
    commands::scaffold_service,
    error::{CliError, CliResult},
    output::{Mark, OutputManager},
};

/// Execute the `dct create` command.
///
/// 1. Split `PATH_OR_NAME` into output directory and name
/// 2. Render via `ScaffoldService::generate`
/// 3. Create the output directory and write `<name>.<ext>`
/// 4. Print the absolute path of the new file
#[instrument(skip_all, fields(artifact = %args.artifact, target = %args.path_or_name))]
pub fn execute(args: CreateArgs, output: OutputManager) -> CliResult<()> {
    let (name, output_dir) = split_target(&args.path_or_name)?;
    let kind = ArtifactKind::new(&args.artifact).map_err(DctError::from)?;
    let mut request = ArtifactRequest::new(kind, name, &output_dir).map_err(DctError::from)?;
    if let Some(root) = args.project_root {
        request = request.with_project_root(root);
    }

    let artifact = match scaffold_service().generate(&request)? {
        Generation::Rendered(artifact) => artifact,
        Generation::TemplateNotFound { artifact, path } => {
            return Err(CliError::TemplateNotFound {
                artifact: artifact.to_string(),
                path,
            });
        }
    };
    debug!(
        namespace = %artifact.namespace,
        template = %artifact.template.path().display(),
        "artifact rendered"
    );

    if args.dry_run {
        return print_dry_run(&artifact, &output_dir, &output);
    }

    let path = write_artifact(&artifact, &output_dir)?;
    info!(path = %path.display(), "artifact written");

    if output.is_json() {
        output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "namespace": artifact.namespace.to_string(),
            "template": artifact.template.path().display().to_string(),
            "origin": artifact.template.origin().to_string(),
        }))?;
    } else {
        output.result(&path.display().to_string())?;
    }

    Ok(())
}

/// `Features/Orders/PlaceOrder` → (`PlaceOrder`, `Features/Orders`).
/// A bare name goes into the current directory.
pub fn split_target(path_or_name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(path_or_name);

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("'{path_or_name}' does not end in an artifact name"),
        })?;

    let output_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((name.to_string(), output_dir))
}

/// Write the artifact into `output_dir`, creating it if needed, and return
/// the absolute path of the new file.
fn write_artifact(artifact: &GeneratedArtifact, output_dir: &Path) -> CliResult<PathBuf> {
    if output_dir != Path::new(".") {
        fs::create_dir_all(output_dir).map_err(CliError::io(format!(
            "could not create {}",
            output_dir.display()
        )))?;
    }

    let path = output_dir.join(&artifact.file_name);
    if path.exists() {
        warn!(path = %path.display(), "overwriting existing file");
    }

    fs::write(&path, &artifact.content)
        .map_err(CliError::io(format!("could not write {}", path.display())))?;

    std::path::absolute(&path).map_err(CliError::io(format!(
        "could not resolve {}",
        path.display()
    )))
}

fn print_dry_run(
    artifact: &GeneratedArtifact,
    output_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let path = output_dir.join(&artifact.file_name);

    if output.is_json() {
        output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "namespace": artifact.namespace.to_string(),
            "template": artifact.template.path().display().to_string(),
            "origin": artifact.template.origin().to_string(),
            "content": artifact.content,
        }))?;
        return Ok(());
    }

    output.status(Mark::Note, &format!("Dry run: would write {}", path.display()))?;
    output.detail(&format!("  namespace: {}", artifact.namespace))?;
    output.detail(&format!(
        "  template:  {} ({})",
        artifact.template.path().display(),
        artifact.template.origin()
    ))?;
    output.result(&artifact.content)?;
    Ok(())
}
