//! `dct init`: create `.dct` with a default config and the built-in
//! templates.

use tracing::instrument;

use crate::{
    cli::InitArgs,
    commands::scaffold_service,
    error::CliResult,
    output::{Mark, OutputManager},
};

/// Initialise dct in `args.dir`. Safe to re-run; an existing
/// `dct-config.json` is left untouched.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let report = scaffold_service().initialize(&args.dir)?;

    if output.is_json() {
        output.json(&serde_json::json!({
            "marker_dir": report.marker_dir.display().to_string(),
            "created_marker_dir": report.created_marker_dir,
            "wrote_config": report.wrote_config,
            "templates": report
                .templates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    if report.created_marker_dir {
        output.status(Mark::Done, &format!("Created {}", report.marker_dir.display()))?;
    } else {
        output.status(
            Mark::Note,
            &format!("Using existing {}", report.marker_dir.display()),
        )?;
    }

    if report.wrote_config {
        output.status(Mark::Done, "Wrote default dct-config.json")?;
    } else {
        output.status(Mark::Note, "Kept existing dct-config.json")?;
    }

    for template in &report.templates {
        output.detail(&format!("  {}", template.display()))?;
    }
    output.status(Mark::Done, &format!(
        "Installed {} built-in templates",
        report.templates.len()
    ))?;

    Ok(())
}
