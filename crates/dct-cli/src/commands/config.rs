//! `dct config`: show the CLI settings and the project config in effect.

use dct_core::domain::CONFIG_FILE_NAME;

use crate::{
    cli::ConfigCommands,
    commands::scaffold_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{Mark, OutputManager},
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::List => list(&config, &output)?,

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            if output.is_json() {
                output.json(&serde_json::json!({ "path": path.display().to_string() }))?;
            } else {
                output.result(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

fn list(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let resolved = scaffold_service().resolve_config()?;
    let project_config = resolved.config().cloned().unwrap_or_default();

    if output.is_json() {
        let cli = serde_json::to_value(config).map_err(|e| CliError::Settings {
            message: format!("could not serialise config: {e}"),
        })?;
        let project = serde_json::to_value(&project_config).map_err(|e| CliError::Settings {
            message: format!("could not serialise project config: {e}"),
        })?;
        output.json(&serde_json::json!({
            "cli": cli,
            "marker_dir": resolved.marker_dir().map(|p| p.display().to_string()),
            "project": project,
        }))?;
        return Ok(());
    }

    output.heading("CLI configuration:")?;
    let serialised = toml::to_string_pretty(config).map_err(|e| CliError::Settings {
        message: format!("could not serialise config: {e}"),
    })?;
    output.detail(&serialised)?;

    output.heading("Project:")?;
    match resolved.marker_dir() {
        Some(marker) => {
            output.detail(&format!("  marker: {}", marker.display()))?;
            if resolved.config().is_none() {
                output.detail(&format!("  no {CONFIG_FILE_NAME}, using conventions"))?;
            }
            for kind in project_config.kinds() {
                if let Ok(kind) = dct_core::domain::ArtifactKind::new(kind) {
                    let (path, origin) = resolved.template_candidate(&kind);
                    output.detail(&format!(
                        "  {:<12} {} ({origin})",
                        kind.as_str(),
                        path.display()
                    ))?;
                }
            }
        }
        None => {
            output.status(
                Mark::Warn,
                "no .dct directory found, run 'dct init' to create one",
            )?;
        }
    }

    Ok(())
}
