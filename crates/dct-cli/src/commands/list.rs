//! Implementation of the `dct list` command.

use dct_core::application::ArtifactInfo;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::scaffold_service,
    error::CliResult,
    output::{Mark, OutputManager},
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let artifacts = scaffold_service().list_artifacts()?;

    // --json wins over --format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if artifacts.is_empty() {
                output.status(
                    Mark::Warn,
                    "no artifact types found, 'dct init' installs the defaults",
                )?;
                return Ok(());
            }

            output.heading("Artifact types:")?;
            for artifact in &artifacts {
                output.detail(&table_row(artifact))?;
            }
        }

        ListFormat::List => {
            for artifact in &artifacts {
                output.result(artifact.kind.as_str())?;
            }
        }

        // JSON goes to stdout even in quiet mode so pipes always get a
        // parseable document.
        ListFormat::Json => {
            let rows: Vec<_> = artifacts.iter().map(to_json).collect();
            output.json(&serde_json::Value::Array(rows))?;
        }
    }

    Ok(())
}

fn table_row(artifact: &ArtifactInfo) -> String {
    let status = if artifact.available { " " } else { "!" };
    format!(
        "  {status} {:<12} {:<10} {}",
        artifact.kind.as_str(),
        artifact.origin.to_string(),
        artifact.path.display()
    )
}

fn to_json(artifact: &ArtifactInfo) -> serde_json::Value {
    serde_json::json!({
        "kind": artifact.kind.as_str(),
        "template": artifact.path.display().to_string(),
        "origin": artifact.origin.to_string(),
        "available": artifact.available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dct_core::domain::{ArtifactKind, TemplateOrigin};
    use std::path::PathBuf;

    fn info(available: bool) -> ArtifactInfo {
        ArtifactInfo {
            kind: ArtifactKind::new("command").unwrap(),
            path: PathBuf::from("/p/.dct/templates/command.tera"),
            origin: TemplateOrigin::Configured,
            available,
        }
    }

    #[test]
    fn missing_templates_are_flagged() {
        assert!(table_row(&info(false)).trim_start().starts_with('!'));
        assert!(!table_row(&info(true)).contains('!'));
    }

    #[test]
    fn json_row_fields() {
        let v = to_json(&info(true));
        assert_eq!(v["kind"], "command");
        assert_eq!(v["origin"], "config");
        assert_eq!(v["available"], true);
    }
}
