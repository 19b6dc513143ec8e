//! CLI errors and how they reach the user.
//!
//! Every failure ends as one [`CliError`]. Its [`Failure`] kind picks the
//! exit code. The message and hints go to stderr, or into a JSON document on
//! stdout with `--json`.

use std::error::Error as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;
use thiserror::Error;

use dct_core::error::{DctError, ErrorCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("no '{artifact}' template at {}", .path.display())]
    TemplateNotFound { artifact: String, path: PathBuf },

    /// The CLI settings file, not the project's `dct-config.json`.
    #[error("CLI settings: {message}")]
    Settings { message: String },

    #[error(transparent)]
    Core(#[from] DctError),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// What kind of failure ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Failure {
    /// No template file for the requested artifact type.
    MissingTemplate,
    /// Bad artifact type, name or argument.
    Usage,
    /// Unreadable settings, `dct-config.json` or project file.
    Config,
    /// Filesystem or rendering failure.
    System,
}

impl Failure {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::MissingTemplate | Self::System => 1,
            Self::Usage => 2,
            Self::Config => 4,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            context: source.to_string(),
            source,
        }
    }
}

impl CliError {
    pub fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }

    pub fn failure(&self) -> Failure {
        match self {
            Self::InvalidInput { .. } => Failure::Usage,
            Self::TemplateNotFound { .. } => Failure::MissingTemplate,
            Self::Settings { .. } => Failure::Config,
            Self::Io { .. } => Failure::System,
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation => Failure::Usage,
                ErrorCategory::Configuration => Failure::Config,
                ErrorCategory::Internal => Failure::System,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.failure().exit_code()
    }

    /// Next steps worth trying.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["see 'dct create --help'".into()],
            Self::TemplateNotFound { artifact, path } => vec![
                format!("add a template at {}", path.display()),
                format!("or map '{artifact}' under \"templatePaths\" in .dct/dct-config.json"),
                "'dct init' installs the command, query and handler templates".into(),
                "'dct list' shows the artifact types this project knows".into(),
            ],
            Self::Settings { .. } => vec![format!(
                "check {} or the DCT__* environment variables",
                crate::config::AppConfig::config_path().display()
            )],
            Self::Core(core) => core.suggestions(),
            Self::Io { .. } => vec!["check that the output directory is writable".into()],
        }
    }

    /// Text for stderr. Causes are listed only when `verbose`.
    pub fn render(&self, color: bool, verbose: bool) -> String {
        let headline = format!("error: {self}");
        let mut lines = vec![if color {
            headline.red().bold().to_string()
        } else {
            headline
        }];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(format!("  caused by: {err}"));
                cause = err.source();
            }
        }

        for hint in self.hints() {
            let label = if color {
                "hint:".yellow().to_string()
            } else {
                "hint:".to_string()
            };
            lines.push(format!("  {label} {hint}"));
        }

        lines.join("\n") + "\n"
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "kind": self.failure(),
            "exit_code": self.exit_code(),
            "hints": self.hints(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dct_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    fn not_found() -> CliError {
        CliError::TemplateNotFound {
            artifact: "event".into(),
            path: PathBuf::from("/p/.dct/templates/event.tera"),
        }
    }

    #[test]
    fn missing_template_names_the_path_and_exits_one() {
        let err = not_found();
        assert!(err.to_string().contains("/p/.dct/templates/event.tera"));
        assert!(err.hints().iter().any(|h| h.contains("dct init")));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn core_categories_map_to_failures() {
        let invalid_kind = CliError::from(DctError::from(DomainError::InvalidArtifactKind {
            value: "".into(),
            reason: "empty".into(),
        }));
        assert_eq!(invalid_kind.failure(), Failure::Usage);
        assert_eq!(invalid_kind.exit_code(), 2);

        let bad_project = CliError::from(DctError::from(ApplicationError::ProjectFileParse {
            path: PathBuf::from("App.csproj"),
            reason: "unexpected end".into(),
        }));
        assert_eq!(bad_project.failure(), Failure::Config);
        assert_eq!(bad_project.exit_code(), 4);
    }

    #[test]
    fn core_hints_pass_through() {
        let err = CliError::from(DctError::from(ApplicationError::ConfigParse {
            path: PathBuf::from(".dct/dct-config.json"),
            reason: "expected value".into(),
        }));
        assert!(err.hints().iter().any(|h| h.contains("templatePaths")));
    }

    #[test]
    fn settings_and_io_exit_codes() {
        let settings = CliError::Settings {
            message: "x".into(),
        };
        assert_eq!(settings.exit_code(), 4);
        let io_err = CliError::io("writing Test.cs")(io::Error::other("disk full"));
        assert_eq!(io_err.failure(), Failure::System);
        assert_eq!(io_err.exit_code(), 1);
    }

    #[test]
    fn render_lists_causes_only_when_verbose() {
        let err = CliError::io("writing Test.cs")(io::Error::other("disk full"));

        let quiet = err.render(false, false);
        assert!(quiet.starts_with("error: writing Test.cs"));
        assert!(quiet.contains("hint:"));
        assert!(!quiet.contains("disk full"));

        assert!(err.render(false, true).contains("caused by: disk full"));
    }

    #[test]
    fn json_uses_kebab_kind() {
        let v = not_found().to_json();
        assert_eq!(v["exit_code"], 1);
        assert_eq!(v["kind"], "missing-template");
    }
}
