//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dct",
    bin_name = "dct",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render command, query and handler stubs into your project",
    long_about = "dct renders source-file stubs from templates, inferring the \
                  namespace from the project file and the target directory.",
    after_help = "EXAMPLES:\n\
        \x20 dct init\n\
        \x20 dct create command Features/Orders/PlaceOrder\n\
        \x20 dct create query GetOrder --dry-run\n\
        \x20 dct list --format json\n\
        \x20 dct completions bash > /usr/share/bash-completion/completions/dct",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a file from an artifact template.
    #[command(
        visible_alias = "c",
        about = "Generate a file from a template",
        after_help = "EXAMPLES:\n\
            \x20 dct create command PlaceOrder\n\
            \x20 dct create handler Features/Orders/PlaceOrder\n\
            \x20 dct create query src/Queries/GetOrder --project-root src"
    )]
    Create(CreateArgs),

    /// Set up the `.dct` directory with default config and templates.
    #[command(
        about = "Initialise dct in a project",
        after_help = "EXAMPLES:\n\
            \x20 dct init             # in the current directory\n\
            \x20 dct init --dir app   # in ./app"
    )]
    Init(InitArgs),

    /// List the artifact types the current project knows about.
    #[command(
        visible_alias = "ls",
        about = "List artifact types and their templates",
        after_help = "EXAMPLES:\n\
            \x20 dct list\n\
            \x20 dct list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dct completions bash > ~/.local/share/bash-completion/completions/dct\n\
            \x20 dct completions zsh  > ~/.zfunc/_dct\n\
            \x20 dct completions fish > ~/.config/fish/completions/dct.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect configuration.
    #[command(
        about = "Show configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dct config path\n\
            \x20 dct config list"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `dct create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Artifact type, e.g. `command`, `query`, `handler`.
    #[arg(value_name = "ARTIFACT", help = "Artifact type (command, query, handler, ...)")]
    pub artifact: String,

    /// Name of the artifact, optionally prefixed with the directory to
    /// create it in. `Features/Orders/PlaceOrder` writes
    /// `Features/Orders/PlaceOrder.cs`.
    #[arg(value_name = "PATH_OR_NAME", help = "Artifact name, optionally with a directory")]
    pub path_or_name: String,

    /// Directory holding the project file. Defaults to the nearest directory
    /// at or above the output directory that contains one.
    #[arg(
        short = 'p',
        long = "project-root",
        value_name = "DIR",
        help = "Project root used for namespace inference"
    )]
    pub project_root: Option<PathBuf>,

    /// Print the rendered text instead of writing the file.
    #[arg(long = "dry-run", help = "Print the output instead of writing it")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dct init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory to create `.dct` in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to initialise"
    )]
    pub dir: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `dct list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One artifact type per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dct completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dct config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the CLI settings and the project config in effect.
    List,
    /// Print the path to the CLI configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["dct", "create", "command", "Features/PlaceOrder"]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.artifact, "command");
        assert_eq!(args.path_or_name, "Features/PlaceOrder");
        assert!(args.project_root.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn create_alias_and_flags() {
        let cli = Cli::parse_from([
            "dct",
            "c",
            "query",
            "GetOrder",
            "--project-root",
            "src",
            "--dry-run",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.project_root, Some(PathBuf::from("src")));
        assert!(args.dry_run);
    }

    #[test]
    fn create_requires_both_arguments() {
        assert!(Cli::try_parse_from(["dct", "create", "command"]).is_err());
    }

    #[test]
    fn init_defaults_to_current_dir() {
        let cli = Cli::parse_from(["dct", "init"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.dir, PathBuf::from("."));
    }

    #[test]
    fn list_format_parses() {
        let cli = Cli::parse_from(["dct", "ls", "--format", "json"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["dct", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
