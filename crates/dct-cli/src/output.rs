//! Everything commands print goes through [`OutputManager`].
//!
//! In text mode there are two kinds of stdout line: status lines, which
//! `--quiet` drops, and results such as a generated path, which are always
//! printed. With `--json` a command prints one JSON document instead.

use std::io::{self, IsTerminal as _};

use console::Term;
use owo_colors::OwoColorize;

use crate::{cli::GlobalArgs, config::AppConfig};

/// Leading mark of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Done,
    Note,
    Warn,
}

impl Mark {
    fn symbol(self) -> &'static str {
        match self {
            Self::Done => "\u{2713}",
            Self::Note => "\u{2139}",
            Self::Warn => "\u{26a0}",
        }
    }

    fn painted(self) -> String {
        let symbol = self.symbol();
        match self {
            Self::Done => symbol.green().bold().to_string(),
            Self::Note => symbol.blue().bold().to_string(),
            Self::Warn => symbol.yellow().bold().to_string(),
        }
    }
}

pub struct OutputManager {
    json: bool,
    quiet: bool,
    color: bool,
    stdout: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let json = args.json || config.output.json;
        Self {
            json,
            quiet: args.quiet,
            color: wants_color(args, config, json) && io::stdout().is_terminal(),
            stdout: Term::stdout(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// A line the caller asked for, printed even with `--quiet`.
    pub fn result(&self, line: &str) -> io::Result<()> {
        self.stdout.write_line(line)
    }

    /// Pretty-printed JSON document, printed even with `--quiet`.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.stdout.write_line(&text)
    }

    pub fn status(&self, mark: Mark, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let symbol = if self.color {
            mark.painted()
        } else {
            mark.symbol().to_string()
        };
        self.stdout.write_line(&format!("{symbol} {msg}"))
    }

    /// Unmarked line under a status line or heading.
    pub fn detail(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(line)
    }

    pub fn heading(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.stdout.write_line(&text.bold().to_string())
        } else {
            self.stdout.write_line(text)
        }
    }
}

/// Colour unless JSON was asked for or a flag, `NO_COLOR` or the settings
/// file turned it off. The terminal check happens in [`OutputManager::new`].
fn wants_color(args: &GlobalArgs, config: &AppConfig, json: bool) -> bool {
    !(json || args.no_color || config.output.no_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_comes_from_flag_or_settings() {
        let mut config = AppConfig::default();
        assert!(!OutputManager::new(&GlobalArgs::default(), &config).is_json());

        let flag = GlobalArgs {
            json: true,
            ..GlobalArgs::default()
        };
        assert!(OutputManager::new(&flag, &config).is_json());

        config.output.json = true;
        assert!(OutputManager::new(&GlobalArgs::default(), &config).is_json());
    }

    #[test]
    fn colour_is_off_for_json_and_no_color() {
        let config = AppConfig::default();
        assert!(wants_color(&GlobalArgs::default(), &config, false));
        assert!(!wants_color(&GlobalArgs::default(), &config, true));

        let no_color = GlobalArgs {
            no_color: true,
            ..GlobalArgs::default()
        };
        assert!(!wants_color(&no_color, &config, false));

        let mut muted = AppConfig::default();
        muted.output.no_color = true;
        assert!(!wants_color(&GlobalArgs::default(), &muted, false));
    }

    #[test]
    fn quiet_drops_status_but_not_results() {
        let quiet = GlobalArgs {
            quiet: true,
            ..GlobalArgs::default()
        };
        let out = OutputManager::new(&quiet, &AppConfig::default());
        assert!(out.status(Mark::Done, "created").is_ok());
        assert!(out.result("/p/Test.cs").is_ok());
    }

    #[test]
    fn plain_marks_have_no_escape_codes() {
        assert!(!Mark::Warn.symbol().contains('\u{1b}'));
        assert!(Mark::Warn.painted().contains(Mark::Warn.symbol()));
    }
}
