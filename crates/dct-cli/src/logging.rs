//! Tracing setup for the `dct` binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. `RUST_LOG`, when set, replaces the level chosen by
//! `-v`/`-q`.

use std::fmt::Write as _;
use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::cli::GlobalArgs;

/// Crates whose events follow `-v`/`-q`. Everything else stays at `warn`.
const DCT_TARGETS: [&str; 3] = ["dct", "dct_core", "dct_adapters"];

/// Install the stderr subscriber. Stdout is reserved for results.
pub fn init(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directives(args.log_level()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(args.verbose > 1)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install log subscriber: {e}"))
}

fn directives(level: LevelFilter) -> String {
    DCT_TARGETS
        .iter()
        .fold(String::from("warn"), |mut acc, target| {
            let _ = write!(acc, ",{target}={level}");
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_name_every_dct_crate() {
        let d = directives(LevelFilter::DEBUG).to_lowercase();
        assert!(d.starts_with("warn,"));
        for target in DCT_TARGETS {
            assert!(d.contains(&format!("{target}=debug")), "{d}");
        }
        assert!(EnvFilter::try_new(&d).is_ok());
    }
}
