use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use crate::config::ProjectConfig;
use crate::error::InvocationError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
pub fn run() -> Result<()> {
    init_tracing();

    let args = parse_args();
    let config = ProjectConfig::default();
    let lines = commands::execute(&args.command, &config);
    output::print_lines(lines).context("failed to write command output")?;
    Ok(())
}

/// Parses the process arguments, exiting with the parser's status on
/// help, version or a rejected invocation. The usage/type classification
/// only feeds the `debug` event; the user sees clap's own message.
fn parse_args() -> cli::Args {
    match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if let Some(rejected) = InvocationError::from_clap(&err) {
                tracing::debug!(
                    target: "eyecore_test_app::cli",
                    kind = rejected.kind(),
                    error = %rejected,
                    "invocation rejected"
                );
            }
            err.exit()
        }
    }
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
