use clap::{Parser, Subcommand};

use crate::config::{PROJECT_DESCRIPTION, PROJECT_NAME};

/// Command-line arguments for the eyecore-test-app CLI.
#[derive(Debug, Parser)]
#[command(
    name = PROJECT_NAME,
    version,
    propagate_version = true,
    about = PROJECT_DESCRIPTION,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Commands understood by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Say hello
    Hello,

    /// Greet someone by name
    Greet {
        /// Name of the person to greet.
        name: String,
    },

    /// Repeat a message N times
    Repeat {
        /// Message to print on every line.
        message: String,

        /// Number of times to repeat
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Greet { .. } => "greet",
            Command::Repeat { .. } => "repeat",
        }
    }
}
