use std::path::PathBuf;

use clap::Parser;

/// Default output path for the generated module.
pub const DEFAULT_OUT: &str = "pocketbase-types.ts";

/// Generate TypeScript types from a PocketBase schema export.
#[derive(Debug, Parser)]
#[command(name = "pbtypegen", version, about)]
pub struct Cli {
    /// Path to a JSON schema export (array of collections)
    #[arg(short, long, env = "PBTYPEGEN_JSON")]
    pub json: PathBuf,

    /// Path to write the generated TypeScript module to
    #[arg(short, long, default_value = DEFAULT_OUT)]
    pub out: PathBuf,

    /// Print the generated module to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log level when `PBTYPEGEN_LOG` is not set.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
