//! Flags shared by every `vista` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

use crate::logging::Verbosity;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: -v progress, -vv resolved views and engine rebuilds,
    /// -vvv compiled template reuse
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour status lines or logs
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// TOML file with `[view]` and `[output]` sections
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON from resolve, list and config
    #[arg(long, global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// Shape of command results on stdout. Rendered views are always raw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
