//! Tracing subscriber for the `vista` binary.
//!
//! Library crates only emit events. Which of them reach stderr depends on
//! `-v`/`-q`, mapped per crate so each step surfaces one more layer of the
//! render pipeline:
//!
//! | Flags  | What shows up                                  |
//! |--------|------------------------------------------------|
//! | `-q`   | errors                                         |
//! | none   | warnings                                       |
//! | `-v`   | CLI progress                                   |
//! | `-vv`  | resolved views, engine rebuilds, cache writes  |
//! | `-vvv` | compiled template reuse                        |
//!
//! `RUST_LOG` replaces the mapping entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CLI: &str = "vista";
const CORE: &str = "vista_core";
const ADAPTERS: &str = "vista_adapters";

/// How much of the pipeline to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Progress,
    Pipeline,
    Cache,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Progress,
            (false, 2) => Self::Pipeline,
            (false, _) => Self::Cache,
        }
    }

    /// `EnvFilter` directives for this level.
    pub fn directives(self) -> String {
        match self {
            Self::Quiet => "error".to_owned(),
            Self::Normal => "warn".to_owned(),
            Self::Progress => format!("warn,{CLI}=info"),
            Self::Pipeline => format!("warn,{CLI}=debug,{CORE}=debug,{ADAPTERS}=debug"),
            Self::Cache => format!("warn,{CLI}=trace,{CORE}=trace,{ADAPTERS}=trace"),
        }
    }

    /// Targets are only worth printing once more than one crate talks.
    fn show_targets(self) -> bool {
        self >= Self::Pipeline
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = args.verbosity();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.directives()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbosity.show_targets())
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}
