//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns the file/env plumbing; the core crate only ever sees the
//! resulting [`ViewConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--set key=value`, handled at the call-site, not here)
//! 2. Environment variables: `VISTA_<SECTION>__<KEY>`, e.g.
//!    `VISTA_VIEW__VIEW_SUFFIX=tpl`
//! 3. Config file: `--config <FILE>`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [view]
//! view_path = "resources/views/"
//! view_suffix = "html"
//! tpl_cache = false
//!
//! [output]
//! no_color = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vista_core::domain::ViewConfig;

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "VISTA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Options handed to the view adapter.
    pub view: ViewConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without one, the platform config file is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to seed default configuration")?,
            )
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config
            .view
            .validate()
            .context("Invalid [view] configuration")?;

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `vista.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "vista", "vista")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("vista.toml"))
    }
}
