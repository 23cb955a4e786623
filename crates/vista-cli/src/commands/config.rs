//! `vista config`: inspect the effective configuration.

use std::path::PathBuf;

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            match (output.format(), value) {
                (OutputFormat::Json, value) => output.json(&value)?,
                (_, Value::String(s)) => output.print(&s)?,
                (_, value) => output.print(&value.to_string())?,
            }
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&to_json(&config)?)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = config_file.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `view.view_suffix`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let mut value = &to_json(config)?;
    for segment in key.split('.') {
        value = value.get(segment).ok_or_else(unknown)?;
    }
    match value {
        Value::Object(_) => Err(unknown()),
        leaf => Ok(leaf.clone()),
    }
}

fn to_json(config: &AppConfig) -> CliResult<Value> {
    serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "view.view_suffix").unwrap(),
            json!("html")
        );
        assert_eq!(get_config_value(&cfg, "view.tpl_cache").unwrap(), json!(true));
    }

    #[test]
    fn unset_option_is_null() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "view.view_base").unwrap(), Value::Null);
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn sections_are_not_values() {
        let cfg = AppConfig::default();
        assert!(get_config_value(&cfg, "view").is_err());
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "output.no_color").unwrap(),
            json!(false)
        );
    }
}
