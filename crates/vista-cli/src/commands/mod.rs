//! Command handlers.
//!
//! Each submodule exposes an `execute` function taking its parsed arguments.
//! The helpers below turn shared argument groups into core types.

pub mod completions;
pub mod config;
pub mod display;
pub mod exists;
pub mod list;
pub mod render;
pub mod resolve;

use std::fs;

use serde_json::Value;
use tracing::debug;
use vista_adapters::{JinjaEngineFactory, LocalFilesystem};
use vista_core::{
    application::ViewAdapter,
    domain::{ConfigOptions, RequestContext, TemplateData, ViewConfig},
};

use crate::{
    cli::{DataArgs, OverrideArgs, RequestArgs},
    error::{CliError, CliResult, IntoCli},
};

/// Request identity from `--module`/`--controller`/`--action`.
pub(crate) fn request_context(args: &RequestArgs) -> RequestContext {
    RequestContext::new(&args.module, &args.controller, &args.action)
}

/// Parse repeated `--set key=value` flags.
///
/// Values are read as JSON (`true`, `3`, `"x"`, `null`); anything that is not
/// valid JSON is taken as a plain string.
pub(crate) fn parse_overrides(args: &OverrideArgs) -> CliResult<ConfigOptions> {
    let mut options = ConfigOptions::new();
    for pair in &args.set {
        let (key, raw) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| CliError::InvalidInput {
                message: format!("expected KEY=VALUE, got '{pair}'"),
                source: None,
            })?;
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
        options.insert(key.trim().to_owned(), value);
    }
    Ok(options)
}

/// The loaded view configuration with `--set` overrides applied.
pub(crate) fn view_config(base: &ViewConfig, overrides: &OverrideArgs) -> CliResult<ViewConfig> {
    let mut view = base.clone();
    view.merge(&parse_overrides(overrides)?)
        .map_err(|e| CliError::Core(e.into()))?;
    Ok(view)
}

/// Template variables from `--data-file` overlaid with `--data`.
pub(crate) fn load_data(args: &DataArgs) -> CliResult<TemplateData> {
    let mut data = TemplateData::new();

    if let Some(path) = &args.data_file {
        let text = fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read {}", path.display()))?;
        data.extend(parse_object(&text, &path.display().to_string())?);
    }
    if let Some(inline) = &args.data {
        data.extend(parse_object(inline, "--data")?);
    }

    debug!(keys = data.len(), "Template data loaded");
    Ok(data)
}

fn parse_object(text: &str, origin: &str) -> CliResult<TemplateData> {
    let value = serde_json::from_str::<Value>(text)
        .with_cli_context(|| format!("{origin} is not valid JSON"))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CliError::InvalidInput {
            message: format!("{origin} must be a JSON object, got {other}"),
            source: None,
        }),
    }
}

/// A view adapter over the local filesystem and the MiniJinja engine.
pub(crate) fn build_adapter(view: ViewConfig) -> CliResult<ViewAdapter> {
    Ok(ViewAdapter::with_config(
        Box::new(JinjaEngineFactory::new()),
        Box::new(LocalFilesystem::new()),
        view,
    )?)
}
