//! `vista resolve`: print the file a reference resolves to.
//!
//! Pure path computation; the file does not have to exist.

use serde_json::json;
use vista_core::domain::locate;

use crate::{
    cli::{OutputFormat, ReferenceArgs},
    commands::{request_context, view_config},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ReferenceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let view = view_config(&config.view, &args.overrides)?;
    let ctx = request_context(&args.request);
    let path = locate(&args.reference, &view, &ctx);

    match output.format() {
        OutputFormat::Json => output.json(&json!({
            "reference": args.reference,
            "path": path.display().to_string(),
            "exists": path.is_file(),
        }))?,
        _ => output.print(&path.display().to_string())?,
    }
    Ok(())
}
