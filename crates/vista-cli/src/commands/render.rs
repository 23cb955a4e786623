//! `vista render`: fetch a template reference to stdout.

use std::io::{self, Write};

use tracing::info;
use vista_core::{application::ports::ViewDriver, domain::TemplateData};

use crate::{
    cli::RenderArgs,
    commands::{build_adapter, load_data, parse_overrides, request_context},
    config::AppConfig,
    error::CliResult,
};

/// `--set` flags travel as render options, so they are validated and merged
/// by the adapter itself.
pub fn execute(args: RenderArgs, config: AppConfig) -> CliResult<()> {
    let ctx = request_context(&args.request);
    let data = load_data(&args.data)?;
    let options = parse_overrides(&args.overrides)?;

    let mut adapter = build_adapter(config.view)?;

    let mut stdout = io::stdout().lock();
    adapter.fetch(
        &args.reference,
        &ctx,
        &data,
        &TemplateData::new(),
        &options,
        &mut stdout,
    )?;
    stdout.flush()?;

    info!(reference = %args.reference, "Rendered view");
    Ok(())
}
