//! `vista display`: render a named view located by the finder.

use vista_core::{application::ports::ViewDriver, domain::TemplateData};

use crate::{
    cli::DisplayArgs,
    commands::{build_adapter, load_data, parse_overrides, request_context},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: DisplayArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = request_context(&args.request);
    let data = load_data(&args.data)?;
    let options = parse_overrides(&args.overrides)?;

    let mut adapter = build_adapter(config.view)?;
    let rendered = adapter.display(&args.name, &ctx, &data, &TemplateData::new(), &options)?;

    output.raw(&rendered)?;
    Ok(())
}
