//! `vista exists`: check that a reference names a template file.
//!
//! Exit status is the answer: 0 when the file exists, 3 when it does not.

use vista_adapters::LocalFilesystem;
use vista_core::{application::ports::Filesystem, domain::locate};

use crate::{
    cli::ReferenceArgs,
    commands::{request_context, view_config},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ReferenceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let view = view_config(&config.view, &args.overrides)?;
    let ctx = request_context(&args.request);
    let path = locate(&args.reference, &view, &ctx);

    if !LocalFilesystem::new().is_file(&path) {
        return Err(CliError::TemplateMissing {
            reference: args.reference,
            path,
        });
    }

    output.success(&path.display().to_string())?;
    Ok(())
}
