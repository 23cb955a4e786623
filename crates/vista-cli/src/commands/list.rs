//! `vista list`: the named views visible to a request.

use serde_json::json;
use vista_adapters::FileViewFinder;
use vista_core::domain::EngineSettings;

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    commands::{request_context, view_config},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let view = view_config(&config.view, &args.overrides)?;
    let settings = EngineSettings::derive(&view, &request_context(&args.request));
    let finder = FileViewFinder::new(settings.search_roots, settings.suffixes);
    let views = finder.list();

    let format = match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => args.format,
    };

    match format {
        ListFormat::List => {
            for view in &views {
                output.print(&view.name)?;
            }
        }
        ListFormat::Table => {
            let roots = finder
                .roots()
                .iter()
                .map(|r| r.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            output.header(&format!("Views under {roots}:"))?;
            let width = views.iter().map(|v| v.name.len()).max().unwrap_or(0);
            for view in &views {
                output.print(&format!(
                    "  {:<width$}  {}",
                    view.name,
                    view.path.display()
                ))?;
            }
            if views.is_empty() {
                output.info("No views found")?;
            }
        }
        ListFormat::Json => {
            let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
            output.json(&json!(names))?
        }
    }
    Ok(())
}
