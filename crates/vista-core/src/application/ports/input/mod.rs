//! Driving (input) ports - called by the framework's view dispatcher.

use std::io::Write;

use crate::domain::{ConfigOptions, RequestContext, TemplateData};
use crate::error::VistaResult;

/// The view-driver contract a framework dispatches render requests to.
///
/// Implemented by [`crate::application::ViewAdapter`].
pub trait ViewDriver {
    /// Merge `options` into the driver's configuration.
    fn configure(&mut self, options: &ConfigOptions) -> VistaResult<()>;

    /// Whether `reference` names an existing template file.
    fn exists(&self, reference: &str, ctx: &RequestContext) -> bool;

    /// Render the template `reference` points at into `out`.
    fn fetch(
        &mut self,
        reference: &str,
        ctx: &RequestContext,
        data: &TemplateData,
        merge_data: &TemplateData,
        options: &ConfigOptions,
        out: &mut dyn Write,
    ) -> VistaResult<()>;

    /// Render the named view `name` and return the output.
    fn display(
        &mut self,
        name: &str,
        ctx: &RequestContext,
        data: &TemplateData,
        merge_data: &TemplateData,
        options: &ConfigOptions,
    ) -> VistaResult<String>;
}
