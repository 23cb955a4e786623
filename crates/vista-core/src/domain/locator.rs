//! Convention-based template path resolution.
//!
//! [`resolve_path`] maps a template reference to a file path using only the
//! configuration and the request identity it is given. It never touches the
//! filesystem, so identical inputs always produce identical paths.

use std::path::PathBuf;

use crate::domain::{
    config::ViewConfig,
    reference::{TemplateReference, has_extension},
    request::RequestContext,
};

/// File a reference names. A reference with an extension is a path already;
/// anything else goes through [`resolve_path`].
pub fn locate(reference: &str, config: &ViewConfig, ctx: &RequestContext) -> PathBuf {
    if has_extension(reference) {
        PathBuf::from(reference)
    } else {
        resolve_path(reference, config, ctx)
    }
}

/// Resolve `reference` to the template file it names.
///
/// ```
/// use vista_core::domain::{RequestContext, ViewConfig, resolve_path};
///
/// let mut config = ViewConfig::default();
/// config.view_path = Some("/app/view/".into());
/// let ctx = RequestContext::new("index", "Index", "index");
///
/// assert_eq!(
///     resolve_path("", &config, &ctx),
///     std::path::PathBuf::from("/app/view/index/index.html"),
/// );
/// ```
pub fn resolve_path(reference: &str, config: &ViewConfig, ctx: &RequestContext) -> PathBuf {
    let reference = TemplateReference::parse(reference);
    let base = base_dir(config, reference.module, ctx);
    let depr = config.view_depr.as_str();

    let template = if reference.is_absolute() {
        replace_separators(&reference.template[1..], depr)
    } else {
        let template = replace_separators(reference.template, depr);
        let controller = ctx.controller_path(depr);
        if controller.is_empty() {
            template
        } else if template.is_empty() {
            format!("{controller}{depr}{}", ctx.action)
        } else if !template.contains(depr) {
            format!("{controller}{depr}{template}")
        } else {
            template
        }
    };

    PathBuf::from(format!(
        "{base}{}.{}",
        template.trim_start_matches('/'),
        config.suffix()
    ))
}

/// Directory a reference is resolved against.
///
/// With a `view_base` the module (explicit, else the request's) becomes a
/// subdirectory of it. Without one, an explicit module points at that
/// module's own view directory and everything else uses the request
/// module's view path.
pub fn base_dir(config: &ViewConfig, module: Option<&str>, ctx: &RequestContext) -> String {
    if let Some(view_base) = config.view_base() {
        let module = module.unwrap_or(&ctx.module);
        if module.is_empty() {
            view_base.to_owned()
        } else {
            format!("{view_base}{module}/")
        }
    } else {
        match module {
            Some(module) => config.module_view_path(module),
            None => config.view_path_for(&ctx.module),
        }
    }
}

fn replace_separators(template: &str, depr: &str) -> String {
    template.replace(['/', ':'], depr)
}
