//! MiniJinja-backed render engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, ErrorKind, Value};
use tracing::instrument;
use vista_core::{
    application::{
        ApplicationError,
        ports::{EngineFactory, RenderEngine},
    },
    domain::{EngineSettings, TemplateData, has_extension},
    error::VistaResult,
};

use crate::{compiler::TemplateCompiler, finder::FileViewFinder};

/// Renders compiled view templates with MiniJinja.
///
/// Templates pulled in with `{% include %}` / `{% extends %}` go through the
/// same compiler. Names are located by the finder first; a name with an
/// extension that no view matches is read as a file path.
/// Output is HTML-escaped unless a raw tag marked it safe.
pub struct JinjaEngine {
    compiler: Arc<TemplateCompiler>,
    finder: Arc<FileViewFinder>,
}

impl JinjaEngine {
    pub fn new(compiler: TemplateCompiler, finder: FileViewFinder) -> Self {
        Self {
            compiler: Arc::new(compiler),
            finder: Arc::new(finder),
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            TemplateCompiler::from_settings(settings),
            FileViewFinder::new(settings.search_roots.clone(), settings.suffixes.clone()),
        )
    }

    pub fn finder(&self) -> &FileViewFinder {
        &self.finder
    }

    fn environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        let compiler = Arc::clone(&self.compiler);
        let finder = Arc::clone(&self.finder);
        env.set_loader(move |name| {
            let path = match finder.find(name) {
                Ok(path) => path,
                Err(_) if has_extension(name) && Path::new(name).is_file() => PathBuf::from(name),
                Err(_) => return Ok(None),
            };
            compiler
                .load(&path)
                .map(Some)
                .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
        });

        env
    }
}

impl RenderEngine for JinjaEngine {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn render_file(
        &self,
        path: &Path,
        data: &TemplateData,
        merge_data: &TemplateData,
    ) -> VistaResult<String> {
        let compiled = self.compiler.load(path)?;
        let name = path.to_string_lossy().into_owned();

        let mut env = self.environment();
        env.add_template_owned(name.clone(), compiled)
            .map_err(render_error)?;
        let template = env.get_template(&name).map_err(render_error)?;

        template
            .render(Value::from_serialize(gather(data, merge_data)))
            .map_err(render_error)
    }

    fn render_named(
        &self,
        name: &str,
        data: &TemplateData,
        merge_data: &TemplateData,
    ) -> VistaResult<String> {
        let path = self.finder.find(name)?;
        self.render_file(&path, data, merge_data)
    }
}

/// Builds a [`JinjaEngine`] per distinct [`EngineSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JinjaEngineFactory;

impl JinjaEngineFactory {
    pub fn new() -> Self {
        Self
    }
}

impl EngineFactory for JinjaEngineFactory {
    fn build(&self, settings: &EngineSettings) -> VistaResult<Box<dyn RenderEngine>> {
        Ok(Box::new(JinjaEngine::from_settings(settings)))
    }
}

/// `merge_data` overlaid with `data`.
fn gather(data: &TemplateData, merge_data: &TemplateData) -> TemplateData {
    let mut context = merge_data.clone();
    context.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
    context
}

fn render_error(e: minijinja::Error) -> vista_core::error::VistaError {
    ApplicationError::RenderingFailed {
        reason: format!("{e:#}"),
    }
    .into()
}
