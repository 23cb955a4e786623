//! View Adapter - the view driver a framework dispatches to.
//!
//! This service binds a template engine into a view layer:
//! 1. Merge configuration patches (validated by the domain layer)
//! 2. Resolve template references to file paths
//! 3. Build an engine for the effective settings, once per distinct settings
//! 4. Delegate rendering to the engine
//!
//! It implements the driving port ([`ViewDriver`]) and uses driven ports
//! ([`EngineFactory`], [`RenderEngine`], [`Filesystem`]).

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{EngineFactory, Filesystem, RenderEngine, ViewDriver},
    },
    domain::{
        ConfigOptions, EngineSettings, RequestContext, TemplateData, ViewConfig, locate,
        resolve_path,
    },
    error::VistaResult,
};

/// The view driver.
///
/// Holds the configuration, the data shared with every render, and the
/// engine built for the most recently used settings.
pub struct ViewAdapter {
    config: ViewConfig,
    factory: Box<dyn EngineFactory>,
    filesystem: Box<dyn Filesystem>,
    shared: TemplateData,
    engine: Option<(EngineSettings, Box<dyn RenderEngine>)>,
}

impl ViewAdapter {
    /// Create an adapter from defaults overlaid with `options`.
    ///
    /// The cache directory is created if it does not exist yet.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use vista_core::application::{ViewAdapter, ports::*};
    ///
    /// let adapter = ViewAdapter::new(
    ///     factory,    // impl EngineFactory
    ///     filesystem, // impl Filesystem
    ///     &options,
    /// )?;
    /// ```
    pub fn new(
        factory: Box<dyn EngineFactory>,
        filesystem: Box<dyn Filesystem>,
        options: &ConfigOptions,
    ) -> VistaResult<Self> {
        Self::with_config(factory, filesystem, ViewConfig::from_options(options)?)
    }

    /// Create an adapter from an already assembled configuration.
    pub fn with_config(
        factory: Box<dyn EngineFactory>,
        filesystem: Box<dyn Filesystem>,
        config: ViewConfig,
    ) -> VistaResult<Self> {
        config.validate()?;
        let adapter = Self {
            config,
            factory,
            filesystem,
            shared: TemplateData::new(),
            engine: None,
        };
        adapter.ensure_cache_dir()?;
        Ok(adapter)
    }

    /// Current value of one option (`null` when unset).
    pub fn config(&self, key: &str) -> VistaResult<Value> {
        Ok(self.config.get(key)?)
    }

    /// The whole effective configuration.
    pub fn view_config(&self) -> &ViewConfig {
        &self.config
    }

    /// Set a single option.
    pub fn set(&mut self, key: &str, value: Value) -> VistaResult<()> {
        let mut options = ConfigOptions::new();
        options.insert(key.to_owned(), value);
        self.configure(&options)
    }

    /// Share a variable with every template rendered by this adapter.
    ///
    /// Shared data has the lowest precedence: merge data and data override it.
    pub fn share(&mut self, key: impl Into<String>, value: Value) {
        self.shared.insert(key.into(), value);
    }

    /// Resolve a reference without touching the filesystem.
    pub fn resolve_path(&self, reference: &str, ctx: &RequestContext) -> PathBuf {
        resolve_path(reference, &self.config, ctx)
    }

    /// The engine for `ctx`, built on first use and whenever the effective
    /// settings change.
    pub fn engine(&mut self, ctx: &RequestContext) -> VistaResult<&dyn RenderEngine> {
        let settings = EngineSettings::derive(&self.config, ctx);

        let current = match self.engine.take() {
            Some((built_for, engine)) if built_for == settings => (built_for, engine),
            _ => {
                self.ensure_cache_dir()?;
                debug!(
                    cache_dir = %settings.cache_dir.display(),
                    roots = ?settings.search_roots,
                    cache = settings.cache_enabled,
                    "Building template engine"
                );
                let engine = self.factory.build(&settings)?;
                (settings, engine)
            }
        };

        let (_, engine) = self.engine.insert(current);
        Ok(&**engine)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn locate(&self, reference: &str, ctx: &RequestContext) -> PathBuf {
        locate(reference, &self.config, ctx)
    }

    fn ensure_cache_dir(&self) -> VistaResult<()> {
        let dir = Path::new(&self.config.view_cache_path);
        if !self.filesystem.is_dir(dir) {
            self.filesystem.create_dir_all(dir)?;
            debug!(path = %dir.display(), "Created template cache directory");
        }
        Ok(())
    }

    fn with_shared(&self, merge_data: &TemplateData) -> TemplateData {
        let mut merged = self.shared.clone();
        merged.extend(merge_data.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

impl ViewDriver for ViewAdapter {
    #[instrument(skip_all, fields(keys = options.len()))]
    fn configure(&mut self, options: &ConfigOptions) -> VistaResult<()> {
        if options.is_empty() {
            return Ok(());
        }
        self.config.merge(options)?;
        self.ensure_cache_dir()?;
        debug!("View configuration updated");
        Ok(())
    }

    fn exists(&self, reference: &str, ctx: &RequestContext) -> bool {
        self.filesystem.is_file(&self.locate(reference, ctx))
    }

    #[instrument(skip_all, fields(reference = %reference))]
    fn fetch(
        &mut self,
        reference: &str,
        ctx: &RequestContext,
        data: &TemplateData,
        merge_data: &TemplateData,
        options: &ConfigOptions,
        out: &mut dyn Write,
    ) -> VistaResult<()> {
        self.configure(options)?;

        let path = self.locate(reference, ctx);
        if !self.filesystem.is_file(&path) {
            return Err(ApplicationError::TemplateNotFound { path }.into());
        }

        debug!(
            view = %path.display(),
            keys = ?data.keys().collect::<Vec<_>>(),
            "[ VIEW ]"
        );

        let merge_data = self.with_shared(merge_data);
        let rendered = self.engine(ctx)?.render_file(&path, data, &merge_data)?;

        out.write_all(rendered.as_bytes())
            .map_err(|e| ApplicationError::OutputFailed {
                reason: e.to_string(),
            })?;
        Ok(())
    }

    #[instrument(skip_all, fields(name = %name))]
    fn display(
        &mut self,
        name: &str,
        ctx: &RequestContext,
        data: &TemplateData,
        merge_data: &TemplateData,
        options: &ConfigOptions,
    ) -> VistaResult<String> {
        self.configure(options)?;
        let merge_data = self.with_shared(merge_data);
        self.engine(ctx)?.render_named(name, data, &merge_data)
    }
}
