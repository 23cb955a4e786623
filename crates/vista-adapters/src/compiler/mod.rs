//! Template compiler with an on-disk cache.
//!
//! Compiling rewrites a template's output tags into MiniJinja syntax (see
//! [`tags`]). With caching on, the result is written next to its siblings in
//! the cache directory and reused until the source file is modified again.

pub mod cache;
pub mod tags;

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, trace};
use vista_core::{
    application::ApplicationError, domain::EngineSettings, error::VistaResult,
};

pub use cache::CacheLayout;
pub use tags::TagSyntax;

use crate::filesystem::map_io_error;

/// Compiles view templates and manages their compiled copies.
#[derive(Debug, Clone)]
pub struct TemplateCompiler {
    syntax: TagSyntax,
    layout: CacheLayout,
    cache_enabled: bool,
}

impl TemplateCompiler {
    pub fn new(syntax: TagSyntax, layout: CacheLayout, cache_enabled: bool) -> Self {
        Self {
            layout: layout.with_syntax_key(syntax.cache_key()),
            syntax,
            cache_enabled,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            TagSyntax::new(settings.content_tags.clone(), settings.raw_tags.clone()),
            CacheLayout::new(
                &settings.cache_dir,
                settings.cache_subdir,
                &settings.cache_prefix,
            ),
            settings.cache_enabled,
        )
    }

    pub fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    /// Whether `path` must be compiled again before use.
    ///
    /// Always true with caching off; otherwise true when there is no compiled
    /// copy or the source was modified at or after the copy was written.
    pub fn is_expired(&self, path: &Path) -> bool {
        if !self.cache_enabled {
            return true;
        }
        match (modified(path), modified(&self.layout.compiled_path(path))) {
            (Some(source), Some(compiled)) => source >= compiled,
            _ => true,
        }
    }

    /// Compiled source for the template at `path`.
    pub fn load(&self, path: &Path) -> VistaResult<String> {
        let compiled_path = self.layout.compiled_path(path);

        if !self.is_expired(path) {
            trace!(view = %path.display(), "Using compiled template");
            return fs::read_to_string(&compiled_path)
                .map_err(|e| map_io_error(&compiled_path, e, "read compiled template"));
        }

        let compiled = self.compile(path)?;

        if self.cache_enabled {
            if let Some(parent) = compiled_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create cache directory"))?;
            }
            fs::write(&compiled_path, &compiled)
                .map_err(|e| map_io_error(&compiled_path, e, "write compiled template"))?;
            debug!(
                view = %path.display(),
                compiled = %compiled_path.display(),
                "Compiled template"
            );
        }

        Ok(compiled)
    }

    /// Translate the template at `path` without touching the cache.
    pub fn compile(&self, path: &Path) -> VistaResult<String> {
        let source =
            fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read template"))?;
        self.compile_source(path, &source)
    }

    /// Translate template source; `path` only labels errors.
    pub fn compile_source(&self, path: &Path, source: &str) -> VistaResult<String> {
        self.syntax.translate(source).map_err(|reason| {
            ApplicationError::CompileFailed {
                path: path.to_path_buf(),
                reason,
            }
            .into()
        })
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
