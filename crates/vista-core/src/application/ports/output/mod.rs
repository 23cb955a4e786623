//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the view adapter needs from the template engine
//! and the filesystem. The `vista-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{EngineSettings, TemplateData};
use crate::error::VistaResult;

/// Port for filesystem queries and cache directory creation.
///
/// Implemented by:
/// - `vista_adapters::filesystem::LocalFilesystem` (production)
/// - `vista_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories (mode 0755 where the
    /// platform has modes).
    fn create_dir_all(&self, path: &Path) -> VistaResult<()>;
}

/// Port for the template engine.
///
/// These are the only engine calls the adapter makes. In both methods `data`
/// takes precedence over `merge_data` on key collisions.
///
/// Implemented by:
/// - `vista_adapters::engine::JinjaEngine`
#[cfg_attr(test, mockall::automock)]
pub trait RenderEngine: Send + Sync {
    /// Compile (or reuse the compiled form of) the template at `path` and
    /// render it.
    fn render_file(
        &self,
        path: &Path,
        data: &TemplateData,
        merge_data: &TemplateData,
    ) -> VistaResult<String>;

    /// Locate `name` through the engine's finder and render it.
    fn render_named(
        &self,
        name: &str,
        data: &TemplateData,
        merge_data: &TemplateData,
    ) -> VistaResult<String>;
}

/// Port for constructing engines.
///
/// Implemented by:
/// - `vista_adapters::engine::JinjaEngineFactory`
#[cfg_attr(test, mockall::automock)]
pub trait EngineFactory: Send + Sync {
    /// Build an engine for the given settings.
    fn build(&self, settings: &EngineSettings) -> VistaResult<Box<dyn RenderEngine>>;
}
