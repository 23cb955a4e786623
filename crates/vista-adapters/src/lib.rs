//! Infrastructure adapters for Vista.
//!
//! This crate implements the ports defined in `vista-core::application::ports`:
//! filesystem access, the view finder, the template compiler and the
//! MiniJinja render engine. Everything that touches the disk lives here.

pub mod compiler;
pub mod engine;
pub mod filesystem;
pub mod finder;

// Re-export commonly used adapters
pub use compiler::TemplateCompiler;
pub use engine::{JinjaEngine, JinjaEngineFactory};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use finder::{FileViewFinder, ListedView};
