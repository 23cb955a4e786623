//! Application layer for Vista.
//!
//! This layer contains:
//! - **Services**: The view adapter (`ViewAdapter`)
//! - **Ports**: Interface definitions (traits) for the engine and the filesystem
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! resolution logic itself. Path conventions live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::ViewAdapter;

// Re-export port traits (for adapter implementation)
pub use ports::{EngineFactory, Filesystem, RenderEngine, ViewDriver};

pub use error::ApplicationError;
