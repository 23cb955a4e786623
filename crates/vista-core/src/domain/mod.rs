//! Domain layer: configuration, references, and path resolution.
//!
//! Everything here is pure. No I/O, no engine, no global state; the request
//! identity is always passed in explicitly.

pub mod config;
pub mod error;
pub mod locator;
pub mod reference;
pub mod request;
pub mod settings;

pub use config::{ConfigOptions, ViewConfig};
pub use error::{DomainError, ErrorCategory};
pub use locator::{base_dir, locate, resolve_path};
pub use reference::{TemplateReference, has_extension};
pub use request::RequestContext;
pub use settings::{EngineSettings, TagPair};

/// Variables handed to a template.
pub type TemplateData = serde_json::Map<String, serde_json::Value>;
