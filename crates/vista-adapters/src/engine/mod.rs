//! Render engines.

mod jinja;

pub use jinja::{JinjaEngine, JinjaEngineFactory};
