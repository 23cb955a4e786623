//! Vista Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of a template view
//! driver: it turns view configuration and symbolic template references into
//! file paths and engine calls, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      framework dispatcher / vista-cli   │
//! │       (Calls the ViewDriver port)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (ViewAdapter)               │
//! │   configure / exists / fetch / display  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: EngineFactory, RenderEngine,   │
//! │          Filesystem)                    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vista-adapters (Infrastructure)      │
//! │ (JinjaEngine, FileViewFinder, Local fs) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ViewConfig, RequestContext, locator)   │
//! │         No I/O, no engine               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vista_core::prelude::*;
//!
//! let mut view = ViewAdapter::new(factory, filesystem, &options)?;
//! let ctx = RequestContext::new("index", "Index", "index");
//!
//! // app/index/view/index/index.html
//! view.fetch("", &ctx, &data, &TemplateData::new(), &ConfigOptions::new(), &mut out)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ViewAdapter,
        ports::{EngineFactory, Filesystem, RenderEngine, ViewDriver},
    };
    pub use crate::domain::{
        ConfigOptions, EngineSettings, RequestContext, TagPair, TemplateData, ViewConfig,
        resolve_path,
    };
    pub use crate::error::{VistaError, VistaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
