//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vista-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the view adapter, implemented by infrastructure
//!   - `Filesystem`: Existence checks and cache directory creation
//!   - `RenderEngine`: Template compilation and rendering
//!   - `EngineFactory`: Engine construction from derived settings
//!
//! - **Driving (Input) Ports**: Called by a framework, implemented by the application
//!   - `ViewDriver`: `exists` / `fetch` / `display` / `configure`

pub mod input;
pub mod output;

pub use input::ViewDriver;
pub use output::{EngineFactory, Filesystem, RenderEngine};
