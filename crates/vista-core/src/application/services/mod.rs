//! Application services - orchestrate use cases.
//!
//! [`ViewAdapter`] is the only service: it turns configuration and template
//! references into engine calls.

pub mod view_adapter;

pub use view_adapter::ViewAdapter;
