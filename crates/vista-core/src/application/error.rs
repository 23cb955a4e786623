//! Application layer errors.
//!
//! These errors represent failures while driving the engine and the
//! filesystem, not configuration mistakes. Configuration errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while locating, compiling, or rendering views.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A resolved template path is not a regular file.
    #[error("template not exists: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// The finder could not locate a named view.
    #[error("view '{name}' not found")]
    ViewNotFound { name: String, searched: Vec<PathBuf> },

    /// Template compilation failed.
    #[error("failed to compile {}: {reason}", path.display())]
    CompileFailed { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Rendered output could not be written to the caller's sink.
    #[error("failed to write rendered output: {reason}")]
    OutputFailed { reason: String },

    /// A shared lock was poisoned.
    #[error("view state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("Expected a template file at: {}", path.display()),
                "Check view_path / view_base and view_suffix".into(),
                "Try: vista resolve <reference> to see where a reference points".into(),
            ],
            Self::ViewNotFound { name, searched } => {
                let mut out = vec![format!("No file found for view '{}'", name)];
                out.extend(
                    searched
                        .iter()
                        .map(|p| format!("  searched: {}", p.display())),
                );
                out
            }
            Self::CompileFailed { .. } => vec![
                "Check that every opening delimiter has a matching closing one".into(),
                "tpl_begin/tpl_end and tpl_raw_begin/tpl_raw_end configure them".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions for view_cache_path".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::ViewNotFound { .. } => ErrorCategory::NotFound,
            Self::CompileFailed { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::OutputFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
