// ============================================================================
// domain/error.rs - CONFIGURATION & REFERENCE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through memoized engine state)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("configuration options must be a key/value mapping")]
    MalformedOptions,

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig { key, reason } => vec![
                format!("Option '{}' was rejected: {}", key, reason),
                "Delimiters and view_depr must be non-empty strings".into(),
            ],
            Self::UnknownConfigKey { key } => vec![
                format!("'{}' is not a view option", key),
                "Known options: view_base, view_path, app_path, tpl_begin, tpl_end, \
                 tpl_raw_begin, tpl_raw_end, view_cache_path, tpl_cache, cache_subdir, \
                 cache_prefix, view_suffix, view_depr"
                    .into(),
            ],
            Self::MalformedOptions => vec!["Pass options as a JSON object".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. } | Self::MalformedOptions => ErrorCategory::Validation,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
