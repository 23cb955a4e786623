//! Engine construction parameters derived from [`ViewConfig`].
//!
//! Deriving settings is cheap and pure. Building an engine is not, so the
//! adapter compares freshly derived settings with the ones its current engine
//! was built from and only rebuilds when they differ.

use std::path::PathBuf;

use crate::domain::{config::ViewConfig, locator::base_dir, request::RequestContext};

/// A start/end delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPair {
    pub begin: String,
    pub end: String,
}

impl TagPair {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }
}

/// Everything an engine factory needs to build an engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngineSettings {
    /// Directory compiled templates are written to.
    pub cache_dir: PathBuf,
    /// Reuse compiled templates while they are newer than their source.
    pub cache_enabled: bool,
    /// Shard compiled templates into two levels of subdirectories.
    pub cache_subdir: bool,
    /// Prefix for compiled file names.
    pub cache_prefix: String,
    /// Escaped output delimiters.
    pub content_tags: TagPair,
    /// Raw (unescaped) output delimiters.
    pub raw_tags: TagPair,
    /// Directories the finder searches for named views.
    pub search_roots: Vec<PathBuf>,
    /// Accepted template suffixes, without a leading dot.
    pub suffixes: Vec<String>,
}

impl EngineSettings {
    pub fn derive(config: &ViewConfig, ctx: &RequestContext) -> Self {
        Self {
            cache_dir: PathBuf::from(&config.view_cache_path),
            cache_enabled: config.tpl_cache,
            cache_subdir: config.cache_subdir,
            cache_prefix: config.cache_prefix.clone(),
            content_tags: TagPair::new(&config.tpl_begin, &config.tpl_end),
            raw_tags: TagPair::new(&config.tpl_raw_begin, &config.tpl_raw_end),
            search_roots: vec![PathBuf::from(base_dir(config, None, ctx))],
            suffixes: vec![config.suffix().to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_delimiters_and_cache_flags() {
        let config = ViewConfig {
            tpl_begin: "<%".into(),
            tpl_end: "%>".into(),
            tpl_cache: false,
            ..ViewConfig::default()
        };
        let settings = EngineSettings::derive(&config, &RequestContext::default());

        assert_eq!(settings.content_tags, TagPair::new("<%", "%>"));
        assert_eq!(settings.raw_tags, TagPair::new("{!!", "!!}"));
        assert!(!settings.cache_enabled);
        assert_eq!(settings.cache_dir, PathBuf::from("runtime/temp/"));
    }

    #[test]
    fn search_root_follows_request_module() {
        let config = ViewConfig::default();
        let settings = EngineSettings::derive(&config, &RequestContext::new("admin", "", ""));
        assert_eq!(settings.search_roots, vec![PathBuf::from("app/admin/view/")]);
        assert_eq!(settings.suffixes, vec!["html".to_owned()]);
    }

    #[test]
    fn identical_inputs_compare_equal() {
        let config = ViewConfig::default();
        let ctx = RequestContext::new("index", "Index", "index");
        assert_eq!(
            EngineSettings::derive(&config, &ctx),
            EngineSettings::derive(&config, &ctx)
        );
    }

    #[test]
    fn action_does_not_affect_settings() {
        let config = ViewConfig::default();
        assert_eq!(
            EngineSettings::derive(&config, &RequestContext::new("index", "Index", "a")),
            EngineSettings::derive(&config, &RequestContext::new("index", "Blog", "b"))
        );
    }
}
