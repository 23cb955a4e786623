//! Template references.
//!
//! A reference is the symbolic name a caller uses to ask for a template:
//!
//! ```text
//! ""                  current controller / current action
//! "edit"              current controller / edit
//! "blog/edit"         blog / edit
//! "admin@blog/edit"   blog / edit in the admin module
//! "/layout/main"      layout / main, no controller prefix
//! "views/raw.html"    a file path, used as-is
//! ```

use std::path::Path;

/// A reference split into its optional module and the template part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateReference<'a> {
    pub module: Option<&'a str>,
    pub template: &'a str,
}

impl<'a> TemplateReference<'a> {
    /// Split `module@template`.
    ///
    /// An `@` in the first position does not name a module; the reference is
    /// then taken verbatim. Anything after a second `@` is ignored.
    pub fn parse(raw: &'a str) -> Self {
        match raw.find('@') {
            Some(pos) if pos > 0 => {
                let mut parts = raw.split('@');
                let module = parts.next().unwrap_or_default();
                let template = parts.next().unwrap_or_default();
                Self {
                    module: Some(module),
                    template,
                }
            }
            _ => Self {
                module: None,
                template: raw,
            },
        }
    }

    /// Absolute references skip the controller prefix.
    pub fn is_absolute(&self) -> bool {
        self.template.starts_with('/')
    }
}

/// Whether `reference` already names a file (has a non-empty extension).
///
/// Only references without one go through path resolution.
pub fn has_extension(reference: &str) -> bool {
    Path::new(reference)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_reference_has_no_module() {
        let r = TemplateReference::parse("blog/edit");
        assert_eq!(r.module, None);
        assert_eq!(r.template, "blog/edit");
    }

    #[test]
    fn module_is_split_off() {
        let r = TemplateReference::parse("admin@blog/edit");
        assert_eq!(r.module, Some("admin"));
        assert_eq!(r.template, "blog/edit");
    }

    #[test]
    fn leading_at_is_not_a_module() {
        let r = TemplateReference::parse("@edit");
        assert_eq!(r.module, None);
        assert_eq!(r.template, "@edit");
    }

    #[test]
    fn module_with_empty_template() {
        let r = TemplateReference::parse("admin@");
        assert_eq!(r.module, Some("admin"));
        assert_eq!(r.template, "");
    }

    #[test]
    fn extra_segments_are_dropped() {
        let r = TemplateReference::parse("a@b@c");
        assert_eq!(r.module, Some("a"));
        assert_eq!(r.template, "b");
    }

    #[test]
    fn absolute_detection() {
        assert!(TemplateReference::parse("/layout/main").is_absolute());
        assert!(TemplateReference::parse("admin@/layout").is_absolute());
        assert!(!TemplateReference::parse("layout/main").is_absolute());
    }

    #[test]
    fn extension_detection() {
        assert!(has_extension("views/raw.html"));
        assert!(has_extension("/tmp/a.b/c.tpl"));
        assert!(!has_extension("blog/edit"));
        assert!(!has_extension("admin@blog"));
        assert!(!has_extension("a.b/c"));
        assert!(!has_extension("trailing."));
        assert!(!has_extension(""));
    }
}
