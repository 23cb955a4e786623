//! Request identity consumed by path resolution.

use serde::{Deserialize, Serialize};

/// Module, controller and action of the request being rendered.
///
/// Only consulted when a template reference omits explicit targeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestContext {
    pub module: String,
    pub controller: String,
    pub action: String,
}

impl RequestContext {
    pub fn new(
        module: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Same request, different module.
    pub fn with_module(&self, module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..self.clone()
        }
    }

    /// Controller name as a directory path.
    ///
    /// Each dotted segment is snake-cased (`UserProfile` -> `user_profile`)
    /// and the segments are joined with `depr`, so `admin.UserProfile`
    /// becomes `admin/user_profile` for `depr == "/"`.
    pub fn controller_path(&self, depr: &str) -> String {
        if self.controller.is_empty() {
            return String::new();
        }
        self.controller
            .split('.')
            .map(snake_case)
            .collect::<Vec<_>>()
            .join(depr)
    }
}

fn snake_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    for (i, c) in segment.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out.trim_matches('_').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_controller_is_lowercased() {
        let ctx = RequestContext::new("index", "Index", "index");
        assert_eq!(ctx.controller_path("/"), "index");
    }

    #[test]
    fn camel_case_becomes_snake_case() {
        let ctx = RequestContext::new("", "UserProfile", "show");
        assert_eq!(ctx.controller_path("/"), "user_profile");
    }

    #[test]
    fn dotted_controller_uses_separator() {
        let ctx = RequestContext::new("", "admin.UserProfile", "show");
        assert_eq!(ctx.controller_path("/"), "admin/user_profile");
        assert_eq!(ctx.controller_path("_"), "admin_user_profile");
    }

    #[test]
    fn segments_are_snake_cased_separately() {
        let ctx = RequestContext::new("", "admin.UserInfo", "edit");
        assert_eq!(ctx.controller_path("/"), "admin/user_info");
        assert!(!ctx.controller_path("/").contains("/_"));
    }

    #[test]
    fn empty_controller_has_empty_path() {
        assert_eq!(RequestContext::default().controller_path("/"), "");
    }

    #[test]
    fn with_module_keeps_controller_and_action() {
        let ctx = RequestContext::new("index", "Blog", "list").with_module("admin");
        assert_eq!(ctx, RequestContext::new("admin", "Blog", "list"));
    }
}
