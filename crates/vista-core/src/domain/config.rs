//! View configuration.
//!
//! [`ViewConfig`] is the flat option mapping the view adapter is driven by.
//! Callers mutate it through JSON patches ([`ConfigOptions`]): a shallow merge
//! where later keys overwrite earlier ones. Every patch is validated as a
//! whole before it is applied, so a rejected patch leaves the configuration
//! untouched.
//!
//! # Keys
//!
//! | Key               | Default         | Meaning                                   |
//! |-------------------|-----------------|-------------------------------------------|
//! | `view_base`       | unset           | Centralized view directory override       |
//! | `view_path`       | unset           | View directory (defaults per module)      |
//! | `app_path`        | `app/`          | Application root holding module dirs      |
//! | `tpl_begin`       | `{{`            | Escaped output start delimiter            |
//! | `tpl_end`         | `}}`            | Escaped output end delimiter              |
//! | `tpl_raw_begin`   | `{!!`           | Raw output start delimiter                |
//! | `tpl_raw_end`     | `!!}`           | Raw output end delimiter                  |
//! | `view_cache_path` | `runtime/temp/` | Compiled template directory               |
//! | `tpl_cache`       | `true`          | Reuse compiled templates                  |
//! | `cache_subdir`    | `false`         | Shard compiled templates in subdirectories|
//! | `cache_prefix`    | empty           | Compiled file name prefix                 |
//! | `view_suffix`     | `html`          | Template file suffix                      |
//! | `view_depr`       | `/`             | Separator used by path resolution         |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// A configuration patch: option name to JSON value.
pub type ConfigOptions = Map<String, Value>;

/// Effective view driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub view_base: Option<String>,
    pub view_path: Option<String>,
    pub app_path: String,
    pub tpl_begin: String,
    pub tpl_end: String,
    pub tpl_raw_begin: String,
    pub tpl_raw_end: String,
    pub view_cache_path: String,
    pub tpl_cache: bool,
    pub cache_subdir: bool,
    pub cache_prefix: String,
    pub view_suffix: String,
    pub view_depr: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_base: None,
            view_path: None,
            app_path: "app/".into(),
            tpl_begin: "{{".into(),
            tpl_end: "}}".into(),
            tpl_raw_begin: "{!!".into(),
            tpl_raw_end: "!!}".into(),
            view_cache_path: "runtime/temp/".into(),
            tpl_cache: true,
            cache_subdir: false,
            cache_prefix: String::new(),
            view_suffix: "html".into(),
            view_depr: "/".into(),
        }
    }
}

impl ViewConfig {
    /// Build a configuration from defaults overlaid with `options`.
    pub fn from_options(options: &ConfigOptions) -> Result<Self, DomainError> {
        let mut config = Self::default();
        config.merge(options)?;
        Ok(config)
    }

    /// Shallow-merge `options` into this configuration.
    ///
    /// Unknown keys and values of the wrong type are rejected, as is a result
    /// that fails [`ViewConfig::validate`]. On error `self` is unchanged.
    pub fn merge(&mut self, options: &ConfigOptions) -> Result<(), DomainError> {
        if options.is_empty() {
            return Ok(());
        }

        let mut map = self.to_map()?;
        for (key, value) in options {
            if !map.contains_key(key) {
                return Err(DomainError::UnknownConfigKey { key: key.clone() });
            }
            map.insert(key.clone(), value.clone());
        }

        let next: ViewConfig =
            serde_json::from_value(Value::Object(map)).map_err(|e| DomainError::InvalidConfig {
                key: options.keys().cloned().collect::<Vec<_>>().join(", "),
                reason: e.to_string(),
            })?;
        next.validate()?;

        *self = next;
        Ok(())
    }

    /// Set a single option.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), DomainError> {
        let mut options = ConfigOptions::new();
        options.insert(key.to_owned(), value);
        self.merge(&options)
    }

    /// Current value of a single option; `null` when it is unset.
    pub fn get(&self, key: &str) -> Result<Value, DomainError> {
        self.to_map()?
            .remove(key)
            .ok_or_else(|| DomainError::UnknownConfigKey { key: key.to_owned() })
    }

    /// Check invariants the resolver and the compiler rely on.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("tpl_begin", &self.tpl_begin),
            ("tpl_end", &self.tpl_end),
            ("tpl_raw_begin", &self.tpl_raw_begin),
            ("tpl_raw_end", &self.tpl_raw_end),
            ("view_depr", &self.view_depr),
        ];
        for (key, value) in required {
            if value.is_empty() {
                return Err(DomainError::InvalidConfig {
                    key: key.into(),
                    reason: "must not be empty".into(),
                });
            }
        }

        if self.suffix().is_empty() {
            return Err(DomainError::InvalidConfig {
                key: "view_suffix".into(),
                reason: "must name a file extension".into(),
            });
        }

        if self.tpl_begin == self.tpl_raw_begin {
            return Err(DomainError::InvalidConfig {
                key: "tpl_raw_begin".into(),
                reason: "raw and escaped delimiters must differ".into(),
            });
        }

        Ok(())
    }

    /// The centralized view base, if one is configured.
    pub fn view_base(&self) -> Option<&str> {
        self.view_base.as_deref().filter(|base| !base.is_empty())
    }

    /// Template file suffix without a leading dot.
    pub fn suffix(&self) -> &str {
        self.view_suffix.trim_start_matches('.')
    }

    /// View directory for `module`: the configured `view_path`, or the
    /// module's own `view` directory under `app_path` when it is unset.
    pub fn view_path_for(&self, module: &str) -> String {
        match self.view_path.as_deref().filter(|path| !path.is_empty()) {
            Some(path) => path.to_owned(),
            None => self.module_view_path(module),
        }
    }

    /// `<app_path><module>/view/`, or `<app_path>view/` for an empty module.
    pub fn module_view_path(&self, module: &str) -> String {
        let mut path = with_trailing_slash(&self.app_path);
        if !module.is_empty() {
            path.push_str(module);
            path.push('/');
        }
        path.push_str("view/");
        path
    }

    fn to_map(&self) -> Result<ConfigOptions, DomainError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(DomainError::MalformedOptions),
        }
    }
}

fn with_trailing_slash(dir: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        dir.to_owned()
    } else {
        format!("{dir}/")
    }
}
