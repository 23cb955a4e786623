//! Where compiled templates live on disk.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Extension of compiled template files.
const COMPILED_EXT: &str = "jinja";

/// Maps a template path to its compiled file.
///
/// The file name is the hex SHA-256 of the template path together with the
/// tag syntax it was compiled under, optionally prefixed. Changing delimiters
/// therefore never picks up a copy compiled for the old ones. With sharding on, the first two byte pairs of the hash become
/// two directory levels so no single directory collects every template:
///
/// ```text
/// runtime/temp/3f/a1/3fa1...e9.jinja
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    dir: PathBuf,
    sharded: bool,
    prefix: String,
    syntax_key: String,
}

impl CacheLayout {
    pub fn new(dir: impl Into<PathBuf>, sharded: bool, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            sharded,
            prefix: prefix.into(),
            syntax_key: String::new(),
        }
    }

    /// Key compiled files to the tag syntax they were produced with.
    pub fn with_syntax_key(mut self, key: impl Into<String>) -> Self {
        self.syntax_key = key.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Compiled file for the template at `source`.
    pub fn compiled_path(&self, source: &Path) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(source.to_string_lossy().as_bytes());
        hasher.update(b"\0");
        hasher.update(self.syntax_key.as_bytes());
        let hash = hex::encode(hasher.finalize());
        let file = format!("{}{}.{}", self.prefix, hash, COMPILED_EXT);

        if self.sharded {
            self.dir.join(&hash[..2]).join(&hash[2..4]).join(file)
        } else {
            self.dir.join(file)
        }
    }
}
