//! File view finder.
//!
//! Locates named views (`emails.welcome`) under a set of search roots. Dots
//! in a name are directory separators; each root is tried with each accepted
//! suffix, in order, and the first regular file wins:
//!
//! ```text
//! roots    = ["app/view/", "shared/view/"]
//! suffixes = ["html"]
//!
//! "emails.welcome"  ->  app/view/emails/welcome.html
//!                   ->  shared/view/emails/welcome.html
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::RwLock,
};

use tracing::{debug, instrument};
use vista_core::{application::ApplicationError, error::VistaResult};
use walkdir::WalkDir;

/// Finds view files by name, remembering every hit.
#[derive(Debug)]
pub struct FileViewFinder {
    roots: Vec<PathBuf>,
    suffixes: Vec<String>,
    found: RwLock<HashMap<String, PathBuf>>,
}

impl FileViewFinder {
    pub fn new(roots: Vec<PathBuf>, suffixes: Vec<String>) -> Self {
        Self {
            roots,
            suffixes: suffixes
                .into_iter()
                .map(|s| s.trim_start_matches('.').to_owned())
                .collect(),
            found: RwLock::new(HashMap::new()),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Path of the view called `name`.
    #[instrument(skip(self))]
    pub fn find(&self, name: &str) -> VistaResult<PathBuf> {
        if let Some(path) = self
            .found
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?
            .get(name)
        {
            return Ok(path.clone());
        }

        let relative = name.replace('.', "/");
        let mut searched = Vec::with_capacity(self.roots.len() * self.suffixes.len());

        for root in &self.roots {
            for suffix in &self.suffixes {
                let candidate = root.join(format!("{relative}.{suffix}"));
                if candidate.is_file() {
                    debug!(path = %candidate.display(), "View located");
                    self.found
                        .write()
                        .map_err(|_| ApplicationError::StoreLockError)?
                        .insert(name.to_owned(), candidate.clone());
                    return Ok(candidate);
                }
                searched.push(candidate);
            }
        }

        Err(ApplicationError::ViewNotFound {
            name: name.to_owned(),
            searched,
        }
        .into())
    }

    /// Every view under the roots, sorted by name.
    ///
    /// Each name maps to the file [`find`](Self::find) would return for it.
    /// Files whose stem contains a dot have no dotted name that resolves back
    /// to them and are left out.
    pub fn list(&self) -> Vec<ListedView> {
        let mut views: Vec<(usize, usize, ListedView)> = self
            .roots
            .iter()
            .enumerate()
            .flat_map(|(root_rank, root)| {
                WalkDir::new(root)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(Result::ok)
                    .filter(|entry| entry.file_type().is_file())
                    .filter_map(|entry| {
                        let (suffix_rank, name) = self.view_name(root, entry.path())?;
                        let view = ListedView {
                            name,
                            path: entry.into_path(),
                        };
                        Some((root_rank, suffix_rank, view))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        views.sort_by(|a, b| (&a.2.name, a.0, a.1).cmp(&(&b.2.name, b.0, b.1)));
        views.dedup_by(|later, first| later.2.name == first.2.name);
        views.into_iter().map(|(_, _, view)| view).collect()
    }

    fn view_name(&self, root: &Path, path: &Path) -> Option<(usize, String)> {
        let relative = path.strip_prefix(root).ok()?.to_string_lossy().replace('\\', "/");
        self.suffixes.iter().enumerate().find_map(|(rank, suffix)| {
            let stem = relative.strip_suffix(&format!(".{suffix}"))?;
            if stem.is_empty() || stem.contains('.') {
                return None;
            }
            Some((rank, stem.replace('/', ".")))
        })
    }
}

/// A view found by [`FileViewFinder::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedView {
    pub name: String,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "x").unwrap();
        path
    }

    #[test]
    fn dotted_name_maps_to_nested_file() {
        let temp = TempDir::new().unwrap();
        let expected = write(temp.path(), "emails/welcome.html");
        let finder = FileViewFinder::new(vec![temp.path().to_path_buf()], vec!["html".into()]);

        assert_eq!(finder.find("emails.welcome").unwrap(), expected);
    }

    #[test]
    fn first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let winner = write(first.path(), "layout.html");
        write(second.path(), "layout.html");

        let finder = FileViewFinder::new(
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            vec!["html".into()],
        );
        assert_eq!(finder.find("layout").unwrap(), winner);
    }

    #[test]
    fn suffixes_are_tried_in_order() {
        let temp = TempDir::new().unwrap();
        let tpl = write(temp.path(), "page.tpl");
        let finder = FileViewFinder::new(
            vec![temp.path().to_path_buf()],
            vec!["html".into(), ".tpl".into()],
        );
        assert_eq!(finder.find("page").unwrap(), tpl);
    }

    #[test]
    fn hits_are_remembered() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "cached.html");
        let finder = FileViewFinder::new(vec![temp.path().to_path_buf()], vec!["html".into()]);

        assert_eq!(finder.find("cached").unwrap(), path);
        fs::remove_file(&path).unwrap();
        assert_eq!(finder.find("cached").unwrap(), path);
    }

    #[test]
    fn miss_reports_searched_paths() {
        let temp = TempDir::new().unwrap();
        let finder = FileViewFinder::new(vec![temp.path().to_path_buf()], vec!["html".into()]);

        let err = finder.find("nope.missing").unwrap_err();
        match err {
            vista_core::error::VistaError::Application(ApplicationError::ViewNotFound {
                name,
                searched,
            }) => {
                assert_eq!(name, "nope.missing");
                assert_eq!(searched, vec![temp.path().join("nope/missing.html")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn list_returns_dotted_names() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "index/index.html");
        write(temp.path(), "index/edit.html");
        write(temp.path(), "layout.html");
        write(temp.path(), "notes.txt");

        let finder = FileViewFinder::new(vec![temp.path().to_path_buf()], vec!["html".into()]);
        let names: Vec<String> = finder.list().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["index.edit", "index.index", "layout"]);
    }

    #[test]
    fn listed_views_resolve_through_find() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "page.html");
        write(temp.path(), "page.v2.html");
        write(temp.path(), "v1.0/notes.html");
        write(temp.path(), "emails/welcome.html");

        let finder = FileViewFinder::new(vec![temp.path().to_path_buf()], vec!["html".into()]);
        let listed = finder.list();

        let names: Vec<&str> = listed.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["emails.welcome", "page"]);
        for view in &listed {
            assert_eq!(finder.find(&view.name).unwrap(), view.path);
        }
    }

    #[test]
    fn listed_path_is_the_one_find_prefers() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(second.path(), "layout.html");
        let tpl = write(first.path(), "layout.tpl");

        let finder = FileViewFinder::new(
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            vec!["html".into(), "tpl".into()],
        );
        let listed = finder.list();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].path, tpl);
        assert_eq!(finder.find("layout").unwrap(), tpl);
    }
}
