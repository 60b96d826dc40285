//! Content-to-route resolution.
//!
//! Scans the content directory once at startup and maps every markdown file
//! to a clean URL: no `.md` suffix, `index` files collapse to their
//! directory's own path. The table is immutable for the server's lifetime;
//! files created or deleted afterwards are not observed.

use crate::debug;
use anyhow::{Result, bail};
use jwalk::WalkDir;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Markdown source extension recognized by the scanner.
const MARKDOWN_EXT: &str = "md";

/// A mapping from a URL path to a source content file.
#[derive(Debug, Clone)]
pub struct Route {
    /// Clean URL path (e.g., `/blog/post1`).
    pub url_path: String,
    /// Absolute path of the markdown source.
    pub source: PathBuf,
}

/// Immutable route table built once at startup.
///
/// Routes are kept in scan order; an `FxHashMap` index gives exact-match
/// lookup without a linear scan.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: FxHashMap<String, usize>,
}

impl RouteTable {
    /// Recursively enumerate markdown files under `content_dir` and derive
    /// their routes. Fatal if the directory is missing.
    ///
    /// When two files derive the same URL the later one (in sorted scan
    /// order) wins and shadows the earlier.
    pub fn resolve(content_dir: &Path) -> Result<Self> {
        if !content_dir.is_dir() {
            bail!(
                "content directory `{}` does not exist",
                content_dir.display()
            );
        }

        let mut files: Vec<PathBuf> = WalkDir::new(content_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXT))
            .collect();
        // jwalk's enumeration order depends on the platform; sort for a
        // deterministic table
        files.sort();

        let mut table = Self::default();
        for file in files {
            let rel = file.strip_prefix(content_dir).unwrap_or(&file);
            table.insert(Route {
                url_path: url_for(rel),
                source: file.clone(),
            });
        }

        debug!("scan"; "registered {} routes", table.len());
        Ok(table)
    }

    fn insert(&mut self, route: Route) {
        if let Some(&prev) = self.index.get(&route.url_path) {
            debug!(
                "scan";
                "{} shadows {} at {}",
                route.source.display(),
                self.routes[prev].source.display(),
                route.url_path
            );
        }
        self.index.insert(route.url_path.clone(), self.routes.len());
        self.routes.push(route);
    }

    /// Exact-match lookup on a sanitized URL path.
    pub fn get(&self, url_path: &str) -> Option<&Route> {
        self.index.get(url_path).map(|&i| &self.routes[i])
    }

    /// Routes in scan order (shadowed entries included).
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Derive the URL path for a source file path relative to the content root.
///
/// | stem    | parent | url          |
/// |---------|--------|--------------|
/// | `index` | `.`    | `/`          |
/// | `index` | `p`    | `/p`         |
/// | other   | `.`    | `/stem`      |
/// | other   | `p`    | `/p/stem`    |
fn url_for(rel_path: &Path) -> String {
    let stem = rel_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let parent: Vec<&str> = rel_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    match (stem == "index", parent.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", parent.join("/")),
        (false, true) => format!("/{stem}"),
        (false, false) => format!("/{}/{stem}", parent.join("/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_url_mapping_rule() {
        assert_eq!(url_for(Path::new("index.md")), "/");
        assert_eq!(url_for(Path::new("blog/index.md")), "/blog");
        assert_eq!(url_for(Path::new("about.md")), "/about");
        assert_eq!(url_for(Path::new("blog/post1.md")), "/blog/post1");
        assert_eq!(url_for(Path::new("a/b/c.md")), "/a/b/c");
    }

    #[test]
    fn test_resolve_builds_table() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "index.md", "# home");
        write(tmp.path(), "about.md", "# about");
        write(tmp.path(), "blog/index.md", "# blog");
        write(tmp.path(), "blog/post1.md", "# post");
        write(tmp.path(), "notes.txt", "not markdown");

        let table = RouteTable::resolve(tmp.path()).unwrap();
        assert_eq!(table.len(), 4);

        assert!(table.get("/").is_some());
        assert!(table.get("/about").is_some());
        assert!(table.get("/blog").is_some());
        assert!(table.get("/blog/post1").is_some());
        assert!(table.get("/notes").is_none());

        let route = table.get("/blog/post1").unwrap();
        assert_eq!(route.source, tmp.path().join("blog/post1.md"));
    }

    #[test]
    fn test_resolve_missing_dir_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(RouteTable::resolve(&tmp.path().join("nope")).is_err());
    }

    #[test]
    fn test_deterministic_order() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "b.md", "");
        write(tmp.path(), "a.md", "");
        write(tmp.path(), "c.md", "");

        let table = RouteTable::resolve(tmp.path()).unwrap();
        let urls: Vec<&str> = table.iter().map(|r| r.url_path.as_str()).collect();
        assert_eq!(urls, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_collision_last_writer_wins() {
        // `blog.md` and `blog/index.md` both derive `/blog`; component-wise
        // path order puts `blog/index.md` first, so `blog.md` wins.
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "blog.md", "# flat");
        write(tmp.path(), "blog/index.md", "# dir");

        let table = RouteTable::resolve(tmp.path()).unwrap();
        assert_eq!(table.len(), 2);
        let route = table.get("/blog").unwrap();
        assert_eq!(route.source, tmp.path().join("blog.md"));
    }

    #[test]
    fn test_empty_dir_gives_empty_table() {
        let tmp = tempfile::tempdir().unwrap();
        let table = RouteTable::resolve(tmp.path()).unwrap();
        assert!(table.is_empty());
        assert!(table.get("/").is_none());
    }
}
