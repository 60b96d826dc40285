//! Stylesheet aggregation with lazy minification.
//!
//! All `*.css` files under the asset directory are concatenated and minified
//! once, on first use; the result is memoized for the process lifetime.
//! Asset edits after the first render are not picked up - a deliberate
//! staleness trade-off for a short-lived dev server.

use anyhow::{Result, anyhow, bail};
use jwalk::WalkDir;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// Stylesheet extension recognized by the aggregator.
const STYLESHEET_EXT: &str = "css";

/// Memoized aggregate of all stylesheets under the asset directory.
#[derive(Debug, Default)]
pub struct CssCache {
    cache: OnceLock<String>,
}

impl CssCache {
    pub const fn new() -> Self {
        Self {
            cache: OnceLock::new(),
        }
    }

    /// Return the minified aggregate, computing it on first call.
    ///
    /// Subsequent calls return the memoized value without touching the
    /// filesystem. A failed first attempt leaves the cache unset, so the
    /// next request retries.
    pub fn get(&self, assets_dir: &Path) -> Result<&str> {
        if let Some(css) = self.cache.get() {
            return Ok(css);
        }

        let combined = read_stylesheets(assets_dir)?;
        let minified = minify_css(&combined)?;
        Ok(self.cache.get_or_init(|| minified))
    }
}

/// Concatenate every stylesheet under `assets_dir`, in sorted enumeration
/// order, without separators.
fn read_stylesheets(assets_dir: &Path) -> Result<String> {
    if !assets_dir.is_dir() {
        bail!("asset directory `{}` does not exist", assets_dir.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(assets_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(STYLESHEET_EXT))
        .collect();
    files.sort();

    let mut combined = String::new();
    for file in files {
        let content = fs::read_to_string(&file)
            .map_err(|e| anyhow!("failed to read stylesheet `{}`: {e}", file.display()))?;
        combined.push_str(&content);
    }
    Ok(combined)
}

/// Minify CSS source code with lightningcss.
fn minify_css(source: &str) -> Result<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| anyhow!("css parse error: {e}"))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| anyhow!("css print error: {e}"))?;
    Ok(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css() {
        let out = minify_css("body {\n  color: #ff0000;\n}\n").unwrap();
        assert!(out.contains("body"));
        assert!(out.contains("red") || out.contains("#f00"));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_concat_in_sorted_order() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.css"), ".b{color:blue}").unwrap();
        fs::write(tmp.path().join("a.css"), ".a{color:green}").unwrap();
        fs::write(tmp.path().join("note.txt"), "ignored").unwrap();

        let combined = read_stylesheets(tmp.path()).unwrap();
        let a = combined.find(".a").unwrap();
        let b = combined.find(".b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_memoized_after_first_call() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("style.css");
        fs::write(&file, "p { margin: 0px; }").unwrap();

        let cache = CssCache::new();
        let first = cache.get(tmp.path()).unwrap().to_string();
        assert!(first.contains('p'));

        // Deleting the source must not affect later calls: the value is
        // memoized and the filesystem is never re-read.
        fs::remove_file(&file).unwrap();
        let second = cache.get(tmp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dir_caches_empty_string() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = CssCache::new();
        assert_eq!(cache.get(tmp.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = CssCache::new();
        assert!(cache.get(&tmp.path().join("nope")).is_err());
    }
}
