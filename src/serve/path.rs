//! Request path sanitization and static asset resolution.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

/// Sanitize a request URL for dispatch.
///
/// Strips the query string, removes path-traversal sequences (`../`, `/..`)
/// and percent-encoded NUL, then percent-decodes. This is a best-effort
/// blacklist filter, not canonicalization; actual file access goes through
/// [`resolve_asset`] which canonicalizes.
pub fn sanitize_url(raw: &str) -> String {
    use percent_encoding::percent_decode_str;

    let path = raw.split('?').next().unwrap_or(raw);
    let cleaned = path.replace("../", "").replace("/..", "").replace("%00", "");

    percent_decode_str(&cleaned)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_default()
}

/// Resolve a sanitized URL to a file under the asset root.
///
/// Canonicalizes and verifies the result stays inside the root, which
/// blocks traversal via symlinks or encoded sequences the blacklist filter
/// missed. Directory hits fall back to their `index.html`.
pub fn resolve_asset(url_path: &str, assets_root: &Path) -> Option<PathBuf> {
    let clean = url_path.trim_matches('/');
    if clean.contains("..") {
        return None;
    }

    let local = assets_root.join(clean);

    let canonical = local.canonicalize().ok()?;
    let root_canonical = assets_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}
