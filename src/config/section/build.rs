//! `[build]` section configuration.
//!
//! Content and asset directory locations, relative to the working directory.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "app"      # markdown sources
//! assets = "public"    # static files, stylesheets aggregated
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Markdown content directory.
    pub content: PathBuf,

    /// Static asset directory. Also the source of aggregated stylesheets.
    pub assets: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("app"),
            assets: PathBuf::from("public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::BlogConfig;
    use std::path::Path;

    #[test]
    fn test_build_defaults() {
        let config = BlogConfig::from_str("").unwrap();
        assert_eq!(config.build.content, Path::new("app"));
        assert_eq!(config.build.assets, Path::new("public"));
    }

    #[test]
    fn test_build_override() {
        let config =
            BlogConfig::from_str("[build]\ncontent = \"docs\"\nassets = \"static\"").unwrap();
        assert_eq!(config.build.content, Path::new("docs"));
        assert_eq!(config.build.assets, Path::new("static"));
    }
}
