//! Startup-built site context.
//!
//! Bundles the loaded config, the route table and the stylesheet cache into
//! one explicit object that is passed to the render and dispatch layers.
//! Nothing here mutates after startup except the lazy CSS memoization.

use crate::{config::BlogConfig, css::CssCache, log, route::RouteTable};
use anyhow::Result;

/// Read-only state shared by the render pipeline and request dispatch.
#[derive(Debug)]
pub struct Site {
    pub config: BlogConfig,
    pub routes: RouteTable,
    css: CssCache,
}

impl Site {
    /// Validate directories and scan the content tree once.
    ///
    /// Startup-phase failures (missing directories, unreadable content)
    /// propagate out and terminate the process before any listener binds.
    pub fn build(config: BlogConfig) -> Result<Self> {
        config.validate()?;
        let routes = RouteTable::resolve(&config.content_dir())?;
        if routes.is_empty() {
            log!(
                "scan";
                "no markdown files under `{}`",
                config.content_dir().display()
            );
        }
        Ok(Self {
            config,
            routes,
            css: CssCache::new(),
        })
    }

    /// Aggregated, minified CSS (computed on first use, memoized after).
    pub fn css(&self) -> Result<&str> {
        self.css.get(&self.config.assets_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_scans_routes_and_css() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("app")).unwrap();
        fs::create_dir(tmp.path().join("public")).unwrap();
        fs::write(tmp.path().join("app/index.md"), "# hi").unwrap();
        fs::write(tmp.path().join("public/style.css"), "p{color:red}").unwrap();

        let mut config = BlogConfig::from_str("").unwrap();
        config.root = tmp.path().to_path_buf();

        let site = Site::build(config).unwrap();
        assert_eq!(site.routes.len(), 1);
        assert!(site.routes.get("/").is_some());
        assert!(site.css().unwrap().contains("red"));
    }

    #[test]
    fn test_build_fails_without_content_dir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("public")).unwrap();

        let mut config = BlogConfig::from_str("").unwrap();
        config.root = tmp.path().to_path_buf();

        assert!(Site::build(config).is_err());
    }
}
