//! `[site]` section configuration.
//!
//! Contains the site title, page metadata and navigation entries.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//!
//! [site.meta]
//! title = "My Blog - Home"
//! keywords = ["rust", "blog"]
//! description = "Notes and posts"
//!
//! [[site.navbar]]
//! name = "About"
//! href = "/about"
//! ```

use serde::{Deserialize, Serialize};

/// Default site title when `[site] title` is absent.
pub const DEFAULT_SITE_TITLE: &str = "My Blog";

/// Site settings: title, head metadata, navigation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, shown as the nav logo and in the footer.
    pub title: Option<String>,

    /// Head metadata (title, keywords, description).
    pub meta: MetaConfig,

    /// Ordered navigation entries rendered after the logo.
    pub navbar: Vec<NavEntry>,
}

impl SiteSectionConfig {
    /// Site title with fallback to the default.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_SITE_TITLE)
    }

    /// Page `<title>` content: `meta.title`, falling back to the site title.
    pub fn page_title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or_else(|| self.title())
    }
}

/// `[site.meta]` head metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetaConfig {
    /// Document title. Falls back to the site title.
    pub title: Option<String>,

    /// Keywords, joined with `,` into the meta tag.
    pub keywords: Vec<String>,

    /// Meta description.
    pub description: Option<String>,
}

/// A single `[[site.navbar]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    /// Link text.
    pub name: String,
    /// Link target (e.g., `/about`).
    pub href: String,
}
