//! Site configuration management for `mdblog.toml`.
//!
//! The config file lives in the working directory; a missing file is a fatal
//! startup error. All fields are optional with documented defaults:
//!
//! | Section          | Purpose                                   |
//! |------------------|-------------------------------------------|
//! | `[site]`         | Title, head metadata, navbar entries      |
//! | `[build]`        | Content (`app`) and asset (`public`) dirs |
//! | `[serve]`        | Development server (port `5457`, open)    |

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{BuildConfig, MetaConfig, NavEntry, ServeConfig, SiteSectionConfig};

use crate::{cli::ServeArgs, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing mdblog.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BlogConfig {
    /// Project root directory - parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (title, meta, navbar)
    pub site: SiteSectionConfig,

    /// Build paths (content, assets)
    pub build: BuildConfig,

    /// Development server settings
    pub serve: ServeConfig,
}

impl BlogConfig {
    /// Load configuration from the working directory.
    ///
    /// The config file is looked up at `<cwd>/<file_name>` only; unlike
    /// generators that search upward, the dev server always runs from the
    /// site root. A missing file is fatal.
    pub fn load(file_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = cwd.join(file_name);

        if !config_path.is_file() {
            return Err(ConfigError::Missing(config_path).into());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|err| ConfigError::Io(config_path.clone(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, &config_path);
        }

        config.root = cwd;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {field}");
        }
    }

    /// Apply CLI overrides from the serve command.
    pub fn apply_serve_args(&mut self, args: &ServeArgs) {
        if let Some(port) = args.port {
            self.serve.port = port;
        }
        if let Some(open) = args.open {
            self.serve.open = open;
        }
    }

    /// Validate that the content and asset directories exist.
    ///
    /// Both are required at startup; the route table and stylesheet cache
    /// are built from a single scan and never observe later changes.
    pub fn validate(&self) -> Result<()> {
        let content = self.content_dir();
        if !content.is_dir() {
            return Err(ConfigError::Validation(format!(
                "content directory `{}` does not exist",
                content.display()
            ))
            .into());
        }

        let assets = self.assets_dir();
        if !assets.is_dir() {
            return Err(ConfigError::Validation(format!(
                "asset directory `{}` does not exist",
                assets.display()
            ))
            .into());
        }

        Ok(())
    }

    /// Absolute content directory path.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.build.content)
    }

    /// Absolute asset directory path.
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join(&self.build.assets)
    }
}
