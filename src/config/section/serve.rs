//! `[serve]` section configuration.
//!
//! Contains development server settings.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! port = 5457     # HTTP port number
//! open = true     # open the browser after startup
//! ```

use serde::{Deserialize, Serialize};

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// HTTP port number.
    pub port: u16,

    /// Open the site in the default browser after startup.
    pub open: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: 5457,
            open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::BlogConfig;

    #[test]
    fn test_serve_config() {
        let config = BlogConfig::from_str("[serve]\nport = 8080\nopen = true").unwrap();
        assert_eq!(config.serve.port, 8080);
        assert!(config.serve.open);
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = BlogConfig::from_str("").unwrap();
        assert_eq!(config.serve.port, 5457);
        assert!(!config.serve.open);
    }

    #[test]
    fn test_serve_config_partial_override() {
        let config = BlogConfig::from_str("[serve]\nport = 3000").unwrap();
        assert_eq!(config.serve.port, 3000);
        assert!(!config.serve.open);
    }
}
