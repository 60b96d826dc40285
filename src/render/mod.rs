//! Render pipeline: markdown source file to a complete HTML document.

mod markdown;
mod template;

pub use markdown::to_html;

use crate::{route::Route, site::Site};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

/// Request-phase render failures. Recoverable: the affected request gets an
/// error response, the server keeps running.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A file discovered at startup became unreadable (e.g., deleted).
    #[error("failed to read `{path}`")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stylesheet aggregation or minification failed.
    #[error("stylesheet aggregation failed: {0}")]
    Css(String),
}

/// Render a route to a full HTML document.
///
/// Reads the source, converts it to an HTML fragment and wraps it in the
/// page template with the memoized CSS inlined. Pure given its inputs aside
/// from the file read and the CSS cache.
pub fn render(route: &Route, site: &Site) -> Result<String, RenderError> {
    let text = fs::read_to_string(&route.source).map_err(|e| RenderError::ContentRead {
        path: route.source.clone(),
        source: e,
    })?;

    let fragment = markdown::to_html(&text);
    let css = site
        .css()
        .map_err(|e| RenderError::Css(format!("{e:#}")))?;

    Ok(template::page(&site.config, css, &fragment))
}
