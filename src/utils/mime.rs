//! MIME type detection for static asset responses.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const MARKDOWN: &str = "text/markdown; charset=utf-8";
    pub const PDF: &str = "application/pdf";
    pub const OCTET_STREAM: &str = "application/octet-stream";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
    pub const MP3: &str = "audio/mpeg";
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
}

/// Guess MIME type from file extension.
///
/// Returns a full MIME type string suitable for a Content-Type header.
pub fn from_path(path: &Path) -> &'static str {
    use types::*;

    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => HTML,
        Some("txt") => PLAIN,
        Some("css") => CSS,
        Some("js" | "mjs") => JAVASCRIPT,
        Some("json") => JSON,
        Some("xml") => XML,
        Some("md") => MARKDOWN,
        Some("pdf") => PDF,
        Some("png") => PNG,
        Some("jpg" | "jpeg") => JPEG,
        Some("gif") => GIF,
        Some("webp") => WEBP,
        Some("avif") => AVIF,
        Some("svg") => SVG,
        Some("ico") => ICO,
        Some("mp3") => MP3,
        Some("mp4") => MP4,
        Some("webm") => WEBM,
        Some("woff") => WOFF,
        Some("woff2") => WOFF2,
        Some("ttf") => TTF,
        Some("otf") => OTF,
        _ => OCTET_STREAM,
    }
}
