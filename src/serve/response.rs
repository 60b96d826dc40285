//! HTTP response handlers.

use crate::{render::RenderError, utils::html::escape, utils::mime};
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Request, Response, StatusCode};

/// Respond with a rendered HTML document.
pub fn respond_html(request: Request, body: String) -> Result<()> {
    send_body(request, 200, mime::types::HTML, body.into_bytes())
}

/// Respond with a static file from the asset directory.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);
    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with the static primitive's not-found response.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, mime::types::PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(
        request,
        503,
        mime::types::PLAIN,
        b"503 Service Unavailable".to_vec(),
    )
}

/// Respond with a render failure (500).
///
/// Every dispatched request gets a response; a failed render must not
/// leave the connection hanging.
pub fn respond_render_error(request: Request, error: &RenderError) -> Result<()> {
    use std::error::Error as _;

    let mut detail = error.to_string();
    if let Some(source) = error.source() {
        detail.push_str(": ");
        detail.push_str(&source.to_string());
    }
    let msg = escape(&detail);
    let body = format!("<html><body><h1>Render Error</h1><pre>{msg}</pre></body></html>");
    send_body(request, 500, mime::types::HTML, body.into_bytes())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header is valid")
}
