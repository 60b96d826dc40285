//! Development server: request dispatch over tiny_http.
//!
//! Dispatch policy per request: sanitize the path, try the static asset
//! root first (the static primitive short-circuits on a hit), then the
//! route table; a route match renders and terminates the chain; anything
//! else is the static primitive's not-found.

pub mod lifecycle;
mod path;
mod response;

use crate::{log, render, route::Route, site::Site, utils::open::open_browser};
use anyhow::{Context, Result};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tiny_http::{Request, Server};

/// Outcome of the dispatch decision for one request.
#[derive(Debug)]
pub enum Dispatch<'a> {
    /// Serve a file under the asset directory.
    Asset(PathBuf),
    /// Render a resolved route.
    Page(&'a Route),
    /// Neither a route nor an asset matches.
    NotFound,
}

/// Decide how to answer a request URL. Pure given the site context.
pub fn decide<'a>(site: &'a Site, raw_url: &str) -> Dispatch<'a> {
    let clean = path::sanitize_url(raw_url);

    // Static assets are registered before markdown dispatch and terminate
    // the chain on a hit
    if let Some(file) = path::resolve_asset(&clean, &site.config.assets_dir()) {
        return Dispatch::Asset(file);
    }

    if let Some(route) = site.routes.get(&clean) {
        return Dispatch::Page(route);
    }

    Dispatch::NotFound
}

/// Bind the listener and run the accept loop until shutdown.
///
/// Binding is attempted exactly once; an unavailable port is a fatal
/// startup error. Requests are handled on the accept thread - content
/// files are small and local, so synchronous reads are fine for a dev
/// server.
pub fn serve(site: Site) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], site.config.serve.port));
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    let url = format!("http://{addr}");
    log!(
        "serve";
        "{} ({} routes) - Ctrl+C to stop",
        url,
        site.routes.len()
    );
    for route in site.routes.iter() {
        crate::debug!("serve"; "{} -> {}", route.url_path, route.source.display());
    }

    if site.config.serve.open {
        open_browser(&url);
    }

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &site) {
            log!("serve"; "request error: {e:#}");
        }
    }

    // incoming_requests() returns once unblock() drains the listener
    log!("serve"; "server stopped");
    Ok(())
}

/// Handle a single HTTP request.
fn handle_request(request: Request, site: &Site) -> Result<()> {
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let url = request.url().to_string();
    match decide(site, &url) {
        Dispatch::Asset(file) => {
            response::respond_file(request, &file).with_context(|| format!("GET {url}"))
        }
        Dispatch::Page(route) => match render::render(route, site) {
            Ok(html) => response::respond_html(request, html),
            Err(e) => {
                log!("render"; "{}: {e}", route.url_path);
                response::respond_render_error(request, &e)
            }
        },
        Dispatch::NotFound => response::respond_not_found(request),
    }
}
