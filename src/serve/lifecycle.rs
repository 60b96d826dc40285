//! Server lifecycle: signal handling and bounded graceful shutdown.
//!
//! On SIGINT the listener stops accepting (`Server::unblock`), the accept
//! loop drains the request in flight, and the process exits once the loop
//! returns. A detached grace timer bounds the drain: connections still open
//! when it fires are torn down by forced process exit.

use crate::log;
use anyhow::Result;
use std::{
    sync::{
        Arc, OnceLock,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};
use tiny_http::Server;

/// Bounded drain window after SIGINT.
pub const GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// HTTP server reference for graceful shutdown
static SERVER: OnceLock<Arc<Server>> = OnceLock::new();

/// Setup the global Ctrl+C handler. Call once at program start.
///
/// The handler behavior depends on whether a server has been registered:
/// - Before `register_server()`: nothing to drain, exit immediately
/// - After `register_server()`: unblock the listener and start the grace
///   timer; the accept loop finishes the in-flight request and returns
pub fn setup_shutdown_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if let Some(server) = SERVER.get() {
            log!("serve"; "shutting down...");
            server.unblock();

            thread::spawn(|| {
                thread::sleep(GRACE_PERIOD);
                log!("serve"; "grace period elapsed, terminating open connections");
                std::process::exit(1);
            });
        } else {
            std::process::exit(0);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Register the HTTP server for graceful shutdown.
///
/// Call this after binding the server, before entering the request loop.
pub fn register_server(server: Arc<Server>) {
    let _ = SERVER.set(server);
}

/// Check if shutdown has been requested.
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_flag() {
        assert!(!is_shutdown());

        SHUTDOWN.store(true, Ordering::SeqCst);
        assert!(is_shutdown());

        SHUTDOWN.store(false, Ordering::SeqCst);
    }

    #[test]
    fn test_grace_period_is_bounded() {
        assert_eq!(GRACE_PERIOD, Duration::from_secs(5));
    }
}
