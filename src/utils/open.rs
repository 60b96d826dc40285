//! Open a URL in the platform's default browser.

use crate::log;
use std::process::Command;

/// Launch the platform opener for `url`. Failures are logged, never fatal.
pub fn open_browser(url: &str) {
    let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start"])
    } else {
        ("xdg-open", &[])
    };

    let result = Command::new(program).args(args).arg(url).spawn();
    if let Err(e) = result {
        log!("serve"; "failed to open browser: {e}");
    }
}
