//! Opening game pages in the system web browser.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Hand `url` to the platform opener without waiting for it
///
/// Output is discarded so the opener cannot draw over the TUI.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    debug!("Opening {} in browser", url);
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
