//! System clipboard access for the share button.
//!
//! `arboard` talks to X11/Wayland/the OS synchronously, so copies run on the
//! blocking pool and report back as an `Action`.

use std::sync::mpsc;

use log::{info, warn};

use crate::core::action::Action;

/// Put `text` on the clipboard.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text)
        .map_err(|e| format!("Clipboard error: {e}"))
}

/// Copy `url` in the background and send `ShareCopied` or `ShareFailed(url)`.
pub fn spawn_copy(url: String, tx: mpsc::Sender<Action>) {
    tokio::task::spawn_blocking(move || {
        let action = match copy_text(&url) {
            Ok(()) => {
                info!("Copied {} to clipboard", url);
                Action::ShareCopied
            }
            Err(e) => {
                warn!("{}; falling back to manual copy", e);
                Action::ShareFailed(url)
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send share result: receiver dropped");
        }
    });
}
