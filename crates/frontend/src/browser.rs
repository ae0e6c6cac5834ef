//! Browser-backed implementations of the platform capabilities

use crate::platform::{ConfirmDialog, Navigator, Notifier, ToastLevel};
use crate::toast::show_toast_with_level;

/// The real browser window
#[derive(Clone, Copy, Default)]
pub struct Browser;

impl Browser {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for Browser {
    fn notify(&self, message: &str, level: ToastLevel) {
        show_toast_with_level(message, level);
    }
}

impl Navigator for Browser {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

impl ConfirmDialog for Browser {
    fn confirm(&self, message: &str) -> bool {
        confirm_action(message)
    }
}

/// Pass-through to the platform confirmation dialog. An unavailable
/// dialog (headless contexts) counts as declined.
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Path of the page currently shown, empty when there is no window
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
