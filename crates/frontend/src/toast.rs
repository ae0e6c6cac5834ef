//! Transient toast notifications.
//!
//! The host page renders one empty container with id `toast`; this module
//! owns its text and class attribute entirely. Pages without the container
//! get a silent no-op.

use gloo::timers::callback::Timeout;

use crate::config::PanelConfig;
use crate::platform::ToastLevel;

/// Show an info toast
pub fn show_toast(message: &str) {
    show_toast_with_level(message, ToastLevel::Info);
}

/// Show a toast with an explicit severity.
///
/// Every call schedules its own hide timer and earlier timers are never
/// cancelled, so overlapping toasts disappear when the earliest timer
/// fires even if a later message is still showing.
pub fn show_toast_with_level(message: &str, level: ToastLevel) {
    let element = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PanelConfig::TOAST_ELEMENT_ID))
    {
        Some(element) => element,
        None => return,
    };

    element.set_text_content(Some(message));
    element.set_class_name(&toast_class(level));

    Timeout::new(PanelConfig::TOAST_DURATION_MS, move || {
        let _ = element.class_list().remove_1("show");
    })
    .forget();
}

/// Class attribute of a visible toast
fn toast_class(level: ToastLevel) -> String {
    format!("toast {} show", level.as_str())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn class_carries_severity_token_and_show() {
        assert_eq!(toast_class(ToastLevel::Info), "toast info show");
        assert_eq!(toast_class(ToastLevel::Error), "toast error show");
        assert_eq!(toast_class(ToastLevel::default()), "toast info show");
    }
}
