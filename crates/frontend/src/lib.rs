//! Browser-side glue for the server-rendered panel admin pages.
//!
//! Loaded once per page. Pages call the free functions (toasts, date
//! formatting, the normalized API helper, logout); the auth guard runs by
//! itself after load and sends unauthenticated viewers on admin pages back
//! to the login page.

pub mod browser;
pub mod client;
pub mod config;
pub mod datetime;
pub mod guard;
pub mod platform;
pub mod services;
pub mod session;
pub mod toast;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_doubles;

pub use browser::{Browser, confirm_action, current_path};
pub use client::{api_call, get_client};
pub use config::PanelConfig;
pub use datetime::format_date_time;
pub use panel_http::CallOptions;
pub use platform::ToastLevel;
pub use session::browser_logout;
pub use toast::{show_toast, show_toast_with_level};

/// Page-load entry point: set up console logging, then run the auth guard
/// once. The wasm loader of the host page invokes this automatically.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    use services::AuthApiService;

    wasm_logger::init(wasm_logger::Config::default());

    wasm_bindgen_futures::spawn_local(async {
        let browser = Browser::new();
        guard::check_auth_status(&current_path(), &AuthApiService::new(), &browser).await;
    });
}
