//! Startup authentication guard.
//!
//! Runs once per page load. On any failure the guard logs and stays put:
//! an unreachable status endpoint must not lock viewers out, even though
//! admin pages go unprotected for that window.

use crate::config::PanelConfig;
use crate::platform::{Navigator, SessionApi};

/// Query the session status and send unauthenticated viewers on admin
/// pages back to the login page. Skips entirely on the login page itself.
pub async fn check_auth_status(path: &str, api: &dyn SessionApi, navigator: &dyn Navigator) {
    if path == PanelConfig::LOGIN_PATH {
        return;
    }

    match api.status().await {
        Ok(status) => {
            if !status.authenticated && path.starts_with(PanelConfig::ADMIN_PREFIX) {
                navigator.navigate(PanelConfig::LOGIN_PATH);
            }
        }
        Err(err) => {
            // fail open: no redirect when the status check cannot complete
            log::error!("auth status check failed: {err}");
        }
    }
}
