//! Session termination flow

use crate::config::PanelConfig;
use crate::platform::{ConfirmDialog, Navigator, Notifier, SessionApi, ToastLevel};
use crate::services::AuthServiceError;

/// Toast when the server refused to end the session
const LOGOUT_FAILED_MESSAGE: &str = "Logout failed";

/// Toast when the logout request never reached the server
const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Confirm with the viewer, end the session server-side, and leave for
/// the login page. Failures surface as toasts; nothing is retried.
pub async fn logout(
    api: &dyn SessionApi,
    dialog: &dyn ConfirmDialog,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) {
    if !dialog.confirm(PanelConfig::LOGOUT_PROMPT) {
        return;
    }

    match api.logout().await {
        Ok(response) if response.success => navigator.navigate(PanelConfig::LOGIN_PATH),
        Ok(_) | Err(AuthServiceError::Rejected(_)) => {
            notifier.notify(LOGOUT_FAILED_MESSAGE, ToastLevel::Error);
        }
        Err(AuthServiceError::Network(_)) => {
            notifier.notify(NETWORK_ERROR_MESSAGE, ToastLevel::Error);
        }
    }
}

/// Logout as pages trigger it, wired to the real browser
pub async fn browser_logout() {
    let browser = crate::browser::Browser::new();
    logout(
        &crate::services::AuthApiService::new(),
        &browser,
        &browser,
        &browser,
    )
    .await;
}
