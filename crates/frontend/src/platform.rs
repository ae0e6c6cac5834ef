//! Capability seams between page logic and the browser.
//!
//! The logout flow and the auth guard only ever see these traits, so tests
//! drive them with doubles instead of a real window.

use async_trait::async_trait;
use panel_http::{LogoutResponse, StatusResponse};

use crate::services::AuthServiceError;

/// Toast severity, rendered as a CSS class token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// The CSS token for this severity
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Shows transient notifications to the viewer
pub trait Notifier {
    fn notify(&self, message: &str, level: ToastLevel);
}

/// Moves the viewer to another page
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Blocking yes/no prompt
pub trait ConfirmDialog {
    fn confirm(&self, message: &str) -> bool;
}

/// The session endpoints, as page flows consume them
#[async_trait(?Send)]
pub trait SessionApi {
    async fn logout(&self) -> Result<LogoutResponse, AuthServiceError>;
    async fn status(&self) -> Result<StatusResponse, AuthServiceError>;
}
