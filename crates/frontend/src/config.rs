//! Frontend configuration

/// Fixed UI and routing configuration for the panel pages
pub struct PanelConfig;

impl PanelConfig {
    /// How long a toast stays visible, in milliseconds
    pub const TOAST_DURATION_MS: u32 = 3_000;

    /// Element id of the singleton toast container
    pub const TOAST_ELEMENT_ID: &'static str = "toast";

    /// Path of the login page; the auth guard never runs here
    pub const LOGIN_PATH: &'static str = "/login";

    /// Path prefix of pages that require an authenticated session
    pub const ADMIN_PREFIX: &'static str = "/admin";

    /// Prompt shown before ending the session
    pub const LOGOUT_PROMPT: &'static str = "Are you sure you want to log out?";
}
