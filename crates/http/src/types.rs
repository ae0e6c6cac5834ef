//! Wire types shared with the panel backend.
//!
//! Fields the frontend does not read are left out; serde ignores them.
//! Missing boolean flags read as false.

use serde::Deserialize;

/// Response from `POST /auth/logout`
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutResponse {
    /// Whether the server actually ended the session
    #[serde(default)]
    pub success: bool,
}

/// Response from `GET /auth/status`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// Whether the viewer has a live session
    #[serde(default)]
    pub authenticated: bool,
}
