//! Session endpoint client methods

use super::{AdminClient, error::ClientError};
use crate::types::{LogoutResponse, StatusResponse};
use reqwest::header;

impl AdminClient {
    /// End the current session.
    ///
    /// The body is empty but JSON-typed; the backend expects that from
    /// browser callers.
    pub async fn logout(&self) -> Result<LogoutResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/logout")
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(req).await
    }

    /// Fetch the current authentication status
    pub async fn auth_status(&self) -> Result<StatusResponse, ClientError> {
        let req = self.request(reqwest::Method::GET, "/auth/status");
        self.execute(req).await
    }
}
