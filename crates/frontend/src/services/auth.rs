//! Authentication API service

use async_trait::async_trait;
use panel_http::{ClientError, LogoutResponse, StatusResponse};
use thiserror::Error;

use crate::client::get_client;
use crate::platform::SessionApi;

/// How a session request failed, as far as page flows care: the logout
/// flow shows a different toast for each of these.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The request never produced a usable response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered and refused
    #[error("{0}")]
    Rejected(String),
}

impl From<ClientError> for AuthServiceError {
    fn from(err: ClientError) -> Self {
        if err.is_transport() {
            Self::Network(err.to_string())
        } else {
            Self::Rejected(err.message())
        }
    }
}

/// Authentication API service backed by the global client
#[derive(Clone, Copy, Default)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl SessionApi for AuthApiService {
    async fn logout(&self) -> Result<LogoutResponse, AuthServiceError> {
        let client = get_client().map_err(|e| AuthServiceError::Network(e.to_string()))?;
        client.logout().await.map_err(Into::into)
    }

    async fn status(&self) -> Result<StatusResponse, AuthServiceError> {
        let client = get_client().map_err(|e| AuthServiceError::Network(e.to_string()))?;
        client.auth_status().await.map_err(Into::into)
    }
}
