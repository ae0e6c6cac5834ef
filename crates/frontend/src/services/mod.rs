//! API services for the page flows

pub mod auth;

pub use auth::{AuthApiService, AuthServiceError};
