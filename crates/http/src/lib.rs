//! HTTP client layer for the panel admin frontend.
//!
//! Compiles for native targets and wasm32; the frontend crate wires it to
//! the browser, tests exercise it against a local mock server.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AdminClient, AdminClientBuilder, CallOptions};
pub use types::{LogoutResponse, StatusResponse};
