//! Client configuration and initialization

use once_cell::sync::Lazy;
use panel_http::{AdminClient, CallOptions, ClientError};
use serde_json::Value;
use std::sync::Mutex;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<AdminClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the shared client instance, building it on first use
pub fn get_client() -> Result<AdminClient, ClientError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = AdminClient::builder().base_url(get_base_url()).build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Issue a normalized API call with the shared client.
///
/// A client that cannot be built folds into the same `Err(message)` shape
/// as every other failure, so page scripts never see a panic or a typed
/// error.
pub async fn api_call(path: &str, options: CallOptions) -> Result<Value, String> {
    let client = get_client().map_err(|err| err.message())?;
    client.api_call(path, options).await
}
