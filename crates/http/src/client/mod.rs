//! Panel API client

pub mod auth;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder, Method, header};
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Fallback when the server gives no structured error message
const GENERIC_FAILURE: &str = "request failed";

/// Panel API client
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
}

impl AdminClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> AdminClientBuilder {
        AdminClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for an API path
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors.
    ///
    /// Non-success statuses carry the server's own message when the body
    /// has an `error` or `detail` string field.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            tracing::debug!(status = status.as_u16(), "server returned error status");
            let message = match response.json::<Value>().await {
                Ok(body) => server_error_message(&body),
                Err(_) => GENERIC_FAILURE.to_string(),
            };
            Err(ClientError::from_status(status, message))
        }
    }

    /// Issue a request and normalize the outcome for page scripts.
    ///
    /// Every failure, whether a rejection from the server or a transport
    /// error, comes back as `Err(message)`. Nothing panics and nothing
    /// richer than a string escapes, so call sites stay uniform.
    pub async fn api_call(&self, path: &str, options: CallOptions) -> Result<Value, String> {
        let CallOptions {
            method,
            body,
            headers,
        } = options;

        let mut request = self
            .request(method, path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }
        // applied last so caller headers win on key collision
        request = request.headers(headers);

        self.execute(request).await.map_err(|err| err.message())
    }
}

fn server_error_message(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("detail").and_then(Value::as_str))
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// Options for a generic API call
#[derive(Debug, Default)]
pub struct CallOptions {
    method: Method,
    body: Option<Value>,
    headers: header::HeaderMap,
}

impl CallOptions {
    /// New options with the GET method and no body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a JSON request body
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header, overriding the default content type on collision
    pub fn header(mut self, name: header::HeaderName, value: header::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Builder for AdminClient
#[derive(Default)]
pub struct AdminClientBuilder {
    base_url: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AdminClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (native targets only; the browser owns
    /// request lifetimes on wasm)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AdminClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder =
                client_builder.user_agent(concat!("panel-client/", env!("CARGO_PKG_VERSION")));
        }

        let client = client_builder.build()?;

        Ok(AdminClient { client, base_url })
    }
}
