//! HTTP client for API communication.
//!
//! This module provides the [`HttpClient`] type, a thin transport over
//! reqwest that joins request paths onto the configured base URL, merges
//! authentication headers, and parses response bodies as JSON. Every call
//! is a single synchronous request/response exchange; there is no retry
//! loop, caching, or connection-level state shared between calls.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{BodyFormat, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AuthHeaders, ClientConfig};

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the configured API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - Per-request authentication headers via the configured [`AuthHeaders`]
/// - JSON and multipart/form-data body encoding
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g. `https://api.example.com`), without a trailing slash.
    base_url: String,
    /// Headers included in every request.
    default_headers: HashMap<String, String>,
    /// Authentication provider, consulted on each request.
    auth: Arc<dyn AuthHeaders>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS initialization
    /// failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}rest-model v{LIB_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_str().to_string(),
            default_headers,
            auth: config.auth_arc(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the API.
    ///
    /// The response is returned for any HTTP status; callers classify the
    /// status code themselves. The body is parsed as JSON, with unparseable
    /// bodies preserved under a `raw_body` key.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network or connection error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!(
            "{}/{}",
            self.base_url,
            request.path.trim_start_matches('/')
        );

        // Merge headers: defaults, then auth, then per-request extras.
        let mut headers = self.default_headers.clone();
        for (key, value) in self.auth.auth_headers() {
            headers.insert(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        if let Some(content_type) = request.body_format.and_then(|format| format.content_type()) {
            headers.insert("Content-Type".to_string(), content_type.to_string());
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = match request.body_format {
                Some(BodyFormat::Multipart) => req_builder.multipart(multipart_form(body)),
                _ => req_builder.body(body.to_string()),
            };
        }

        tracing::debug!(method = %request.http_method, %url, "dispatching request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                tracing::warn!(code, "response body is not valid JSON");
                serde_json::json!({ "raw_body": body_text })
            })
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap` with lowercased names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

/// Encodes a JSON object's top-level fields as multipart text parts.
///
/// Null fields are omitted; non-string scalars and nested values are
/// stringified as JSON.
fn multipart_form(body: &Value) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();

    if let Value::Object(map) = body {
        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            form = form.text(key.clone(), text);
        }
    }

    form
}
