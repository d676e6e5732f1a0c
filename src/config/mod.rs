//! Configuration types for the REST client.
//!
//! This module provides the types used to point the library at a remote API:
//!
//! - [`ClientConfig`]: the main configuration struct shared by all clients
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`]
//! - [`BaseUrl`]: a validated base URL newtype
//! - [`AuthHeaders`]: the authentication extension point
//!
//! # Example
//!
//! ```rust
//! use rest_model::{BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_str(), "https://api.example.com");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;

/// A validated API base URL.
///
/// Construction parses the value and requires an absolute http(s) URL with
/// a host. A trailing slash is stripped so path joining is unambiguous.
///
/// # Example
///
/// ```rust
/// use rest_model::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_str(), "https://api.example.com");
///
/// assert!(BaseUrl::new("example.com").is_err());
/// assert!(BaseUrl::new("ftp://example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new `BaseUrl`, validating the value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an
    /// absolute http(s) URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();

        let parsed = reqwest::Url::parse(&url)
            .map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Returns the URL as a string slice, without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extension point for authentication headers.
///
/// Implementors return a map of header name to value which is merged into
/// every outgoing request. The provider is consulted on each request, so
/// implementations may rotate credentials between calls.
///
/// The default provider is [`NoAuth`], which returns no headers.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use rest_model::AuthHeaders;
///
/// struct TokenAuth {
///     token: String,
/// }
///
/// impl AuthHeaders for TokenAuth {
///     fn auth_headers(&self) -> HashMap<String, String> {
///         HashMap::from([(
///             "Authorization".to_string(),
///             format!("Bearer {}", self.token),
///         )])
///     }
/// }
/// ```
pub trait AuthHeaders: Send + Sync {
    /// Returns the headers to attach to a request.
    fn auth_headers(&self) -> HashMap<String, String>;
}

/// The default [`AuthHeaders`] provider: no authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl AuthHeaders for NoAuth {
    fn auth_headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Configuration shared by resource and collection clients.
///
/// Holds the API base URL, the authentication provider, and an optional
/// User-Agent prefix. The config is cheap to clone and safe to share
/// across async tasks.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: BaseUrl,
    auth: Arc<dyn AuthHeaders>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the configured authentication provider.
    #[must_use]
    pub fn auth(&self) -> &dyn AuthHeaders {
        self.auth.as_ref()
    }

    pub(crate) fn auth_arc(&self) -> Arc<dyn AuthHeaders> {
        Arc::clone(&self.auth)
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish_non_exhaustive()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// The only required field is `base_url`. Authentication defaults to
/// [`NoAuth`] and no User-Agent prefix is set.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use rest_model::{BaseUrl, ClientConfig, NoAuth};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .auth(Arc::new(NoAuth))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    auth: Option<Arc<dyn AuthHeaders>>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the authentication provider.
    #[must_use]
    pub fn auth(mut self, auth: Arc<dyn AuthHeaders>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the User-Agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ClientConfig {
            base_url,
            auth: self.auth.unwrap_or_else(|| Arc::new(NoAuth)),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
