//! Error types for client configuration.
//!
//! This module contains error types raised when building a [`ClientConfig`].
//! Configuration errors are programmer errors: they surface immediately from
//! the builder and are never caught internally.
//!
//! [`ClientConfig`]: crate::config::ClientConfig
//!
//! # Example
//!
//! ```rust
//! use rest_model::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant carries enough context to produce a clear, actionable
/// message. All constructors validate eagerly so that a misconfigured
/// client fails at startup, not on the first request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not a valid absolute http(s) URL.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL (e.g. 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
