//! HTTP-specific error types.
//!
//! This module contains error types for the transport layer:
//!
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! Status-code classification (404 vs. general API errors) happens one layer
//! up, in [`ApiError`](crate::rest::ApiError); the types here only cover
//! transport and request-shape failures.

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent if its shape is inconsistent, such as
/// a POST without a body or a multipart body that is not a JSON object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying its format.
    #[error("Cannot set a body without also setting body_format.")]
    MissingBodyFormat,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart body must be a JSON object so its fields can become form parts.
    #[error("Multipart bodies must be JSON objects.")]
    MultipartRequiresObject,
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to distinguish connectivity failures from
/// validation failures:
///
/// ```rust,ignore
/// match client.request(request).await {
///     Ok(response) => { /* inspect response.code */ }
///     Err(HttpError::Network(e)) => { /* connectivity loss */ }
///     Err(HttpError::InvalidRequest(e)) => { /* programmer error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
