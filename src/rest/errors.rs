//! Errors surfaced by the REST layer.
//!
//! Schema problems ([`SchemaError`]) are reported when a client is
//! constructed, before any request can be made. Everything that can go
//! wrong while performing an operation is an [`ApiError`].

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::operations::Operation;

/// A structural problem in a resource or collection schema.
///
/// These are caught when the client is constructed, so a schema mistake
/// fails fast instead of surfacing on the first request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A resource enables both `Get` and `GetOverPost`; only one read mode
    /// may be active.
    #[error("Resource '{resource}' cannot enable both get and get_over_post.")]
    ConflictingGetModes {
        /// The resource name.
        resource: &'static str,
    },

    /// A collection declares an operation other than `Get`/`GetOverPost`.
    #[error("Collection '{collection}' cannot enable operation '{operation}'. Collections are read-only.")]
    InvalidCollectionOperation {
        /// The collection name.
        collection: &'static str,
        /// The offending operation.
        operation: Operation,
    },

    /// A declared path variable has no `{variable}` placeholder in the path
    /// template.
    #[error("Path variable '{variable}' does not appear in path template '{template}'.")]
    UnknownPathVariable {
        /// The declared variable.
        variable: &'static str,
        /// The path template it is missing from.
        template: &'static str,
    },
}

/// An error performing a REST operation.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered 404 for the addressed representation.
    #[error("Resource '{resource}' was not found.")]
    NotFound {
        /// The resource or collection name.
        resource: &'static str,
    },

    /// The requested operation is not enabled in the schema.
    #[error("Operation '{operation}' is not enabled for '{resource}'.")]
    OperationNotEnabled {
        /// The resource or collection name.
        resource: &'static str,
        /// The operation that was attempted.
        operation: Operation,
    },

    /// A declared path variable could be resolved from neither the instance
    /// nor the call parameters.
    #[error("Missing value for path variable '{variable}' of '{resource}'.")]
    MissingPathVariable {
        /// The resource or collection name.
        resource: &'static str,
        /// The unresolved variable.
        variable: &'static str,
    },

    /// The server answered with a non-success status other than 404.
    #[error("API request failed with status {code}: {body}")]
    Api {
        /// The HTTP status code.
        code: u16,
        /// The response body, rendered as JSON text.
        body: String,
    },

    /// The response body could not be deserialized into the resource type.
    #[error("Failed to decode response for '{resource}': {source}")]
    Decode {
        /// The resource or collection name.
        resource: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The instance could not be serialized for upload.
    #[error("Failed to serialize '{resource}' for upload: {source}")]
    Serialize {
        /// The resource name.
        resource: &'static str,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A transport-level failure: request validation, connection, or
    /// protocol errors.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Classifies a non-success HTTP response.
    ///
    /// A 404 maps to [`ApiError::NotFound`]; every other status becomes
    /// [`ApiError::Api`] carrying the status code and body text.
    #[must_use]
    pub fn from_response(code: u16, body: &Value, resource: &'static str) -> Self {
        if code == 404 {
            Self::NotFound { resource }
        } else {
            Self::Api {
                code,
                body: body.to_string(),
            }
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchemaError>();
    assert_send_sync::<ApiError>();
};
