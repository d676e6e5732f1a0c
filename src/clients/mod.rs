//! HTTP transport layer.
//!
//! This module contains the low-level HTTP machinery the REST layer is
//! built on: request and response types, the transport client, and the
//! transport error hierarchy. These types are exported for users who need
//! to make requests outside the resource abstraction.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, LIB_VERSION};
pub use http_request::{BodyFormat, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
