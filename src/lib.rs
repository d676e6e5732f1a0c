//! # rest-model
//!
//! A declarative client for JSON REST APIs: describe each remote resource
//! once as a schema, then let the library resolve paths, dispatch the
//! enabled operations, and decode responses.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A validated [`BaseUrl`] newtype and pluggable [`AuthHeaders`] provider
//! - Declarative resource schemas via the [`Resource`] trait
//! - Read-only listing endpoints via the [`Collection`] trait
//! - Path templates with `{variable}` placeholders, resolved locally before
//!   any request is made
//! - JSON and multipart/form-data upload encoding
//! - A single error taxonomy: every operation returns `Result`, whether the
//!   failure is schema-level, network-level, or an API status
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rest_model::{
//!     BaseUrl, ClientConfig, Operation, Resource, ResourceClient,
//! };
//! use serde::{Deserialize, Serialize};
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Article {
//!     id: u64,
//!     title: String,
//! }
//!
//! impl Resource for Article {
//!     const NAME: &'static str = "article";
//!     const PATH: &'static str = "/articles/{id}";
//!     const PATH_VARIABLES: &'static [&'static str] = &["id"];
//!     const OPERATIONS: &'static [Operation] = &[Operation::Get, Operation::Delete];
//!
//!     fn path_value(&self, variable: &str) -> Option<String> {
//!         (variable == "id").then(|| self.id.to_string())
//!     }
//! }
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com")?)
//!     .build()?;
//!
//! let articles = ResourceClient::<Article>::new(&config)?;
//! let article = articles
//!     .get(HashMap::from([("id".to_string(), "5".to_string())]))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Base URLs validate on construction, schemas
//!   validate when a client is created, and path variables resolve before a
//!   request leaves the process
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One failure channel**: Local errors, connection failures, and API
//!   error statuses all surface as `Err`; no sentinel values

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AuthHeaders, BaseUrl, ClientConfig, ClientConfigBuilder, NoAuth};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    BodyFormat, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};

// Re-export REST layer types
pub use rest::{
    ApiError, Collection, CollectionClient, Operation, Resource, ResourceClient, SchemaError,
};
