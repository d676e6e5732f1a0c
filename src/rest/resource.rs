//! Declarative resource schemas and the client that drives them.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{BodyFormat, HttpClient, HttpMethod, HttpRequest};
use crate::config::ClientConfig;
use crate::rest::errors::{ApiError, SchemaError};
use crate::rest::operations::Operation;
use crate::rest::path::resolve_path;

/// A single remote representation, described declaratively.
///
/// Implementors give the resource a name, a path template, the set of
/// enabled operations, and a serde shape. The associated [`ResourceClient`]
/// performs the operations.
///
/// # Example
///
/// ```no_run
/// use rest_model::{BodyFormat, Operation, Resource};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Article {
///     id: u64,
///     title: String,
/// }
///
/// impl Resource for Article {
///     const NAME: &'static str = "article";
///     const PATH: &'static str = "/articles/{id}";
///     const PATH_VARIABLES: &'static [&'static str] = &["id"];
///     const OPERATIONS: &'static [Operation] = &[Operation::Get, Operation::Delete];
///
///     fn path_value(&self, variable: &str) -> Option<String> {
///         (variable == "id").then(|| self.id.to_string())
///     }
/// }
/// ```
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Human-readable resource name, used in error messages.
    const NAME: &'static str;

    /// Path template relative to the base URL, with `{variable}`
    /// placeholders. An empty path disables all operations.
    const PATH: &'static str;

    /// Variables that must be substituted into [`Self::PATH`].
    const PATH_VARIABLES: &'static [&'static str] = &[];

    /// The operations this resource enables.
    const OPERATIONS: &'static [Operation];

    /// How instances are encoded when uploaded.
    const SEND_AS: BodyFormat = BodyFormat::Json;

    /// Resolves a path variable from the instance's own fields.
    ///
    /// Instance values take precedence over call parameters during path
    /// resolution. The default resolves nothing.
    fn path_value(&self, variable: &str) -> Option<String> {
        let _ = variable;
        None
    }
}

/// Client for a single [`Resource`] type.
///
/// Construction validates the resource schema; operations whose schema is
/// invalid never reach the point of making a request.
pub struct ResourceClient<T: Resource> {
    http: HttpClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceClient<T> {
    /// Creates a client for `T`, validating its schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the resource enables both `Get` and
    /// `GetOverPost`, or declares a path variable that has no placeholder
    /// in the path template.
    pub fn new(config: &ClientConfig) -> Result<Self, SchemaError> {
        let has_get = T::OPERATIONS.contains(&Operation::Get);
        let has_get_over_post = T::OPERATIONS.contains(&Operation::GetOverPost);
        if has_get && has_get_over_post {
            return Err(SchemaError::ConflictingGetModes { resource: T::NAME });
        }

        verify_path_variables(T::PATH, T::PATH_VARIABLES)?;

        Ok(Self {
            http: HttpClient::new(config),
            _marker: PhantomData,
        })
    }

    /// Fetches a single instance.
    ///
    /// Parameters resolve path variables first; whatever remains travels as
    /// query parameters (or, for `GetOverPost` resources, as a JSON body on
    /// a POST request).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if neither read mode is enabled, a path variable
    /// is missing, the server answers a non-success status, the response
    /// cannot be decoded, or the request fails at the transport level.
    pub async fn get(&self, params: HashMap<String, String>) -> Result<T, ApiError> {
        let over_post = T::OPERATIONS.contains(&Operation::GetOverPost);
        if T::PATH.is_empty() || !(over_post || T::OPERATIONS.contains(&Operation::Get)) {
            return Err(ApiError::OperationNotEnabled {
                resource: T::NAME,
                operation: Operation::Get,
            });
        }

        let mut params = params;
        let path = resolve_path(T::NAME, T::PATH, T::PATH_VARIABLES, |_| None, &mut params)?;

        let request = if over_post {
            HttpRequest::builder(HttpMethod::Post, path)
                .body(params_to_body(&params))
                .body_format(BodyFormat::Json)
                .build()
                .map_err(crate::clients::HttpError::from)?
        } else {
            let mut builder = HttpRequest::builder(HttpMethod::Get, path);
            if !params.is_empty() {
                builder = builder.query(params);
            }
            builder.build().map_err(crate::clients::HttpError::from)?
        };

        tracing::debug!(resource = T::NAME, over_post, "fetching resource");

        let response = self.http.request(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(response.code, &response.body, T::NAME));
        }

        serde_json::from_value(response.body).map_err(|source| ApiError::Decode {
            resource: T::NAME,
            source,
        })
    }

    /// Uploads an instance, discarding the response body.
    ///
    /// Uploads travel as POST requests encoded per [`Resource::SEND_AS`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `Put` is not enabled, a path variable is
    /// missing, the instance cannot be serialized, the server answers a
    /// non-success status, or the request fails at the transport level.
    pub async fn put(
        &self,
        instance: &T,
        params: HashMap<String, String>,
    ) -> Result<(), ApiError> {
        self.send_put(instance, params).await.map(|_| ())
    }

    /// Uploads an instance and decodes the response body as `R`.
    ///
    /// # Errors
    ///
    /// As [`ResourceClient::put`], plus [`ApiError::Decode`] if the response
    /// body does not match `R`.
    pub async fn put_returning<R: DeserializeOwned>(
        &self,
        instance: &T,
        params: HashMap<String, String>,
    ) -> Result<R, ApiError> {
        let body = self.send_put(instance, params).await?;
        serde_json::from_value(body).map_err(|source| ApiError::Decode {
            resource: T::NAME,
            source,
        })
    }

    async fn send_put(
        &self,
        instance: &T,
        params: HashMap<String, String>,
    ) -> Result<serde_json::Value, ApiError> {
        if T::PATH.is_empty() || !T::OPERATIONS.contains(&Operation::Put) {
            return Err(ApiError::OperationNotEnabled {
                resource: T::NAME,
                operation: Operation::Put,
            });
        }

        let mut params = params;
        let path = resolve_path(
            T::NAME,
            T::PATH,
            T::PATH_VARIABLES,
            |variable| instance.path_value(variable),
            &mut params,
        )?;

        let body = serde_json::to_value(instance).map_err(|source| ApiError::Serialize {
            resource: T::NAME,
            source,
        })?;

        let mut builder = HttpRequest::builder(Operation::Put.http_method(), path)
            .body(body)
            .body_format(T::SEND_AS);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        let request = builder.build().map_err(crate::clients::HttpError::from)?;

        tracing::debug!(resource = T::NAME, "uploading resource");

        let response = self.http.request(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(response.code, &response.body, T::NAME));
        }

        Ok(response.body)
    }

    /// Deletes the representation addressed by the instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `Delete` is not enabled, a path variable is
    /// missing, the server answers a non-success status, or the request
    /// fails at the transport level.
    pub async fn delete(
        &self,
        instance: &T,
        params: HashMap<String, String>,
    ) -> Result<(), ApiError> {
        if T::PATH.is_empty() || !T::OPERATIONS.contains(&Operation::Delete) {
            return Err(ApiError::OperationNotEnabled {
                resource: T::NAME,
                operation: Operation::Delete,
            });
        }

        let mut params = params;
        let path = resolve_path(
            T::NAME,
            T::PATH,
            T::PATH_VARIABLES,
            |variable| instance.path_value(variable),
            &mut params,
        )?;

        let mut builder = HttpRequest::builder(HttpMethod::Delete, path);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        let request = builder.build().map_err(crate::clients::HttpError::from)?;

        tracing::debug!(resource = T::NAME, "deleting resource");

        let response = self.http.request(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(response.code, &response.body, T::NAME));
        }

        Ok(())
    }
}

impl<T: Resource> std::fmt::Display for ResourceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceClient<{}>", T::NAME)
    }
}

impl<T: Resource> std::fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &T::NAME)
            .field("http", &self.http)
            .finish()
    }
}

/// Checks that every declared variable has a placeholder in the template.
///
/// An empty template disables all operations, so its variables are not
/// checked.
pub(crate) fn verify_path_variables(
    template: &'static str,
    variables: &'static [&'static str],
) -> Result<(), SchemaError> {
    if template.is_empty() {
        return Ok(());
    }
    for &variable in variables {
        if !template.contains(&format!("{{{variable}}}")) {
            return Err(SchemaError::UnknownPathVariable { variable, template });
        }
    }
    Ok(())
}

/// Encodes leftover string parameters as a JSON object body.
pub(crate) fn params_to_body(params: &HashMap<String, String>) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = params
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect();
    serde_json::Value::Object(map)
}
