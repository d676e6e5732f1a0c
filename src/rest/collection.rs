//! Read-only collections of resources.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::clients::{BodyFormat, HttpClient, HttpMethod, HttpRequest};
use crate::config::ClientConfig;
use crate::rest::errors::{ApiError, SchemaError};
use crate::rest::operations::Operation;
use crate::rest::path::resolve_path;
use crate::rest::resource::{params_to_body, verify_path_variables, Resource};

/// A listing endpoint whose response is a JSON array of [`Resource`] items.
///
/// Collections are read-only: the only operations a collection may enable
/// are [`Operation::Get`] and [`Operation::GetOverPost`].
///
/// # Example
///
/// ```ignore
/// struct ArticleFeed;
///
/// impl Collection for ArticleFeed {
///     type Item = Article;
///     const NAME: &'static str = "article_feed";
///     const PATH: &'static str = "/feeds/{feed_id}/articles";
///     const PATH_VARIABLES: &'static [&'static str] = &["feed_id"];
/// }
/// ```
pub trait Collection: Send + Sync + Sized {
    /// The resource type of the collection's items.
    type Item: Resource;

    /// Human-readable collection name, used in error messages.
    const NAME: &'static str;

    /// Path template relative to the base URL, with `{variable}`
    /// placeholders. An empty path disables fetching.
    const PATH: &'static str;

    /// Variables that must be substituted into [`Self::PATH`].
    const PATH_VARIABLES: &'static [&'static str] = &[];

    /// The read mode used to fetch the collection.
    const OPERATION: Operation = Operation::Get;
}

/// Client for a [`Collection`] type.
pub struct CollectionClient<C: Collection> {
    http: HttpClient,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Collection> CollectionClient<C> {
    /// Creates a client for `C`, validating its schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the collection enables an operation other
    /// than `Get`/`GetOverPost`, or declares a path variable with no
    /// placeholder in the path template.
    pub fn new(config: &ClientConfig) -> Result<Self, SchemaError> {
        if !matches!(C::OPERATION, Operation::Get | Operation::GetOverPost) {
            return Err(SchemaError::InvalidCollectionOperation {
                collection: C::NAME,
                operation: C::OPERATION,
            });
        }

        verify_path_variables(C::PATH, C::PATH_VARIABLES)?;

        Ok(Self {
            http: HttpClient::new(config),
            _marker: PhantomData,
        })
    }

    /// Fetches the collection's items.
    ///
    /// Parameters resolve path variables first; the remainder travels as
    /// query parameters (or as a JSON body for `GetOverPost` collections).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the path is empty, a path variable is
    /// missing, the server answers a non-success status, the response is
    /// not an array of items, or the request fails at the transport level.
    pub async fn get(&self, params: HashMap<String, String>) -> Result<Vec<C::Item>, ApiError> {
        if C::PATH.is_empty() {
            return Err(ApiError::OperationNotEnabled {
                resource: C::NAME,
                operation: Operation::Get,
            });
        }

        let mut params = params;
        let path = resolve_path(C::NAME, C::PATH, C::PATH_VARIABLES, |_| None, &mut params)?;

        let request = if C::OPERATION == Operation::GetOverPost {
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

        tracing::debug!(collection = C::NAME, "fetching collection");

        let response = self.http.request(request).await?;
        if !response.is_ok() {
            return Err(ApiError::from_response(response.code, &response.body, C::NAME));
        }

        serde_json::from_value(response.body).map_err(|source| ApiError::Decode {
            resource: C::NAME,
            source,
        })
    }
}

impl<C: Collection> std::fmt::Display for CollectionClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CollectionClient<{}>", C::NAME)
    }
}

impl<C: Collection> std::fmt::Debug for CollectionClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionClient")
            .field("collection", &C::NAME)
            .field("http", &self.http)
            .finish()
    }
}
