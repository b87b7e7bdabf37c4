//! The CRUD accessor set with response transforms and error interception.
//!
//! [`CrudAccessors`] binds one collection endpoint, one [`HttpClient`] and one
//! [`CrudOptions`] into six async operations plus the `delete` and `replace`
//! aliases. Every operation performs exactly one request.
//!
//! # Failure Behavior
//!
//! Failures never surface as `Err`. Network errors, non-2xx statuses, bodies
//! that are not JSON, failing transforms and responses that do not match `T`
//! are all passed once to the configured error handler (by default a
//! `tracing::error!` event), and the operation returns `None`.
//!
//! A caller therefore cannot tell a handled failure from a response that
//! legitimately decoded to nothing by looking at the return value alone. Use
//! [`DirectCrud`](crate::crud::DirectCrud) when errors must propagate.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::ClientConfig;
use crate::crud::endpoint::{with_identifier, with_query_params, Id};
use crate::crud::errors::{default_error_handler, CrudError, ErrorHandler};
use crate::crud::getters::{Accessor, ResolvedGetters};
use crate::crud::operation::Operation;
use crate::crud::options::CrudOptions;
use crate::error::ConfigError;

/// Bound CRUD operations for one collection endpoint.
///
/// Construction resolves the configured response transforms once; the set is
/// immutable afterwards and holds no per-call state, so one instance can be
/// shared freely between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use rest_crud::crud::{CrudAccessors, CrudOptions, Getter};
/// use rest_crud::{BaseUrl, ClientConfig, HttpClient};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize)]
/// struct Cat {
///     name: String,
/// }
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let options = CrudOptions::builder()
///     .header("X-Api-Key", "secret")
///     .accessor(Getter::pointer("/data"))
///     .build()?;
/// let cats = CrudAccessors::<Cat>::new(client, "/cats", options)?;
///
/// let all: Option<Vec<Cat>> = cats.get_all(None).await;
/// let tom: Option<Cat> = cats.post(&json!({"name": "Tom"})).await;
/// ```
pub struct CrudAccessors<T> {
    client: HttpClient,
    endpoint: String,
    headers: HashMap<String, String>,
    getters: ResolvedGetters,
    on_error: ErrorHandler,
    _resource: PhantomData<fn() -> T>,
}

// Verify CrudAccessors is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CrudAccessors<Value>>();
};

/// Creates an accessor set over a default [`HttpClient`].
///
/// The default client has no base URL, so `endpoint` should be absolute
/// (e.g., `https://api.example.com/cats`).
///
/// Construction is the only step that can fail: an empty endpoint is
/// rejected here rather than on every request. Once built, operations never
/// return errors.
///
/// # Errors
///
/// Returns [`CrudError::Config`] for an empty endpoint and
/// [`CrudError::Http`] if the HTTP client cannot be created.
pub fn create_crud_accessors<T>(
    endpoint: impl Into<String>,
    options: CrudOptions,
) -> Result<CrudAccessors<T>, CrudError>
where
    T: DeserializeOwned,
{
    let client = HttpClient::new(&ClientConfig::default())?;
    Ok(CrudAccessors::new(client, endpoint, options)?)
}

impl<T> CrudAccessors<T>
where
    T: DeserializeOwned,
{
    /// Binds `endpoint` and `options` to `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] if `endpoint` is empty.
    pub fn new(
        client: HttpClient,
        endpoint: impl Into<String>,
        options: CrudOptions,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }

        let getters = ResolvedGetters::resolve(options.accessor());
        let on_error: ErrorHandler = match options.on_error() {
            Some(handler) => Arc::clone(handler),
            None => Arc::new(default_error_handler),
        };

        tracing::debug!(
            endpoint = %endpoint,
            accessor = options.accessor().map_or("none", Accessor::kind),
            "created CRUD accessors"
        );

        Ok(Self {
            client,
            endpoint,
            headers: options.headers().clone(),
            getters,
            on_error,
            _resource: PhantomData,
        })
    }

    /// Returns the collection endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the response transforms resolved at construction.
    #[must_use]
    pub const fn getters(&self) -> &ResolvedGetters {
        &self.getters
    }

    /// Lists the collection: `GET endpoint[?params]`.
    ///
    /// `query_params` are pre-encoded `key=value` fragments. Returns `None`
    /// after reporting a failure to the error handler.
    pub async fn get_all(&self, query_params: Option<&[String]>) -> Option<Vec<T>> {
        let path = with_query_params(&self.endpoint, query_params);
        self.run(Operation::GetAll, path, None::<&Value>).await
    }

    /// Fetches one resource: `GET endpoint/id`.
    ///
    /// Returns `None` after reporting a failure to the error handler.
    pub async fn get_single(&self, id: impl Into<Id>) -> Option<T> {
        let path = with_identifier(&self.endpoint, id);
        self.run(Operation::GetSingle, path, None::<&Value>).await
    }

    /// Creates a resource: `POST endpoint` with `body` as JSON.
    ///
    /// `body` may be any serializable partial entity. Returns `None` after
    /// reporting a failure to the error handler.
    pub async fn post<B>(&self, body: &B) -> Option<T>
    where
        B: Serialize + ?Sized,
    {
        self.run(Operation::Post, self.endpoint.clone(), Some(body))
            .await
    }

    /// Partially updates a resource: `PATCH endpoint/id` with `body` as JSON.
    ///
    /// Returns `None` after reporting a failure to the error handler.
    pub async fn patch<B>(&self, id: impl Into<Id>, body: &B) -> Option<T>
    where
        B: Serialize + ?Sized,
    {
        let path = with_identifier(&self.endpoint, id);
        self.run(Operation::Patch, path, Some(body)).await
    }

    /// Replaces a resource: `PUT endpoint/id` with `body` as JSON.
    ///
    /// Returns `None` after reporting a failure to the error handler.
    pub async fn put<B>(&self, id: impl Into<Id>, body: &B) -> Option<T>
    where
        B: Serialize + ?Sized,
    {
        let path = with_identifier(&self.endpoint, id);
        self.run(Operation::Put, path, Some(body)).await
    }

    /// Alias of [`put`](Self::put); uses the `put` transform.
    pub async fn replace<B>(&self, id: impl Into<Id>, body: &B) -> Option<T>
    where
        B: Serialize + ?Sized,
    {
        self.put(id, body).await
    }

    /// Deletes a resource: `DELETE endpoint/id`.
    ///
    /// The (transformed) response body is returned as raw JSON; an empty
    /// body yields `Some(Value::Null)`. Returns `None` after reporting a
    /// failure to the error handler.
    pub async fn remove(&self, id: impl Into<Id>) -> Option<Value> {
        let path = with_identifier(&self.endpoint, id);
        self.run(Operation::Remove, path, None::<&Value>).await
    }

    /// Alias of [`remove`](Self::remove).
    pub async fn delete(&self, id: impl Into<Id>) -> Option<Value> {
        self.remove(id).await
    }

    /// Runs one operation, routing any failure to the error handler.
    async fn run<R, B>(&self, operation: Operation, path: String, body: Option<&B>) -> Option<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.execute(operation, path, body).await {
            Ok(value) => Some(value),
            Err(error) => {
                (self.on_error)(&error);
                None
            }
        }
    }

    async fn execute<R, B>(
        &self,
        operation: Operation,
        path: String,
        body: Option<&B>,
    ) -> Result<R, CrudError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = HttpRequest::builder(operation.http_method(), path);
        if let Some(body) = body {
            let body = serde_json::to_value(body)
                .map_err(|source| CrudError::Serialize { operation, source })?;
            builder = builder.body(body).extra_headers(self.headers.clone());
        }
        let request = builder.build().map_err(HttpError::from)?;

        let response = self.client.request(request).await?;
        let value = self.getters.for_operation(operation).apply(response.body)?;

        serde_json::from_value(value).map_err(|source| CrudError::Deserialize { operation, source })
    }
}

impl<T> Clone for CrudAccessors<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            getters: self.getters.clone(),
            on_error: Arc::clone(&self.on_error),
            _resource: PhantomData,
        }
    }
}

impl<T> fmt::Debug for CrudAccessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudAccessors")
            .field("endpoint", &self.endpoint)
            .field("headers", &self.headers)
            .field("getters", &self.getters)
            .finish_non_exhaustive()
    }
}
