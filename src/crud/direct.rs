//! A lean CRUD accessor set whose errors propagate to the caller.
//!
//! [`DirectCrud`] exposes the same operations as
//! [`CrudAccessors`](crate::crud::CrudAccessors) but has no response
//! transforms and no error handler: each operation returns
//! `Result<_, CrudError>` and the decoded body is deserialized as-is.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::crud::endpoint::{with_identifier, Id};
use crate::crud::errors::CrudError;
use crate::crud::operation::Operation;
use crate::crud::options::DirectCrudOptions;
use crate::error::ConfigError;

/// Bound CRUD operations for one endpoint; failures are returned as `Err`.
///
/// # Example
///
/// ```rust,ignore
/// use rest_crud::crud::{DirectCrud, DirectCrudOptions};
///
/// let cats = DirectCrud::<Cat>::new(client, "/cats", DirectCrudOptions::new())?;
/// let tom = cats.get_single(7).await?;
/// ```
#[derive(Debug)]
pub struct DirectCrud<T> {
    client: HttpClient,
    endpoint: String,
    headers: HashMap<String, String>,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for DirectCrud<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T> DirectCrud<T>
where
    T: DeserializeOwned,
{
    /// Binds `endpoint` and `options` to `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] for an empty endpoint, or a
    /// header error if a configured header is malformed.
    pub fn new(
        client: HttpClient,
        endpoint: impl Into<String>,
        options: DirectCrudOptions,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        options.validate()?;

        Ok(Self {
            client,
            endpoint,
            headers: options.headers().clone(),
            _resource: PhantomData,
        })
    }

    /// Returns the collection endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Lists the collection: `GET endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError`] if the request fails or the body does not match `Vec<T>`.
    pub async fn get_all(&self) -> Result<Vec<T>, CrudError> {
        self.execute(Operation::GetAll, self.endpoint.clone(), None::<&Value>)
            .await
    }

    /// Fetches one resource: `GET endpoint/id`.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError`] if the request fails or the body does not match `T`.
    pub async fn get_single(&self, id: impl Into<Id>) -> Result<T, CrudError> {
        let path = with_identifier(&self.endpoint, id);
        self.execute(Operation::GetSingle, path, None::<&Value>).await
    }

    /// Creates a resource: `POST endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError`] if the body cannot be serialized, the request
    /// fails, or the response does not match `T`.
    pub async fn post<B>(&self, body: &B) -> Result<T, CrudError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Operation::Post, self.endpoint.clone(), Some(body))
            .await
    }

    /// Partially updates a resource: `PATCH endpoint/id`.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn patch<B>(&self, id: impl Into<Id>, body: &B) -> Result<T, CrudError>
    where
        B: Serialize + ?Sized,
    {
        let path = with_identifier(&self.endpoint, id);
        self.execute(Operation::Patch, path, Some(body)).await
    }

    /// Replaces a resource: `PUT endpoint/id`.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn put<B>(&self, id: impl Into<Id>, body: &B) -> Result<T, CrudError>
    where
        B: Serialize + ?Sized,
    {
        let path = with_identifier(&self.endpoint, id);
        self.execute(Operation::Put, path, Some(body)).await
    }

    /// Alias of [`put`](Self::put).
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn replace<B>(&self, id: impl Into<Id>, body: &B) -> Result<T, CrudError>
    where
        B: Serialize + ?Sized,
    {
        self.put(id, body).await
    }

    /// Deletes a resource: `DELETE endpoint/id`, returning the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Http`] if the request fails.
    pub async fn remove(&self, id: impl Into<Id>) -> Result<Value, CrudError> {
        let path = with_identifier(&self.endpoint, id);
        self.execute(Operation::Remove, path, None::<&Value>).await
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

        serde_json::from_value(response.body)
            .map_err(|source| CrudError::Deserialize { operation, source })
    }
}
