//! HTTP client types.
//!
//! This module provides the fetch primitive the CRUD accessors sit on:
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: A response with a decoded JSON body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpError`]: Everything that can go wrong during one round trip
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_crud::clients::{HttpClient, HttpMethod, HttpRequest};
//! use rest_crud::ClientConfig;
//!
//! let client = HttpClient::new(&ClientConfig::default())?;
//! let request = HttpRequest::builder(HttpMethod::Get, "https://api.example.com/cats")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Every request is attempted exactly once. Non-2xx responses become
//! [`HttpError::Response`]; there is no retry or backoff.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, JSON_CONTENT_TYPE, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
