//! # rest-crud
//!
//! Typed CRUD accessors for REST collection endpoints, built on an async
//! JSON HTTP client.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`CrudAccessors`]: `get_all`, `get_single`, `post`, `patch`, `put`,
//!   `remove` (plus `replace` and `delete` aliases) bound to one endpoint,
//!   with configurable response transforms and an error handler
//! - [`DirectCrud`]: the same operations returning `Result`, without transforms
//! - Endpoint composition helpers ([`with_identifier`], [`with_query_params`])
//! - Structural JSON checks ([`is_plain_object`], [`has_own_key`])
//! - [`FixedLengthVec`] for sequences of an exact length
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rest_crud::{BaseUrl, ClientConfig, CrudAccessors, CrudOptions, Getter, HttpClient};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Cat {
//!     id: u64,
//!     name: String,
//! }
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let cats = CrudAccessors::<Cat>::new(client, "/cats", CrudOptions::default())?;
//!
//! let created = cats.post(&json!({"name": "Tom"})).await;
//! let page = cats.get_all(Some(&["limit=10".to_string()])).await;
//! let renamed = cats.patch(7, &json!({"name": "Thomas"})).await;
//! ```
//!
//! ## Response Transforms
//!
//! Many APIs wrap payloads (`{"data": ...}`). A [`Getter`] unwraps them, either
//! for every operation or per operation:
//!
//! ```rust
//! use rest_crud::{CrudOptions, Getter, GetterMap, Operation};
//!
//! // Same transform everywhere
//! let uniform = CrudOptions::builder()
//!     .accessor(Getter::pointer("/data"))
//!     .build()
//!     .unwrap();
//!
//! // Only the listing is wrapped; everything else passes through
//! let per_operation = CrudOptions::builder()
//!     .accessor(GetterMap::new().with(Operation::GetAll, Getter::pointer("/items")))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! [`CrudAccessors`] never returns errors: each failure goes to the error
//! handler (default: a `tracing::error!` event) and the operation yields
//! `None`. [`DirectCrud`] returns [`CrudError`] instead.
//!
//! Construction is the one fallible step: [`CrudAccessors::new`] and
//! [`create_crud_accessors`] reject an empty endpoint with
//! [`ConfigError::EmptyEndpoint`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Headers, base URLs and endpoints are checked on construction
//! - **Thread-safe**: All accessor and client types are `Send + Sync`
//! - **One round trip per call**: No caching, retries or background work

pub mod clients;
pub mod config;
pub mod crud;
pub mod error;
mod fixed_length;
mod guards;

pub use config::{BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::{ConfigError, LengthMismatchError};
pub use fixed_length::FixedLengthVec;
pub use guards::{has_own_key, is_plain_object};

// Re-export HTTP client types
pub use clients::{
    DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError,
};

// Re-export CRUD types
pub use crud::{
    create_crud_accessors, default_error_handler, query_param, then_call, with_identifier,
    with_query_params, Accessor, CrudAccessors, CrudError, CrudOptions, CrudOptionsBuilder,
    DirectCrud, DirectCrudOptions, ErrorHandler, Getter, GetterMap, Id, Operation,
    ResolvedGetters, TransformError,
};
