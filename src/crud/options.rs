//! Per-resource configuration for the two accessor flavours.
//!
//! - [`CrudOptions`]: headers, error handler and response transforms for
//!   [`CrudAccessors`](crate::crud::CrudAccessors)
//! - [`DirectCrudOptions`]: headers only, for
//!   [`DirectCrud`](crate::crud::DirectCrud)
//!
//! Headers configured here are sent with mutating requests (POST, PATCH,
//! PUT) only, and never replace `Content-Type: application/json`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::validate_headers;
use crate::crud::errors::{CrudError, ErrorHandler};
use crate::crud::getters::Accessor;
use crate::error::ConfigError;

/// Configuration for a [`CrudAccessors`](crate::crud::CrudAccessors) set.
///
/// # Example
///
/// ```rust
/// use rest_crud::crud::{CrudOptions, Getter};
///
/// let options = CrudOptions::builder()
///     .header("X-Api-Key", "secret")
///     .on_error(|error| eprintln!("cats api: {error}"))
///     .accessor(Getter::pointer("/data"))
///     .build()
///     .unwrap();
///
/// assert_eq!(options.headers().get("X-Api-Key").map(String::as_str), Some("secret"));
/// assert!(options.accessor().is_some());
/// ```
#[derive(Clone, Default)]
pub struct CrudOptions {
    headers: HashMap<String, String>,
    on_error: Option<ErrorHandler>,
    accessor: Option<Accessor>,
}

impl CrudOptions {
    /// Creates a new builder for constructing `CrudOptions`.
    #[must_use]
    pub fn builder() -> CrudOptionsBuilder {
        CrudOptionsBuilder::new()
    }

    /// Returns the headers merged into every mutating request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the configured error handler, if any.
    #[must_use]
    pub const fn on_error(&self) -> Option<&ErrorHandler> {
        self.on_error.as_ref()
    }

    /// Returns the configured response transforms, if any.
    #[must_use]
    pub const fn accessor(&self) -> Option<&Accessor> {
        self.accessor.as_ref()
    }
}

impl fmt::Debug for CrudOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudOptions")
            .field("headers", &self.headers)
            .field("on_error", &self.on_error.as_ref().map(|_| "<fn>"))
            .field("accessor", &self.accessor)
            .finish()
    }
}

/// Builder for constructing [`CrudOptions`] instances.
///
/// # Defaults
///
/// - `headers`: empty
/// - `on_error`: log at `error` level via `tracing`
/// - `accessor`: `None` (responses are passed through unchanged)
#[derive(Default)]
pub struct CrudOptionsBuilder {
    headers: HashMap<String, String>,
    on_error: Option<ErrorHandler>,
    accessor: Option<Accessor>,
}

impl CrudOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header sent with every mutating request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the error handler invoked with every failure.
    ///
    /// The handler's return value is discarded; the failed operation
    /// returns `None` either way.
    #[must_use]
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CrudError) + Send + Sync + 'static,
    {
        let handler: ErrorHandler = Arc::new(handler);
        self.on_error = Some(handler);
        self
    }

    /// Sets the response transforms.
    #[must_use]
    pub fn accessor(mut self, accessor: impl Into<Accessor>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }

    /// Builds the [`CrudOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] or
    /// [`ConfigError::InvalidHeaderValue`] if a header is malformed.
    pub fn build(self) -> Result<CrudOptions, ConfigError> {
        validate_headers(&self.headers)?;

        Ok(CrudOptions {
            headers: self.headers,
            on_error: self.on_error,
            accessor: self.accessor,
        })
    }
}

/// Configuration for a [`DirectCrud`](crate::crud::DirectCrud) set: headers only.
#[derive(Clone, Debug, Default)]
pub struct DirectCrudOptions {
    headers: HashMap<String, String>,
}

impl DirectCrudOptions {
    /// Creates options with no extra headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header sent with every mutating request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the headers merged into every mutating request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Checks that every header can be sent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first malformed header.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_headers(&self.headers)
    }
}
