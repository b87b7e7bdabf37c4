//! Configuration types for the HTTP client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: settings shared by every request a client sends
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: a validated base URL for resolving relative endpoints
//!
//! Per-resource settings (headers for mutating requests, error handler,
//! response transforms) live on [`CrudOptions`](crate::crud::CrudOptions).
//!
//! # Example
//!
//! ```rust
//! use rest_crud::{BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("CatApp/1.0")
//!     .default_header("X-Tenant", "acme")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().unwrap().host_name(), "api.example.com");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Configuration for an [`HttpClient`](crate::clients::HttpClient).
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `None` (endpoints must be absolute URLs)
/// - `user_agent_prefix`: `None`
/// - `default_headers`: empty
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    default_headers: HashMap<String, String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL relative endpoints are resolved against.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] or
    /// [`ConfigError::InvalidHeaderValue`] if a default header is malformed.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        validate_headers(&self.default_headers)?;

        Ok(ClientConfig {
            base_url: self.base_url,
            user_agent_prefix: self.user_agent_prefix,
            default_headers: self.default_headers,
        })
    }
}

/// Checks that every name and value is acceptable on the wire.
pub(crate) fn validate_headers(headers: &HashMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeaderName { name: name.clone() })?;
        HeaderValue::from_str(value)
            .map_err(|_| ConfigError::InvalidHeaderValue { name: name.clone() })?;
    }
    Ok(())
}
