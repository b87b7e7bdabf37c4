//! Error types for configuration and validation.
//!
//! This module contains the errors raised while building client and
//! accessor configuration, plus the length check used by
//! [`FixedLengthVec`](crate::FixedLengthVec).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use rest_crud::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A configured header name is not a valid HTTP header name.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// A configured header value contains characters not allowed in HTTP headers.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: String,
    },

    /// A resource endpoint was empty.
    #[error("Resource endpoint cannot be empty. Please provide a URL or path (e.g., '/cats').")]
    EmptyEndpoint,
}

/// Error returned when a sequence does not have the required number of elements.
///
/// # Example
///
/// ```rust
/// use rest_crud::{FixedLengthVec, LengthMismatchError};
///
/// let result = FixedLengthVec::<u8, 3>::try_from(vec![1, 2]);
/// assert_eq!(result.unwrap_err(), LengthMismatchError { expected: 3, actual: 2 });
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Expected a sequence of exactly {expected} elements, got {actual}.")]
pub struct LengthMismatchError {
    /// The required element count.
    pub expected: usize,
    /// The element count that was provided.
    pub actual: usize,
}
