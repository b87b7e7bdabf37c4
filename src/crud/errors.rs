//! Error types for CRUD operations and the default error handler.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_crud::crud::CrudError;
//! use rest_crud::clients::HttpError;
//!
//! match cats.get_single(7).await {
//!     Ok(cat) => println!("{cat:?}"),
//!     Err(CrudError::Http(HttpError::Response(e))) if e.code == 404 => println!("no such cat"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::clients::HttpError;
use crate::crud::getters::TransformError;
use crate::crud::operation::Operation;
use crate::error::ConfigError;

/// Error type for CRUD accessor operations.
///
/// [`CrudAccessors`](crate::crud::CrudAccessors) hands these to its error
/// handler; [`DirectCrud`](crate::crud::DirectCrud) returns them.
#[derive(Debug, Error)]
pub enum CrudError {
    /// The accessor set could not be constructed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed, returned a non-2xx status, or its body was not JSON.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A configured response transform failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body for {operation}: {source}")]
    Serialize {
        /// The operation that was being performed.
        operation: Operation,
        /// The underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The (transformed) response did not match the expected type.
    #[error("Failed to deserialize response for {operation}: {source}")]
    Deserialize {
        /// The operation that was being performed.
        operation: Operation,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Callback invoked with every error a [`CrudAccessors`](crate::crud::CrudAccessors) swallows.
pub type ErrorHandler = Arc<dyn Fn(&CrudError) + Send + Sync>;

/// Logs the error at `error` level. Used when no handler is configured.
pub fn default_error_handler(error: &CrudError) {
    tracing::error!(error = %error, "CRUD request failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_http_errors_are_transparent() {
        let error: CrudError = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: None,
        })
        .into();
        assert_eq!(error.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_deserialize_error_names_operation() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = CrudError::Deserialize {
            operation: Operation::GetSingle,
            source,
        };
        assert!(error
            .to_string()
            .starts_with("Failed to deserialize response for get_single"));
    }

    #[test]
    fn test_transform_error_converts() {
        let error: CrudError = TransformError::new("no data").into();
        assert!(matches!(error, CrudError::Transform(_)));
        assert_eq!(error.to_string(), "Response transform failed: no data");
    }

    #[test]
    fn test_default_error_handler_does_not_panic() {
        default_error_handler(&CrudError::Config(ConfigError::EmptyEndpoint));
    }
}
