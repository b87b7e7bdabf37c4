//! Endpoint composition for collection resources.
//!
//! An endpoint names a collection (e.g., `/cats` or
//! `https://api.example.com/cats/`). Single resources are addressed by
//! appending an [`Id`]; listings may carry a query string.
//!
//! # Example
//!
//! ```rust
//! use rest_crud::crud::{query_param, with_identifier, with_query_params};
//!
//! assert_eq!(with_identifier("/cats", 7), "/cats/7");
//! assert_eq!(with_identifier("/cats/", "tom"), "/cats/tom");
//!
//! let params = vec![query_param("name", "Tom Cat"), "limit=5".to_string()];
//! assert_eq!(
//!     with_query_params("/cats/", Some(params.as_slice())),
//!     "/cats?name=Tom%20Cat&limit=5"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier of one resource within a collection.
///
/// Built from strings or any integer width; displays as its raw value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// A numeric identifier (signed, unsigned or floating point JSON number).
    Number(Number),
    /// A textual identifier (slug, UUID, ...).
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Id {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Number> for Id {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

macro_rules! id_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Id {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

id_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// JSON numbers stop at 64 bits; wider values keep their digits as text.
impl From<i128> for Id {
    fn from(value: i128) -> Self {
        i64::try_from(value)
            .map(Self::from)
            .or_else(|_| u64::try_from(value).map(Self::from))
            .unwrap_or_else(|_| Self::Text(value.to_string()))
    }
}

impl From<u128> for Id {
    fn from(value: u128) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::from)
    }
}

/// Appends `id` to `endpoint`, inserting `/` only if the endpoint lacks a trailing one.
#[must_use]
pub fn with_identifier(endpoint: &str, id: impl Into<Id>) -> String {
    let id = id.into();
    if endpoint.ends_with('/') {
        format!("{endpoint}{id}")
    } else {
        format!("{endpoint}/{id}")
    }
}

/// Appends a query string built from pre-encoded `key=value` fragments.
///
/// With `None` the endpoint is returned unchanged. Otherwise one trailing
/// `/` is stripped and `?` plus the fragments joined by `&` is appended.
/// Fragments are not escaped; use [`query_param`] to encode them.
#[must_use]
pub fn with_query_params(endpoint: &str, params: Option<&[String]>) -> String {
    let Some(params) = params else {
        return endpoint.to_string();
    };

    let endpoint = endpoint.strip_suffix('/').unwrap_or(endpoint);
    format!("{endpoint}?{}", params.join("&"))
}

/// Builds a percent-encoded `key=value` fragment for [`with_query_params`].
#[must_use]
pub fn query_param(key: &str, value: impl fmt::Display) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(&value.to_string())
    )
}
