//! The named operations of a CRUD accessor set.

use std::fmt;

use crate::clients::HttpMethod;

/// Operations a CRUD accessor set exposes, one per transform slot.
///
/// `Replace` has its own transform slot, but the `replace` accessor is an
/// alias of `put` and runs with the `Put` transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List the collection (GET endpoint).
    GetAll,
    /// Fetch one resource (GET endpoint/id).
    GetSingle,
    /// Create a resource (POST endpoint).
    Post,
    /// Partially update a resource (PATCH endpoint/id).
    Patch,
    /// Replace a resource (PUT endpoint/id).
    Put,
    /// Alias slot for `Put`.
    Replace,
    /// Delete a resource (DELETE endpoint/id).
    Remove,
}

impl Operation {
    /// Every operation, in transform-slot order.
    pub const ALL: [Self; 7] = [
        Self::GetAll,
        Self::GetSingle,
        Self::Post,
        Self::Patch,
        Self::Put,
        Self::Replace,
        Self::Remove,
    ];

    /// Returns the HTTP method this operation is sent with.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::GetAll | Self::GetSingle => HttpMethod::Get,
            Self::Post => HttpMethod::Post,
            Self::Patch => HttpMethod::Patch,
            Self::Put | Self::Replace => HttpMethod::Put,
            Self::Remove => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::GetSingle => "get_single",
            Self::Post => "post",
            Self::Patch => "patch",
            Self::Put => "put",
            Self::Replace => "replace",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
