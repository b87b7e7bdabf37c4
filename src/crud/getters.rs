//! Response transforms ("getters") and their per-operation resolution.
//!
//! A [`Getter`] turns a decoded response body into the value handed back to
//! the caller, e.g. unwrapping `{"data": [...]}` into `[...]`. Transforms are
//! configured with an [`Accessor`]:
//!
//! - no accessor: every operation passes the body through unchanged
//! - [`Accessor::Uniform`]: one getter for all seven operation slots
//! - [`Accessor::PerOperation`]: a [`GetterMap`] with optional getters per
//!   slot; missing slots pass the body through unchanged
//!
//! [`ResolvedGetters::resolve`] folds the accessor into one concrete getter per
//! slot. It runs once, when an accessor set is constructed.
//!
//! # Example
//!
//! ```rust
//! use rest_crud::crud::{Accessor, Getter, GetterMap, Operation, ResolvedGetters};
//! use serde_json::json;
//!
//! let unwrap_data = Getter::pointer("/data");
//! let accessor = Accessor::PerOperation(GetterMap::new().with(Operation::GetAll, unwrap_data));
//! let getters = ResolvedGetters::resolve(Some(&accessor));
//!
//! let body = json!({"data": [{"name": "Tom"}]});
//! assert_eq!(getters.get_all.apply(body.clone()).unwrap(), json!([{"name": "Tom"}]));
//! assert_eq!(getters.get_single.apply(body.clone()).unwrap(), body);
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::crud::operation::Operation;

/// Error raised by a fallible response transform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Response transform failed: {message}")]
pub struct TransformError {
    /// What the transform could not do.
    pub message: String,
}

impl TransformError {
    /// Creates a transform error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type TransformFn = dyn Fn(Value) -> Result<Value, TransformError> + Send + Sync;

/// A shareable response transform.
///
/// Cloning a getter shares the underlying function; [`Getter::ptr_eq`] tells
/// whether two getters are the same function. The identity getter carries no
/// function at all.
#[derive(Clone, Default)]
pub struct Getter {
    transform: Option<Arc<TransformFn>>,
}

impl Getter {
    /// Returns the passthrough getter.
    #[must_use]
    pub const fn identity() -> Self {
        Self { transform: None }
    }

    /// Wraps an infallible transform.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        let transform: Arc<TransformFn> =
            Arc::new(move |value: Value| -> Result<Value, TransformError> { Ok(transform(value)) });
        Self {
            transform: Some(transform),
        }
    }

    /// Wraps a fallible transform.
    pub fn try_new<F>(transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        let transform: Arc<TransformFn> = Arc::new(transform);
        Self {
            transform: Some(transform),
        }
    }

    /// Returns a getter that extracts the value at a JSON pointer (e.g. `/data/items`).
    ///
    /// Fails with [`TransformError`] when the body has nothing at that pointer.
    #[must_use]
    pub fn pointer(pointer: impl Into<String>) -> Self {
        let pointer = pointer.into();
        Self::try_new(move |mut value| {
            value
                .pointer_mut(&pointer)
                .map(Value::take)
                .ok_or_else(|| TransformError::new(format!("no value at pointer '{pointer}'")))
        })
    }

    /// Applies the transform to a decoded response body.
    ///
    /// # Errors
    ///
    /// Returns whatever [`TransformError`] the wrapped transform raises.
    pub fn apply(&self, value: Value) -> Result<Value, TransformError> {
        match &self.transform {
            Some(transform) => transform(value),
            None => Ok(value),
        }
    }

    /// Returns `true` if this is the passthrough getter.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.transform.is_none()
    }

    /// Returns `true` if both getters are the identity or share one function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.transform, &other.transform) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            f.write_str("Getter(identity)")
        } else {
            f.write_str("Getter(<fn>)")
        }
    }
}

/// Optional getters keyed by operation.
#[derive(Clone, Debug, Default)]
pub struct GetterMap {
    pub get_all: Option<Getter>,
    pub get_single: Option<Getter>,
    pub post: Option<Getter>,
    pub patch: Option<Getter>,
    pub put: Option<Getter>,
    pub replace: Option<Getter>,
    pub remove: Option<Getter>,
}

impl GetterMap {
    /// Creates an empty map; every slot falls back to the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the getter for one operation slot.
    #[must_use]
    pub fn with(mut self, operation: Operation, getter: Getter) -> Self {
        *self.slot_mut(operation) = Some(getter);
        self
    }

    /// Returns the getter configured for an operation slot, if any.
    #[must_use]
    pub const fn get(&self, operation: Operation) -> Option<&Getter> {
        match operation {
            Operation::GetAll => self.get_all.as_ref(),
            Operation::GetSingle => self.get_single.as_ref(),
            Operation::Post => self.post.as_ref(),
            Operation::Patch => self.patch.as_ref(),
            Operation::Put => self.put.as_ref(),
            Operation::Replace => self.replace.as_ref(),
            Operation::Remove => self.remove.as_ref(),
        }
    }

    fn slot_mut(&mut self, operation: Operation) -> &mut Option<Getter> {
        match operation {
            Operation::GetAll => &mut self.get_all,
            Operation::GetSingle => &mut self.get_single,
            Operation::Post => &mut self.post,
            Operation::Patch => &mut self.patch,
            Operation::Put => &mut self.put,
            Operation::Replace => &mut self.replace,
            Operation::Remove => &mut self.remove,
        }
    }
}

/// How response transforms are configured for an accessor set.
#[derive(Clone, Debug)]
pub enum Accessor {
    /// One getter used for every operation.
    Uniform(Getter),
    /// Getters per operation; missing entries pass the body through.
    PerOperation(GetterMap),
}

impl Accessor {
    /// Returns the variant name, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::PerOperation(_) => "per_operation",
        }
    }
}

impl From<Getter> for Accessor {
    fn from(getter: Getter) -> Self {
        Self::Uniform(getter)
    }
}

impl From<GetterMap> for Accessor {
    fn from(map: GetterMap) -> Self {
        Self::PerOperation(map)
    }
}

/// One concrete getter per operation slot.
#[derive(Clone, Debug, Default)]
pub struct ResolvedGetters {
    pub get_all: Getter,
    pub get_single: Getter,
    pub post: Getter,
    pub patch: Getter,
    pub put: Getter,
    pub replace: Getter,
    pub remove: Getter,
}

impl ResolvedGetters {
    /// Resolves an optional accessor into one getter per slot.
    ///
    /// A uniform getter fills every slot with the same function. A per-operation
    /// map fills the slots it names and leaves the rest as the identity.
    #[must_use]
    pub fn resolve(accessor: Option<&Accessor>) -> Self {
        let slot = |operation: Operation| -> Getter {
            match accessor {
                None => Getter::identity(),
                Some(Accessor::Uniform(getter)) => getter.clone(),
                Some(Accessor::PerOperation(map)) => {
                    map.get(operation).cloned().unwrap_or_default()
                }
            }
        };

        Self {
            get_all: slot(Operation::GetAll),
            get_single: slot(Operation::GetSingle),
            post: slot(Operation::Post),
            patch: slot(Operation::Patch),
            put: slot(Operation::Put),
            replace: slot(Operation::Replace),
            remove: slot(Operation::Remove),
        }
    }

    /// Returns the getter for an operation slot.
    #[must_use]
    pub const fn for_operation(&self, operation: Operation) -> &Getter {
        match operation {
            Operation::GetAll => &self.get_all,
            Operation::GetSingle => &self.get_single,
            Operation::Post => &self.post,
            Operation::Patch => &self.patch,
            Operation::Put => &self.put,
            Operation::Replace => &self.replace,
            Operation::Remove => &self.remove,
        }
    }
}
