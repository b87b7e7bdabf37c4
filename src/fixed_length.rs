//! Sequences constrained to an exact element count.
//!
//! A plain `[T; N]` is the compile-time form. [`FixedLengthVec`] wraps one and
//! adds the runtime check for values that arrive as a `Vec` or as JSON.

use std::ops::Deref;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::LengthMismatchError;

/// A sequence of exactly `N` elements.
///
/// # Example
///
/// ```rust
/// use rest_crud::FixedLengthVec;
///
/// let rgb: FixedLengthVec<u8, 3> = serde_json::from_str("[255, 128, 0]").unwrap();
/// assert_eq!(rgb[1], 128);
/// assert!(serde_json::from_str::<FixedLengthVec<u8, 3>>("[255, 128]").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedLengthVec<T, const N: usize>([T; N]);

impl<T, const N: usize> FixedLengthVec<T, N> {
    /// Wraps an array; the length is checked by the type system.
    #[must_use]
    pub const fn new(items: [T; N]) -> Self {
        Self(items)
    }

    /// Returns the wrapped array.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for FixedLengthVec<T, N> {
    type Error = LengthMismatchError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let actual = items.len();
        <[T; N]>::try_from(items)
            .map(Self)
            .map_err(|_| LengthMismatchError {
                expected: N,
                actual,
            })
    }
}

impl<T, const N: usize> From<[T; N]> for FixedLengthVec<T, N> {
    fn from(items: [T; N]) -> Self {
        Self(items)
    }
}

impl<T, const N: usize> Deref for FixedLengthVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedLengthVec<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Serialize, const N: usize> Serialize for FixedLengthVec<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedLengthVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(de::Error::custom)
    }
}
