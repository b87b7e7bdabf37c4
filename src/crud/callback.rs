//! Adapter for callers written against callback-style operations.
//!
//! Accessor operations always return their result. Code that expects to pass
//! a callback and receive the callback's return value can wrap the call:
//!
//! ```rust,ignore
//! use rest_crud::crud::then_call;
//!
//! let names = then_call(cats.get_all(None), |cats| {
//!     cats.unwrap_or_default().into_iter().map(|c| c.name).collect::<Vec<_>>()
//! })
//! .await;
//! ```

use std::future::Future;

/// Awaits `operation`, passes its output to `callback`, and returns what the callback returns.
pub async fn then_call<F, C, R>(operation: F, callback: C) -> R
where
    F: Future,
    C: FnOnce(F::Output) -> R,
{
    callback(operation.await)
}
