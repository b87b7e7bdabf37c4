//! Typed CRUD accessors for REST collection endpoints.
//!
//! # Overview
//!
//! - [`CrudAccessors`]: operations with configurable response transforms;
//!   failures are reported to an error handler and yield `None`
//! - [`DirectCrud`]: the same operations without transforms; failures are
//!   returned as [`CrudError`]
//! - [`Getter`], [`GetterMap`], [`Accessor`], [`ResolvedGetters`]: response
//!   transforms and their per-operation resolution
//! - [`with_identifier`], [`with_query_params`], [`query_param`]: endpoint
//!   composition
//! - [`then_call`]: adapter for callback-style callers
//!
//! # Operations
//!
//! | Operation | Method | URL | Body |
//! |---|---|---|---|
//! | `get_all` | GET | endpoint, optional query string | none |
//! | `get_single` | GET | endpoint/id | none |
//! | `post` | POST | endpoint | JSON |
//! | `patch` | PATCH | endpoint/id | JSON |
//! | `put` / `replace` | PUT | endpoint/id | JSON |
//! | `remove` / `delete` | DELETE | endpoint/id | none |
//!
//! Mutating requests carry `Content-Type: application/json` plus any
//! configured headers.

mod accessors;
mod callback;
mod direct;
mod endpoint;
mod errors;
mod getters;
mod operation;
mod options;

pub use accessors::{create_crud_accessors, CrudAccessors};
pub use callback::then_call;
pub use direct::DirectCrud;
pub use endpoint::{query_param, with_identifier, with_query_params, Id};
pub use errors::{default_error_handler, CrudError, ErrorHandler};
pub use getters::{Accessor, Getter, GetterMap, ResolvedGetters, TransformError};
pub use operation::Operation;
pub use options::{CrudOptions, CrudOptionsBuilder, DirectCrudOptions};
