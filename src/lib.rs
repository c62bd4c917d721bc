#![forbid(unsafe_code)]

//! An in-memory, host/method-partitioned URL router.
//!
//! Patterns are registered against a method and an absolute URL; a segment
//! may be a literal, a named path variable (`:name`), an anonymous catch-all
//! (`*`), or a named catch-all (`*name`). Query parameters on a pattern are
//! matched too: a literal value requires an exact match, `*` accepts any
//! value, and `:name` binds the value. See [`Router`] for the two
//! operations this crate exposes.

mod error;
mod host;
mod node;
mod params;
mod query;
mod router;
mod segment;
mod url;

pub use error::{InsertError, LookupError, UrlAdapterError};
pub use params::Params;
pub use router::{ParsedRoute, Router};
