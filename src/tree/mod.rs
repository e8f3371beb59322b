//! Render tree hosts.
//!
//! [`host::RenderTree`] is the read-only boundary the resolver consumes. The
//! arena, DSL and snapshot modules provide an in-memory host for tools and tests.

pub(crate) mod arena;
pub(crate) mod dsl;
pub(crate) mod host;
pub(crate) mod snapshot;
