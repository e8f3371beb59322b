//! render-owners answers two questions about a rendered UI:
//!
//! - given an output node (an element on screen), which components produced it?
//! - given a component, which output node is its root representative?
//!
//! The render tree is owned by a rendering engine and consumed read-only
//! through [`RenderTree`]. Components can render fragments, lists, other
//! components (decoration) or their children verbatim (wrapping), so output
//! nodes carry no direct owner; the resolver recovers ownership by walking
//! parent links and classifying each node.
//!
//! # Getting started
//!
//! ```
//! use render_owners::{ComponentIdentity, RenderArena, Resolver, element, text};
//!
//! let inner = ComponentIdentity::define("DivComponent");
//! let outer = ComponentIdentity::define("DecoratedDiv");
//! let mut arena = RenderArena::new();
//! arena
//!     .mount(outer.render(inner.render(element("div").child(text("hello")))))
//!     .unwrap();
//!
//! let hello = arena.find_by_text("hello").unwrap();
//! let resolver = Resolver::new(&arena);
//! assert_eq!(resolver.resolve_owner(&hello).unwrap(), inner);
//! assert_eq!(resolver.resolve_owner_chain(&hello).unwrap(), [inner, outer.clone()]);
//! assert_eq!(resolver.resolve_outer_owner(&hello).unwrap(), outer);
//! assert_eq!(resolver.resolve_root_output(&hello).unwrap(), hello);
//! ```
//!
//! Design constraints:
//!
//! - **Read-only**: resolution never mutates the tree and retains no node handle
//!   past a single call.
//! - **Identity by reference**: [`ComponentIdentity`] compares definitions by
//!   pointer, never by name.
//! - **Failures are surfaced**: detached nodes, foreign outputs and
//!   element-less components are reported through [`ResolveError`], never
//!   approximated.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod resolve;
mod tree;
mod walk;

pub use foundation::core::{ComponentDef, ComponentIdentity, OutputId, RenderKind, ResolveOpts};
pub use foundation::error::{ResolveError, ResolveResult};
pub use resolve::Resolver;
pub use resolve::root_output::TopLevelOutputs;
pub use tree::arena::{Element, NewNode, RenderArena, RenderKey};
pub use tree::dsl::{ElementNode, Node, element, fragment, list, text};
pub use tree::host::RenderTree;
pub use tree::snapshot::{LoadedTree, NodeDef, TreeSnapshot};
pub use walk::walker::{Ancestors, Walker};
