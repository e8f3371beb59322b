use std::fmt::Debug;

use crate::foundation::{core::RenderKind, error::ResolveResult};

/// Read-only view over a render tree owned by a rendering engine.
///
/// Implementations expose lookups only. Handles returned here must not be
/// retained past a single resolution call: the engine may rebuild the tree on
/// the next render pass.
pub trait RenderTree {
    /// Handle to a render node.
    type Node: Copy + Eq + Debug;
    /// Handle to an externally visible output node.
    type Output: Clone + Eq + Debug;

    /// Bottom-up entry point. Fails with `NotRendered` for outputs the tree
    /// never produced.
    fn render_node_of(&self, output: &Self::Output) -> ResolveResult<Self::Node>;

    /// Immediate structural ancestor, or `None` at the root.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;

    /// Kind of `node`. Fails with `Classification` if the node is detached.
    fn classify(&self, node: Self::Node) -> ResolveResult<RenderKind>;

    /// Children in render order.
    fn children_of(&self, node: Self::Node) -> Vec<Self::Node>;

    /// The output produced by an element node; `None` for every other kind.
    fn output_of(&self, node: Self::Node) -> Option<Self::Output>;
}
