//! Owner and root-output resolution.
//!
//! Both resolvers start from an output node, re-resolve it to its render node
//! on every call, and walk toward the root. Nothing is cached between calls,
//! so a [`Resolver`] may be kept around across render passes of its host as
//! long as the borrow allows.

pub(crate) mod owner;
pub(crate) mod root_output;

use crate::{
    foundation::core::{ComponentIdentity, ResolveOpts},
    foundation::error::{ResolveError, ResolveResult},
    resolve::root_output::TopLevelOutputs,
    tree::host::RenderTree,
    walk::walker::Walker,
};

/// Stateless query façade over a [`RenderTree`].
pub struct Resolver<'t, T: RenderTree> {
    walker: Walker<'t, T>,
}

impl<'t, T: RenderTree> Resolver<'t, T> {
    /// Resolver with default options.
    pub fn new(tree: &'t T) -> Self {
        Self::with_opts(tree, ResolveOpts::default())
    }

    /// Resolver with explicit options.
    pub fn with_opts(tree: &'t T, opts: ResolveOpts) -> Self {
        Self {
            walker: Walker::with_opts(tree, opts),
        }
    }

    /// Underlying traversal primitives.
    pub fn walker(&self) -> &Walker<'t, T> {
        &self.walker
    }

    /// Innermost component that owns `output`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn resolve_owner(&self, output: &T::Output) -> ResolveResult<ComponentIdentity> {
        let node = self.walker.render_node_of(output)?;
        let (_, id) = owner::innermost_owner(&self.walker, node)?;
        Ok(id)
    }

    /// Every component that owns `output`, innermost first.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn resolve_owner_chain(&self, output: &T::Output) -> ResolveResult<Vec<ComponentIdentity>> {
        let node = self.walker.render_node_of(output)?;
        let owners = owner::owner_nodes(&self.walker, node)?;
        Ok(owners.into_iter().map(|(_, id)| id).collect())
    }

    /// Outermost owner that still shares the innermost owner's root output.
    ///
    /// For a decorator or a pass-through wrapper this is the outer component;
    /// otherwise it is the innermost owner.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn resolve_outer_owner(&self, output: &T::Output) -> ResolveResult<ComponentIdentity> {
        let node = self.walker.render_node_of(output)?;
        let owners = owner::owner_nodes(&self.walker, node)?;
        let Some(((inner_node, inner), rest)) = owners.split_first() else {
            return Err(ResolveError::no_owner("empty owner chain"));
        };
        let root = root_output::root_output_of(&self.walker, *inner_node)?;
        let mut outer = inner;
        for (anc, id) in rest {
            if root_output::root_output_of(&self.walker, *anc)? != root {
                break;
            }
            outer = id;
        }
        Ok(outer.clone())
    }

    /// Representative root output of the innermost component owning `output`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn resolve_root_output(&self, output: &T::Output) -> ResolveResult<T::Output> {
        let node = self.walker.render_node_of(output)?;
        let (owner, _) = owner::innermost_owner(&self.walker, node)?;
        root_output::root_output_of(&self.walker, owner)
    }

    /// Every top-level output of the innermost component owning `output`, in
    /// render order.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn resolve_all_root_outputs(&self, output: &T::Output) -> ResolveResult<Vec<T::Output>> {
        let node = self.walker.render_node_of(output)?;
        let (owner, _) = owner::innermost_owner(&self.walker, node)?;
        root_output::all_root_outputs_of(&self.walker, owner)
    }

    /// Representative root output of the component instance at `node`.
    pub fn root_output_of(&self, node: T::Node) -> ResolveResult<T::Output> {
        root_output::root_output_of(&self.walker, node)
    }

    /// Every top-level output of the component instance at `node`.
    pub fn all_root_outputs_of(&self, node: T::Node) -> ResolveResult<Vec<T::Output>> {
        root_output::all_root_outputs_of(&self.walker, node)
    }

    /// Lazy top-level output sequence starting at `node` (any kind).
    pub fn top_level_outputs(&self, node: T::Node) -> TopLevelOutputs<'_, 't, T> {
        TopLevelOutputs::new(&self.walker, node)
    }
}
