use crate::{
    foundation::core::{ComponentIdentity, RenderKind, ResolveOpts},
    foundation::error::{ResolveError, ResolveResult},
    tree::host::RenderTree,
};

/// Traversal primitives over a [`RenderTree`].
///
/// Holds only a borrow of the tree and the options; every call re-reads the
/// tree.
pub struct Walker<'t, T: RenderTree> {
    tree: &'t T,
    opts: ResolveOpts,
}

impl<'t, T: RenderTree> Walker<'t, T> {
    /// Walker with default options.
    pub fn new(tree: &'t T) -> Self {
        Self::with_opts(tree, ResolveOpts::default())
    }

    /// Walker with explicit options.
    pub fn with_opts(tree: &'t T, opts: ResolveOpts) -> Self {
        Self { tree, opts }
    }

    /// Active options.
    pub fn opts(&self) -> ResolveOpts {
        self.opts
    }

    /// Immediate structural ancestor, `None` at the root.
    pub fn parent_of(&self, node: T::Node) -> Option<T::Node> {
        self.tree.parent_of(node)
    }

    /// Kind of `node`; `Classification` if detached.
    pub fn classify(&self, node: T::Node) -> ResolveResult<RenderKind> {
        self.tree.classify(node)
    }

    /// Output of an element node, `None` otherwise.
    pub fn output_node_of(&self, node: T::Node) -> Option<T::Output> {
        self.tree.output_of(node)
    }

    /// Render node that produced `output`; `NotRendered` if none.
    pub fn render_node_of(&self, output: &T::Output) -> ResolveResult<T::Node> {
        self.tree.render_node_of(output)
    }

    /// Children in render order.
    pub fn children_of(&self, node: T::Node) -> Vec<T::Node> {
        self.tree.children_of(node)
    }

    /// Strict ancestors of `node`, nearest first, each with its kind.
    pub fn ancestors(&self, node: T::Node) -> Ancestors<'_, 't, T> {
        Ancestors {
            walker: self,
            cur: node,
            steps: 0,
            done: false,
        }
    }

    /// Nearest component instance strictly above `node`.
    pub fn nearest_component(
        &self,
        node: T::Node,
    ) -> ResolveResult<Option<(T::Node, ComponentIdentity)>> {
        for step in self.ancestors(node) {
            let (anc, kind) = step?;
            if let RenderKind::Component(id) = kind {
                return Ok(Some((anc, id)));
            }
        }
        Ok(None)
    }
}

/// Upward iterator returned by [`Walker::ancestors`].
///
/// Yields at most one error, then ends.
pub struct Ancestors<'w, 't, T: RenderTree> {
    walker: &'w Walker<'t, T>,
    cur: T::Node,
    steps: usize,
    done: bool,
}

impl<T: RenderTree> Iterator for Ancestors<'_, '_, T> {
    type Item = ResolveResult<(T::Node, RenderKind)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(parent) = self.walker.parent_of(self.cur) else {
            self.done = true;
            return None;
        };
        self.steps += 1;
        if self.steps > self.walker.opts.max_depth {
            self.done = true;
            tracing::debug!(limit = self.walker.opts.max_depth, "upward walk hit depth limit");
            return Some(Err(ResolveError::DepthLimit(self.walker.opts.max_depth)));
        }
        match self.walker.classify(parent) {
            Ok(kind) => {
                tracing::trace!(node = ?parent, kind = kind.label(), "ancestor");
                self.cur = parent;
                Some(Ok((parent, kind)))
            }
            Err(e) => {
                self.done = true;
                tracing::debug!(node = ?parent, error = %e, "ancestor could not be classified");
                Some(Err(e))
            }
        }
    }
}

impl<T: RenderTree> std::iter::FusedIterator for Ancestors<'_, '_, T> {}

#[cfg(test)]
#[path = "../../tests/unit/walk/walker.rs"]
mod tests;
