use crate::{
    foundation::core::{ComponentIdentity, RenderKind},
    foundation::error::{ResolveError, ResolveResult},
    tree::host::RenderTree,
    walk::walker::Walker,
};

/// Top-level outputs under a start node, in render order.
///
/// Single depth-first descent: fragments, lists and component instances are
/// passed through, text is skipped, and each element found is yielded without
/// descending into it. Finite and not restartable; yields at most one error,
/// then ends.
pub struct TopLevelOutputs<'w, 't, T: RenderTree> {
    walker: &'w Walker<'t, T>,
    stack: Vec<(T::Node, usize)>,
    done: bool,
}

impl<'w, 't, T: RenderTree> TopLevelOutputs<'w, 't, T> {
    pub(crate) fn new(walker: &'w Walker<'t, T>, start: T::Node) -> Self {
        Self {
            walker,
            stack: vec![(start, 0)],
            done: false,
        }
    }

    fn fail(&mut self, err: ResolveError) -> Option<ResolveResult<T::Output>> {
        self.done = true;
        self.stack.clear();
        Some(Err(err))
    }
}

impl<T: RenderTree> Iterator for TopLevelOutputs<'_, '_, T> {
    type Item = ResolveResult<T::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some((node, depth)) = self.stack.pop() {
            let limit = self.walker.opts().max_depth;
            if depth > limit {
                return self.fail(ResolveError::DepthLimit(limit));
            }
            let kind = match self.walker.classify(node) {
                Ok(kind) => kind,
                Err(e) => return self.fail(e),
            };
            tracing::trace!(node = ?node, kind = kind.label(), depth, "descend");
            match kind {
                RenderKind::Element => {
                    return match self.walker.output_node_of(node) {
                        Some(out) => Some(Ok(out)),
                        None => self.fail(ResolveError::classification(format!(
                            "element {node:?} has no output node"
                        ))),
                    };
                }
                RenderKind::Text => {}
                RenderKind::Fragment | RenderKind::List | RenderKind::Component(_) => {
                    for c in self.walker.children_of(node).into_iter().rev() {
                        self.stack.push((c, depth + 1));
                    }
                }
            }
        }
        self.done = true;
        None
    }
}

impl<T: RenderTree> std::iter::FusedIterator for TopLevelOutputs<'_, '_, T> {}

fn expect_component<T: RenderTree>(
    walker: &Walker<'_, T>,
    node: T::Node,
) -> ResolveResult<ComponentIdentity> {
    match walker.classify(node)? {
        RenderKind::Component(id) => Ok(id),
        other => Err(ResolveError::not_a_component(format!(
            "render node {node:?} is a {}",
            other.label()
        ))),
    }
}

/// First top-level output of the component instance at `node`.
pub(crate) fn root_output_of<T: RenderTree>(
    walker: &Walker<'_, T>,
    node: T::Node,
) -> ResolveResult<T::Output> {
    let id = expect_component(walker, node)?;
    match TopLevelOutputs::new(walker, node).next() {
        Some(out) => out,
        None => Err(no_output(&id)),
    }
}

/// Every top-level output of the component instance at `node`.
pub(crate) fn all_root_outputs_of<T: RenderTree>(
    walker: &Walker<'_, T>,
    node: T::Node,
) -> ResolveResult<Vec<T::Output>> {
    let id = expect_component(walker, node)?;
    let outs = TopLevelOutputs::new(walker, node).collect::<ResolveResult<Vec<_>>>()?;
    if outs.is_empty() {
        return Err(no_output(&id));
    }
    Ok(outs)
}

fn no_output(id: &ComponentIdentity) -> ResolveError {
    ResolveError::no_output(format!("component '{id}' renders no element"))
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/root_output.rs"]
mod tests;
