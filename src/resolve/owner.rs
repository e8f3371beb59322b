use crate::{
    foundation::core::{ComponentIdentity, RenderKind},
    foundation::error::{ResolveError, ResolveResult},
    tree::host::RenderTree,
    walk::walker::Walker,
};

/// Every component instance above `node`, innermost first, with its node.
///
/// Wrappers and decorators appear like any other owner; fragments and lists
/// are skipped. Fails with `Classification` if `node` itself is detached and
/// with `NoOwner` if there is no component above it.
pub(crate) fn owner_nodes<T: RenderTree>(
    walker: &Walker<'_, T>,
    node: T::Node,
) -> ResolveResult<Vec<(T::Node, ComponentIdentity)>> {
    // A detached start node has no parent either; don't mistake it for a root.
    walker.classify(node)?;
    let mut owners = Vec::new();
    for step in walker.ancestors(node) {
        if let (anc, RenderKind::Component(id)) = step? {
            debug_assert!(
                owners.iter().all(|(_, seen)| seen != &id),
                "component '{id}' owns itself"
            );
            owners.push((anc, id));
        }
    }
    if owners.is_empty() {
        return Err(ResolveError::no_owner(format!(
            "render node {node:?} has no component ancestor"
        )));
    }
    Ok(owners)
}

/// The innermost component instance above `node`.
pub(crate) fn innermost_owner<T: RenderTree>(
    walker: &Walker<'_, T>,
    node: T::Node,
) -> ResolveResult<(T::Node, ComponentIdentity)> {
    walker.classify(node)?;
    walker.nearest_component(node)?.ok_or_else(|| {
        ResolveError::no_owner(format!("render node {node:?} has no component ancestor"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/owner.rs"]
mod tests;
