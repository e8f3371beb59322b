use super::*;
use crate::{RenderArena, element, fragment, list, text, tree::host::RenderTree};

fn chain_names<T: RenderTree>(walker: &Walker<'_, T>, node: T::Node) -> Vec<String> {
    owner_nodes(walker, node)
        .unwrap()
        .into_iter()
        .map(|(_, id)| id.name().to_string())
        .collect()
}

#[test]
fn wrapper_chain_is_innermost_first() {
    let div = ComponentIdentity::define("DivComponent");
    let wrapper = ComponentIdentity::define("WrapperComponent");
    let wrapped = ComponentIdentity::define("WrappedDiv");
    let mut arena = RenderArena::new();
    arena
        .mount(wrapped.render(wrapper.render(div.render(element("div").child(text("hello"))))))
        .unwrap();
    let node = arena
        .render_node_of(&arena.find_by_text("hello").unwrap())
        .unwrap();

    let walker = Walker::new(&arena);
    assert_eq!(
        chain_names(&walker, node),
        ["DivComponent", "WrapperComponent", "WrappedDiv"]
    );
    let (_, inner) = innermost_owner(&walker, node).unwrap();
    assert_eq!(inner, div);
}

#[test]
fn owner_nodes_pair_identity_with_its_instance() {
    let a = ComponentIdentity::define("A");
    let mut arena = RenderArena::new();
    let root = arena
        .mount(a.render(fragment([list([element("i").child(text("x"))])])))
        .unwrap();
    let node = arena
        .render_node_of(&arena.find_by_text("x").unwrap())
        .unwrap();

    let owners = owner_nodes(&Walker::new(&arena), node).unwrap();
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].0, root);
    assert_eq!(owners[0].1, a);
}

#[test]
fn ownerless_output_is_reported() {
    let mut arena = RenderArena::new();
    arena.mount(element("div").child(text("orphan"))).unwrap();
    let node = arena
        .render_node_of(&arena.find_by_text("orphan").unwrap())
        .unwrap();
    let walker = Walker::new(&arena);
    assert!(matches!(
        owner_nodes(&walker, node),
        Err(ResolveError::NoOwner(_))
    ));
    assert!(matches!(
        innermost_owner(&walker, node),
        Err(ResolveError::NoOwner(_))
    ));
}

#[test]
fn detached_start_node_is_a_classification_error() {
    let a = ComponentIdentity::define("A");
    let mut arena = RenderArena::new();
    let root = arena
        .mount(a.render(element("div").child(text("gone"))))
        .unwrap();
    let node = arena
        .render_node_of(&arena.find_by_text("gone").unwrap())
        .unwrap();
    arena.unmount(root).unwrap();

    let walker = Walker::new(&arena);
    let err = owner_nodes(&walker, node).unwrap_err();
    assert!(matches!(err, ResolveError::Classification(_)));
    assert!(err.is_stale_tree());
    assert!(matches!(
        innermost_owner(&walker, node),
        Err(ResolveError::Classification(_))
    ));
}

#[test]
fn owners_inside_element_children_are_found() {
    let outer = ComponentIdentity::define("Outer");
    let inner = ComponentIdentity::define("Inner");
    let mut arena = RenderArena::new();
    arena
        .mount(outer.render(
            element("section").child(inner.render(element("p").child(text("deep")))),
        ))
        .unwrap();
    let node = arena
        .render_node_of(&arena.find_by_text("deep").unwrap())
        .unwrap();
    assert_eq!(chain_names(&Walker::new(&arena), node), ["Inner", "Outer"]);
}
