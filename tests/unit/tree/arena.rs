use super::*;

fn div_with_text(arena: &mut RenderArena, parent: RenderKey, s: &str) -> (RenderKey, OutputId) {
    let el = arena
        .insert(Some(parent), NewNode::Element(Element::new("div")))
        .unwrap();
    arena.insert(Some(el), NewNode::Text(s.to_string())).unwrap();
    (el, arena.output_of(el).unwrap())
}

#[test]
fn insert_links_parent_children_and_outputs() {
    let a = ComponentIdentity::define("A");
    let mut arena = RenderArena::new();
    let root = arena.insert(None, NewNode::Component(a.clone())).unwrap();
    let frag = arena.insert(Some(root), NewNode::Fragment).unwrap();
    let (d0, o0) = div_with_text(&mut arena, frag, "hello");
    let (d1, o1) = div_with_text(&mut arena, frag, "world");

    assert_eq!(arena.root(), Some(root));
    assert_eq!(arena.children_of(frag), vec![d0, d1]);
    assert_eq!(arena.parent_of(d0), Some(frag));
    assert_eq!(arena.parent_of(root), None);
    assert_eq!(arena.render_node_of(&o1).unwrap(), d1);
    assert_eq!(arena.classify(root).unwrap(), RenderKind::Component(a));
    assert_eq!(arena.classify(frag).unwrap(), RenderKind::Fragment);
    assert_eq!(arena.output_of(frag), None);
    assert_eq!(arena.outputs(), vec![o0, o1]);
    assert_eq!(arena.depth_of(d1), 2);
    assert_eq!(arena.len(), 6);
}

#[test]
fn second_root_is_rejected() {
    let mut arena = RenderArena::new();
    arena.insert(None, NewNode::Fragment).unwrap();
    let err = arena.insert(None, NewNode::Fragment).unwrap_err();
    assert!(matches!(err, ResolveError::Validation(_)));
}

#[test]
fn component_accepts_a_single_rendered_child() {
    let mut arena = RenderArena::new();
    let root = arena
        .insert(None, NewNode::Component(ComponentIdentity::define("A")))
        .unwrap();
    arena.insert(Some(root), NewNode::Fragment).unwrap();
    let err = arena.insert(Some(root), NewNode::Fragment).unwrap_err();
    assert!(err.to_string().contains("already has a rendered child"));
}

#[test]
fn text_cannot_have_children() {
    let mut arena = RenderArena::new();
    let root = arena.insert(None, NewNode::Text("x".into())).unwrap();
    assert!(arena.insert(Some(root), NewNode::Fragment).is_err());
}

#[test]
fn reentrant_component_identity_is_rejected() {
    let a = ComponentIdentity::define("A");
    let b = ComponentIdentity::define("B");
    let mut arena = RenderArena::new();
    let root = arena.insert(None, NewNode::Component(a.clone())).unwrap();
    let div = arena
        .insert(Some(root), NewNode::Element(Element::new("div")))
        .unwrap();
    let inner = arena.insert(Some(div), NewNode::Component(b)).unwrap();
    let err = arena
        .insert(Some(inner), NewNode::Component(a))
        .unwrap_err();
    assert!(err.to_string().contains("nested inside an instance of itself"));

    // Same name, different definition: fine.
    arena
        .insert(Some(inner), NewNode::Component(ComponentIdentity::define("A")))
        .unwrap();
}

#[test]
fn unmount_detaches_subtree_and_keeps_stale_outputs() {
    let mut arena = RenderArena::new();
    let root = arena.insert(None, NewNode::Fragment).unwrap();
    let (d0, o0) = div_with_text(&mut arena, root, "hello");
    let (_, o1) = div_with_text(&mut arena, root, "world");

    arena.unmount(d0).unwrap();

    assert!(!arena.contains(d0));
    assert!(matches!(
        arena.classify(d0),
        Err(ResolveError::Classification(_))
    ));
    assert_eq!(arena.render_node_of(&o0).unwrap(), d0);
    assert_eq!(arena.element(o0).map(|e| e.tag.as_str()), Some("div"));
    assert_eq!(arena.text_content(o0), None);
    assert_eq!(arena.outputs(), vec![o1]);
    assert_eq!(arena.len(), 3);
    assert!(arena.unmount(d0).is_err());
}

#[test]
fn unmounting_root_clears_tree() {
    let mut arena = RenderArena::new();
    let root = arena.insert(None, NewNode::Fragment).unwrap();
    div_with_text(&mut arena, root, "hello");
    arena.unmount(root).unwrap();
    assert!(arena.is_empty());
    assert_eq!(arena.root(), None);
    assert!(arena.outputs().is_empty());
}

#[test]
fn injected_output_is_not_rendered() {
    let mut arena = RenderArena::new();
    let raw = arena.inject_raw_output(Element::new("span")).unwrap();
    assert_eq!(arena.element(raw).map(|e| e.tag.as_str()), Some("span"));
    assert!(matches!(
        arena.render_node_of(&raw),
        Err(ResolveError::NotRendered(_))
    ));
}

#[test]
fn output_ids_are_never_reused_or_wrapped() {
    let mut arena = RenderArena::new();
    arena.next_output = u32::MAX - 1;
    let last = arena.inject_raw_output(Element::new("span")).unwrap();
    assert_eq!(last, OutputId(u32::MAX - 1));

    let err = arena.inject_raw_output(Element::new("span")).unwrap_err();
    assert!(matches!(err, ResolveError::Validation(_)));
    let err = arena
        .insert(None, NewNode::Element(Element::new("div")))
        .unwrap_err();
    assert!(err.to_string().contains("output ids exhausted"));
    assert!(arena.is_empty());
    assert_eq!(arena.root(), None);
}

#[test]
fn find_by_text_matches_direct_text_only() {
    let mut arena = RenderArena::new();
    let root = arena
        .insert(None, NewNode::Element(Element::new("section")))
        .unwrap();
    let (_, outer) = div_with_text(&mut arena, root, "container");
    let list = arena.insert(Some(root), NewNode::List).unwrap();
    let (_, hello) = div_with_text(&mut arena, list, "hello");

    assert_eq!(arena.find_by_text("hello"), Some(hello));
    assert_eq!(arena.find_by_text("container"), Some(outer));
    assert_eq!(arena.find_by_text("missing"), None);
    assert_eq!(
        arena.text_content(arena.output_of(root).unwrap()).as_deref(),
        Some("containerhello")
    );
}

#[test]
fn element_display_lists_attrs_in_key_order() {
    let mut el = Element::new("div");
    el.attrs.insert("id".into(), "x".into());
    el.attrs.insert("data-test".into(), "1".into());
    assert_eq!(el.to_string(), r#"<div data-test="1" id="x">"#);
    assert_eq!(el.attr("id"), Some("x"));
}
