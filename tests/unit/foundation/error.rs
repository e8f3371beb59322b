use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ResolveError::not_rendered("x")
            .to_string()
            .contains("not rendered:")
    );
    assert!(
        ResolveError::classification("x")
            .to_string()
            .contains("classification error:")
    );
    assert!(ResolveError::no_owner("x").to_string().contains("no owner:"));
    assert!(
        ResolveError::no_output("x")
            .to_string()
            .contains("no output:")
    );
    assert!(
        ResolveError::not_a_component("x")
            .to_string()
            .contains("not a component:")
    );
    assert!(
        ResolveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ResolveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        ResolveError::DepthLimit(8).to_string(),
        "depth limit of 8 exceeded"
    );
}

#[test]
fn only_classification_is_stale() {
    assert!(ResolveError::classification("x").is_stale_tree());
    assert!(!ResolveError::not_rendered("x").is_stale_tree());
    assert!(!ResolveError::no_output("x").is_stale_tree());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ResolveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
