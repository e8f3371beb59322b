/// Convenience result type used across the resolver.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Top-level error taxonomy used by resolver and tree APIs.
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    /// The output node was never produced by a tracked render tree.
    #[error("not rendered: {0}")]
    NotRendered(String),

    /// A render node was found detached mid-walk; re-resolve after a fresh render pass.
    #[error("classification error: {0}")]
    Classification(String),

    /// An output node has no component ancestor at all.
    #[error("no owner: {0}")]
    NoOwner(String),

    /// A component subtree produces no concrete output node.
    #[error("no output: {0}")]
    NoOutput(String),

    /// A component-entry API was handed a node that is not a component instance.
    #[error("not a component: {0}")]
    NotAComponent(String),

    /// A walk exceeded the configured depth limit.
    #[error("depth limit of {0} exceeded")]
    DepthLimit(usize),

    /// A tree under construction violated a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing snapshots.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResolveError {
    /// Build a [`ResolveError::NotRendered`] value.
    pub fn not_rendered(msg: impl Into<String>) -> Self {
        Self::NotRendered(msg.into())
    }

    /// Build a [`ResolveError::Classification`] value.
    pub fn classification(msg: impl Into<String>) -> Self {
        Self::Classification(msg.into())
    }

    /// Build a [`ResolveError::NoOwner`] value.
    pub fn no_owner(msg: impl Into<String>) -> Self {
        Self::NoOwner(msg.into())
    }

    /// Build a [`ResolveError::NoOutput`] value.
    pub fn no_output(msg: impl Into<String>) -> Self {
        Self::NoOutput(msg.into())
    }

    /// Build a [`ResolveError::NotAComponent`] value.
    pub fn not_a_component(msg: impl Into<String>) -> Self {
        Self::NotAComponent(msg.into())
    }

    /// Build a [`ResolveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ResolveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether a fresh render pass followed by re-resolution may succeed.
    pub fn is_stale_tree(&self) -> bool {
        matches!(self, Self::Classification(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
