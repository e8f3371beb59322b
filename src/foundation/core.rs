use std::{fmt, hash, sync::Arc};

/// A component definition as known to the rendering engine.
///
/// The name is for diagnostics only; identity lives in [`ComponentIdentity`].
#[derive(Debug)]
pub struct ComponentDef {
    name: String,
}

impl ComponentDef {
    /// Definition display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Opaque reference to a component definition.
///
/// Equality and hashing are by reference: two definitions that share a name
/// are still distinct identities.
#[derive(Clone)]
pub struct ComponentIdentity(Arc<ComponentDef>);

impl ComponentIdentity {
    /// Define a new component. Every call yields a fresh identity.
    pub fn define(name: impl Into<String>) -> Self {
        Self(Arc::new(ComponentDef { name: name.into() }))
    }

    /// Display name of the underlying definition.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Borrow the underlying definition.
    pub fn def(&self) -> &ComponentDef {
        &self.0
    }
}

impl PartialEq for ComponentIdentity {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ComponentIdentity {}

impl hash::Hash for ComponentIdentity {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.name(), Arc::as_ptr(&self.0))
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a render node.
///
/// The set is closed; the component identity travels with its variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderKind {
    /// A component instance with exactly one rendered child subtree.
    Component(ComponentIdentity),
    /// Grouping construct with no output of its own.
    Fragment,
    /// Array/list of siblings at one logical position.
    List,
    /// Element that produced exactly one output node.
    Element,
    /// Raw text; produces no output node in this model.
    Text,
}

impl RenderKind {
    /// Component identity, if this is a component instance.
    pub fn component(&self) -> Option<&ComponentIdentity> {
        match self {
            Self::Component(id) => Some(id),
            _ => None,
        }
    }

    /// Whether an upward or downward walk passes straight through this kind.
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Fragment | Self::List)
    }

    /// Short lowercase label, stable for logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Component(_) => "component",
            Self::Fragment => "fragment",
            Self::List => "list",
            Self::Element => "element",
            Self::Text => "text",
        }
    }
}

/// Handle to an output node produced by an in-memory render tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct OutputId(pub u32);

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolveOpts {
    /// Upper bound on nodes visited by one upward walk, and on the depth of a
    /// downward search. Guards against malformed host trees.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolveOpts {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    4096
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
