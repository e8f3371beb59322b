use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    foundation::core::ComponentIdentity,
    foundation::error::{ResolveError, ResolveResult},
    tree::{
        arena::RenderArena,
        dsl::{ElementNode, Node, element},
    },
};

/// JSON boundary for a captured render tree.
///
/// Within one snapshot, equal component names denote the same definition.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TreeSnapshot {
    /// Root node.
    pub root: NodeDef,
}

/// Serialized render node, tagged by `kind`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDef {
    /// Component instance.
    Component {
        /// Component definition name.
        name: String,
        /// Rendered result, absent for components rendering nothing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        render: Option<Box<NodeDef>>,
    },
    /// Fragment.
    Fragment {
        /// Children in render order.
        #[serde(default)]
        children: Vec<NodeDef>,
    },
    /// List container.
    List {
        /// Children in render order.
        #[serde(default)]
        children: Vec<NodeDef>,
    },
    /// Output-producing element.
    Element {
        /// Element tag.
        tag: String,
        /// Attributes.
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        /// Children in render order.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<NodeDef>,
    },
    /// Raw text.
    Text {
        /// Text content.
        text: String,
    },
}

/// A snapshot mounted into an arena, with its component table.
#[derive(Debug)]
pub struct LoadedTree {
    /// Mounted tree.
    pub arena: RenderArena,
    /// One identity per distinct component name.
    pub components: BTreeMap<String, ComponentIdentity>,
}

impl LoadedTree {
    /// Identity for a component name used in the snapshot.
    pub fn component(&self, name: &str) -> Option<&ComponentIdentity> {
        self.components.get(name)
    }
}

impl TreeSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json_str(s: &str) -> ResolveResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ResolveError::serde(format!("parse render tree JSON: {e}")))
    }

    /// Parse a snapshot from a JSON reader.
    pub fn from_reader(r: impl Read) -> ResolveResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ResolveError::serde(format!("parse render tree JSON: {e}")))
    }

    /// Parse a snapshot from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ResolveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ResolveError::validation(format!("open render tree JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Mount into a fresh arena, validating tree invariants.
    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> ResolveResult<LoadedTree> {
        let mut components = BTreeMap::new();
        let root = to_node(&self.root, &mut components);
        let mut arena = RenderArena::new();
        arena.mount(root)?;
        tracing::debug!(
            nodes = arena.len(),
            components = components.len(),
            "render tree loaded"
        );
        Ok(LoadedTree { arena, components })
    }
}

fn to_node(def: &NodeDef, components: &mut BTreeMap<String, ComponentIdentity>) -> Node {
    match def {
        NodeDef::Component { name, render } => {
            let id = components
                .entry(name.clone())
                .or_insert_with(|| ComponentIdentity::define(name.clone()))
                .clone();
            match render {
                Some(r) => id.render(to_node(r, components)),
                None => id.render_nothing(),
            }
        }
        NodeDef::Fragment { children } => Node::Fragment(to_nodes(children, components)),
        NodeDef::List { children } => Node::List(to_nodes(children, components)),
        NodeDef::Element {
            tag,
            attrs,
            children,
        } => {
            let el: ElementNode = attrs
                .iter()
                .fold(element(tag.clone()), |el, (k, v)| el.attr(k.clone(), v.clone()));
            el.children(to_nodes(children, components)).into()
        }
        NodeDef::Text { text } => Node::Text(text.clone()),
    }
}

fn to_nodes(defs: &[NodeDef], components: &mut BTreeMap<String, ComponentIdentity>) -> Vec<Node> {
    defs.iter().map(|d| to_node(d, components)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/tree/snapshot.rs"]
mod tests;
