use std::{collections::BTreeMap, fmt};

use slotmap::SlotMap;

use crate::{
    foundation::core::{ComponentIdentity, OutputId, RenderKind},
    foundation::error::{ResolveError, ResolveResult},
    tree::host::RenderTree,
};

slotmap::new_key_type! {
    /// Generational handle to a node in a [`RenderArena`].
    ///
    /// A key outlives its node: after an unmount the key still exists but
    /// classifies as detached.
    pub struct RenderKey;
}

/// An output element as the arena renders it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Element tag, e.g. `div`.
    pub tag: String,
    /// Attributes in stable key order.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    /// Element with no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (k, v) in &self.attrs {
            write!(f, " {k}=\"{v}\"")?;
        }
        f.write_str(">")
    }
}

/// A single node to insert into the arena.
#[derive(Clone, Debug)]
pub enum NewNode {
    /// Component instance.
    Component(ComponentIdentity),
    /// Fragment.
    Fragment,
    /// List container.
    List,
    /// Element; the arena allocates its output.
    Element(Element),
    /// Raw text.
    Text(String),
}

#[derive(Debug)]
enum Payload {
    Component(ComponentIdentity),
    Fragment,
    List,
    Element(OutputId),
    Text(String),
}

#[derive(Debug)]
struct Slot {
    payload: Payload,
    parent: Option<RenderKey>,
    children: Vec<RenderKey>,
}

#[derive(Debug)]
struct OutputSlot {
    element: Element,
    // `None` for outputs injected outside the render tree.
    node: Option<RenderKey>,
}

/// In-memory render tree host.
///
/// The arena plays the rendering engine's role: it owns every node, maintains
/// parent links and the output back-links, and implements [`RenderTree`] for
/// the resolver.
#[derive(Debug, Default)]
pub struct RenderArena {
    nodes: SlotMap<RenderKey, Slot>,
    outputs: BTreeMap<OutputId, OutputSlot>,
    next_output: u32,
    root: Option<RenderKey>,
}

impl RenderArena {
    /// Empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node, if mounted.
    pub fn root(&self) -> Option<RenderKey> {
        self.root
    }

    /// Number of live render nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are mounted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `key` still refers to a mounted node.
    pub fn contains(&self, key: RenderKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Insert one node. `parent == None` mounts the root.
    ///
    /// Rejects shapes the resolver relies on never seeing: a second root, a
    /// component with more than one rendered child, children under text, and
    /// a component nested inside an instance of itself.
    pub fn insert(&mut self, parent: Option<RenderKey>, node: NewNode) -> ResolveResult<RenderKey> {
        match parent {
            None if self.root.is_some() => {
                return Err(ResolveError::validation("tree already has a root"));
            }
            None => {}
            Some(p) => self.check_can_adopt(p, &node)?,
        }

        let payload = match node {
            NewNode::Component(id) => Payload::Component(id),
            NewNode::Fragment => Payload::Fragment,
            NewNode::List => Payload::List,
            NewNode::Text(text) => Payload::Text(text),
            NewNode::Element(element) => Payload::Element(self.alloc_output(element)?),
        };
        let out = match &payload {
            Payload::Element(out) => Some(*out),
            _ => None,
        };

        let key = self.nodes.insert(Slot {
            payload,
            parent,
            children: Vec::new(),
        });
        if let Some(out) = out
            && let Some(slot) = self.outputs.get_mut(&out)
        {
            slot.node = Some(key);
        }
        match parent {
            Some(p) => {
                if let Some(slot) = self.nodes.get_mut(p) {
                    slot.children.push(key);
                }
            }
            None => self.root = Some(key),
        }
        Ok(key)
    }

    fn check_can_adopt(&self, parent: RenderKey, node: &NewNode) -> ResolveResult<()> {
        let slot = self
            .nodes
            .get(parent)
            .ok_or_else(|| ResolveError::validation("parent node is not mounted"))?;
        match &slot.payload {
            Payload::Text(_) => {
                return Err(ResolveError::validation("text nodes cannot have children"));
            }
            Payload::Component(id) if !slot.children.is_empty() => {
                return Err(ResolveError::validation(format!(
                    "component '{id}' already has a rendered child"
                )));
            }
            _ => {}
        }

        if let NewNode::Component(id) = node {
            let mut cur = Some(parent);
            while let Some(k) = cur {
                let Some(s) = self.nodes.get(k) else { break };
                if let Payload::Component(anc) = &s.payload
                    && anc == id
                {
                    return Err(ResolveError::validation(format!(
                        "component '{id}' is nested inside an instance of itself"
                    )));
                }
                cur = s.parent;
            }
        }
        Ok(())
    }

    fn alloc_output(&mut self, element: Element) -> ResolveResult<OutputId> {
        let next = self
            .next_output
            .checked_add(1)
            .ok_or_else(|| ResolveError::validation("output ids exhausted"))?;
        let id = OutputId(self.next_output);
        self.next_output = next;
        self.outputs.insert(id, OutputSlot { element, node: None });
        Ok(id)
    }

    /// Register an output node that no render node produced, as a host page
    /// would when something outside the framework touches the document.
    pub fn inject_raw_output(&mut self, element: Element) -> ResolveResult<OutputId> {
        self.alloc_output(element)
    }

    /// Remove `key` and its whole subtree.
    ///
    /// Outputs of removed elements stay registered with their stale back-link,
    /// so resolving one reports the node as detached rather than unrendered.
    pub fn unmount(&mut self, key: RenderKey) -> ResolveResult<()> {
        let parent = self
            .nodes
            .get(key)
            .ok_or_else(|| ResolveError::validation("node is not mounted"))?
            .parent;
        if let Some(p) = parent
            && let Some(ps) = self.nodes.get_mut(p)
        {
            ps.children.retain(|&c| c != key);
        }
        if self.root == Some(key) {
            self.root = None;
        }

        let mut stack = vec![key];
        while let Some(k) = stack.pop() {
            let Some(slot) = self.nodes.remove(k) else {
                continue;
            };
            stack.extend(slot.children);
        }
        Ok(())
    }

    /// Element data behind an output, including injected and unmounted ones.
    pub fn element(&self, output: OutputId) -> Option<&Element> {
        self.outputs.get(&output).map(|s| &s.element)
    }

    /// Text carried by a text node.
    pub fn text_of(&self, key: RenderKey) -> Option<&str> {
        match &self.nodes.get(key)?.payload {
            Payload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Outputs produced by the mounted tree, in document order.
    pub fn outputs(&self) -> Vec<OutputId> {
        self.preorder()
            .into_iter()
            .filter_map(|k| self.output_of(k))
            .collect()
    }

    /// Concatenated text of every text node under the output's element.
    pub fn text_content(&self, output: OutputId) -> Option<String> {
        let node = self.outputs.get(&output)?.node?;
        if !self.nodes.contains_key(node) {
            return None;
        }
        let mut s = String::new();
        for k in self.preorder_from(node) {
            if let Some(t) = self.text_of(k) {
                s.push_str(t);
            }
        }
        Some(s)
    }

    /// First element, in document order, with a direct text child equal to
    /// `text`. Fragments, lists and components between the element and the
    /// text produce no output, so text reached through them counts as direct.
    pub fn find_by_text(&self, text: &str) -> Option<OutputId> {
        self.preorder().into_iter().find_map(|k| {
            let out = self.output_of(k)?;
            let mut stack: Vec<RenderKey> = self.children_of(k).into_iter().rev().collect();
            while let Some(c) = stack.pop() {
                let slot = self.nodes.get(c)?;
                match &slot.payload {
                    Payload::Text(t) if t == text => return Some(out),
                    Payload::Fragment | Payload::List | Payload::Component(_) => {
                        stack.extend(slot.children.iter().rev().copied());
                    }
                    _ => {}
                }
            }
            None
        })
    }

    /// Node keys in document (pre-)order from the root.
    pub fn preorder(&self) -> Vec<RenderKey> {
        match self.root {
            Some(root) => self.preorder_from(root),
            None => Vec::new(),
        }
    }

    fn preorder_from(&self, start: RenderKey) -> Vec<RenderKey> {
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(k) = stack.pop() {
            let Some(slot) = self.nodes.get(k) else {
                continue;
            };
            out.push(k);
            stack.extend(slot.children.iter().rev().copied());
        }
        out
    }

    /// Depth of `key` below the root (root is 0).
    pub fn depth_of(&self, key: RenderKey) -> usize {
        let mut depth = 0;
        let mut cur = self.parent_of(key);
        while let Some(k) = cur {
            depth += 1;
            cur = self.parent_of(k);
        }
        depth
    }
}

impl RenderTree for RenderArena {
    type Node = RenderKey;
    type Output = OutputId;

    fn render_node_of(&self, output: &OutputId) -> ResolveResult<RenderKey> {
        self.outputs
            .get(output)
            .and_then(|s| s.node)
            .ok_or_else(|| {
                ResolveError::not_rendered(format!("output {output} has no originating render node"))
            })
    }

    fn parent_of(&self, node: RenderKey) -> Option<RenderKey> {
        self.nodes.get(node)?.parent
    }

    fn classify(&self, node: RenderKey) -> ResolveResult<RenderKind> {
        let slot = self.nodes.get(node).ok_or_else(|| {
            ResolveError::classification(format!("render node {node:?} is detached"))
        })?;
        Ok(match &slot.payload {
            Payload::Component(id) => RenderKind::Component(id.clone()),
            Payload::Fragment => RenderKind::Fragment,
            Payload::List => RenderKind::List,
            Payload::Element(_) => RenderKind::Element,
            Payload::Text(_) => RenderKind::Text,
        })
    }

    fn children_of(&self, node: RenderKey) -> Vec<RenderKey> {
        self.nodes
            .get(node)
            .map(|s| s.children.clone())
            .unwrap_or_default()
    }

    fn output_of(&self, node: RenderKey) -> Option<OutputId> {
        match self.nodes.get(node)?.payload {
            Payload::Element(out) => Some(out),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/arena.rs"]
mod tests;
