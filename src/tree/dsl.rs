//! Declarative builders for mounting render trees into a [`RenderArena`].
//!
//! ```
//! use render_owners::{ComponentIdentity, RenderArena, element, fragment, text};
//!
//! let app = ComponentIdentity::define("App");
//! let mut arena = RenderArena::new();
//! arena
//!     .mount(app.render(fragment([
//!         element("div").child(text("hello")),
//!         element("div").child(text("world")),
//!     ])))
//!     .unwrap();
//! assert_eq!(arena.outputs().len(), 2);
//! ```

use crate::{
    foundation::core::ComponentIdentity,
    foundation::error::{ResolveError, ResolveResult},
    tree::arena::{Element, NewNode, RenderArena, RenderKey},
};

/// Declarative description of a render subtree.
#[derive(Clone, Debug)]
pub enum Node {
    /// Component instance and its optional rendered result.
    Component {
        /// Component definition.
        id: ComponentIdentity,
        /// Rendered result; `None` renders nothing.
        render: Option<Box<Node>>,
    },
    /// Fragment of siblings.
    Fragment(Vec<Node>),
    /// List of siblings.
    List(Vec<Node>),
    /// Element with children.
    Element(ElementNode),
    /// Raw text.
    Text(String),
}

/// Element builder; converts into [`Node`].
#[derive(Clone, Debug)]
pub struct ElementNode {
    element: Element,
    children: Vec<Node>,
}

impl ElementNode {
    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element.attrs.insert(name.into(), value.into());
        self
    }

    /// Append one child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children in order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl From<ElementNode> for Node {
    fn from(value: ElementNode) -> Self {
        Self::Element(value)
    }
}

impl ComponentIdentity {
    /// Instance of this component rendering `child`.
    pub fn render(&self, child: impl Into<Node>) -> Node {
        Node::Component {
            id: self.clone(),
            render: Some(Box::new(child.into())),
        }
    }

    /// Instance of this component rendering nothing.
    pub fn render_nothing(&self) -> Node {
        Node::Component {
            id: self.clone(),
            render: None,
        }
    }
}

/// Element builder for `tag`.
pub fn element(tag: impl Into<String>) -> ElementNode {
    ElementNode {
        element: Element::new(tag),
        children: Vec::new(),
    }
}

/// Text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Fragment of `children`.
pub fn fragment<I>(children: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Node::Fragment(children.into_iter().map(Into::into).collect())
}

/// List of `children`.
pub fn list<I>(children: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Node::List(children.into_iter().map(Into::into).collect())
}

impl RenderArena {
    /// Mount `node` as the tree root.
    pub fn mount(&mut self, node: impl Into<Node>) -> ResolveResult<RenderKey> {
        self.mount_at(None, node.into())
    }

    /// Mount `node` as the last child of `parent`.
    pub fn mount_under(&mut self, parent: RenderKey, node: impl Into<Node>) -> ResolveResult<RenderKey> {
        self.mount_at(Some(parent), node.into())
    }

    fn mount_at(&mut self, parent: Option<RenderKey>, node: Node) -> ResolveResult<RenderKey> {
        let mut top = None;
        let mut stack: Vec<(Option<RenderKey>, Node)> = vec![(parent, node)];
        while let Some((parent, node)) = stack.pop() {
            let (new, children) = match node {
                Node::Component { id, render } => (
                    NewNode::Component(id),
                    render.map(|r| vec![*r]).unwrap_or_default(),
                ),
                Node::Fragment(children) => (NewNode::Fragment, children),
                Node::List(children) => (NewNode::List, children),
                Node::Element(ElementNode { element, children }) => {
                    (NewNode::Element(element), children)
                }
                Node::Text(t) => (NewNode::Text(t), Vec::new()),
            };
            let key = self.insert(parent, new)?;
            top.get_or_insert(key);
            // Reverse so siblings are inserted in render order.
            for c in children.into_iter().rev() {
                stack.push((Some(key), c));
            }
        }
        top.ok_or_else(|| ResolveError::validation("nothing to mount"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/dsl.rs"]
mod tests;
