//! The UI node tree.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use crate::component::Component;
use crate::property::Props;

/// Upper bound on chained component expansions for a single node.
pub const MAX_EXPANSION_DEPTH: usize = 64;

/// Kind of a UI node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Box,
    Row,
    Column,
    Container,
    Custom,
    /// Any kind the toolkit has no dedicated rule for.
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Text => "Text",
            NodeKind::Box => "Box",
            NodeKind::Row => "Row",
            NodeKind::Column => "Column",
            NodeKind::Container => "Container",
            NodeKind::Custom => "Custom",
            NodeKind::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "Text" => NodeKind::Text,
            "Box" => NodeKind::Box,
            "Row" => NodeKind::Row,
            "Column" => NodeKind::Column,
            "Container" => NodeKind::Container,
            "Custom" => NodeKind::Custom,
            other => NodeKind::Other(other.to_owned()),
        }
    }

    /// Kinds whose attached component, if any, replaces the node.
    pub fn is_deferred(&self) -> bool {
        matches!(self, NodeKind::Custom | NodeKind::Other(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed element of the UI tree.
///
/// Keys only need to be unique among siblings for [`Node::find_child`], but
/// layout results are keyed by bare key, so trees handed to the layout
/// engine should keep keys unique across the whole tree.
#[derive(Clone)]
pub struct Node {
    kind: NodeKind,
    key: String,
    props: Props,
    children: Vec<Node>,
    component: Option<Arc<dyn Component>>,
}

impl Node {
    pub fn new(kind: NodeKind, key: impl Into<String>, props: Props) -> Self {
        Self {
            kind,
            key: key.into(),
            props,
            children: Vec::new(),
            component: None,
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_component(mut self, component: impl Component + 'static) -> Self {
        self.component = Some(Arc::new(component));
        self
    }

    pub fn with_shared_component(mut self, component: Arc<dyn Component>) -> Self {
        self.component = Some(component);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn component(&self) -> Option<&Arc<dyn Component>> {
        self.component.as_ref()
    }

    pub fn has_component(&self) -> bool {
        self.component.is_some()
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Removes the first child with `key`.
    pub fn remove_child(&mut self, key: &str) -> Option<Node> {
        let index = self.children.iter().position(|child| child.key == key)?;
        Some(self.children.remove(index))
    }

    pub fn find_child(&self, key: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.key == key)
    }

    /// The component to expand, if this node's kind defers to one.
    fn deferred_component(&self) -> Option<&Arc<dyn Component>> {
        if self.kind.is_deferred() {
            self.component.as_ref()
        } else {
            None
        }
    }

    /// Follows component expansion until a node that does not defer is
    /// reached.
    ///
    /// Nodes without a component are returned borrowed. A chain longer than
    /// [`MAX_EXPANSION_DEPTH`] stops at the last produced node, which then
    /// still carries its component.
    pub fn expand(&self) -> Cow<'_, Node> {
        let mut current = Cow::Borrowed(self);
        for _ in 0..MAX_EXPANSION_DEPTH {
            let Some(component) = current.deferred_component().cloned() else {
                return current;
            };
            let replacement = component.render(current.props());
            log::trace!(
                "expanded '{}' into {} '{}'",
                current.key,
                replacement.kind,
                replacement.key
            );
            current = Cow::Owned(replacement);
        }
        if current.deferred_component().is_some() {
            log::warn!(
                "component expansion of '{}' exceeded {} levels; using '{}' unexpanded",
                self.key,
                MAX_EXPANSION_DEPTH,
                current.key
            );
        }
        current
    }

    /// Whether this node still defers to a component (an expansion chain
    /// that hit the depth limit).
    pub fn is_unexpanded(&self) -> bool {
        self.deferred_component().is_some()
    }

    /// Number of nodes below this one, not counting component expansions.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Indented debug dump of the tree.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = writeln!(
            out,
            "- {} (Type: {}, Props: {})",
            self.key, self.kind, self.props
        );
        for child in &self.children {
            child.write_tree(out, depth + 1);
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("component", &self.component.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;
