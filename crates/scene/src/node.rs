//! Scene node types.
//!
//! A `Node` is one element of the host's visual scene graph. Nodes are owned
//! by a [`Document`](crate::document::Document) arena and addressed by
//! [`NodeId`], so parent links never form reference cycles.

use serde::{Deserialize, Serialize};

/// Index of a node inside its owning document.
///
/// Only meaningful for the document that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node type as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
}

impl NodeKind {
    /// Kinds that may own children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Frame
                | Self::Group
                | Self::Section
                | Self::Component
                | Self::ComponentSet
                | Self::Instance
        )
    }

    /// Component masters and their instances. Selecting one of these that is
    /// not itself a cell means "the cells are my direct children".
    pub fn is_component_like(self) -> bool {
        matches!(self, Self::Component | Self::Instance)
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Section => "SECTION",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Vector => "VECTOR",
            Self::Line => "LINE",
        };
        write!(f, "{s}")
    }
}

/// Font descriptor of a text node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::new("Inter", "Regular")
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Text payload carried by TEXT nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextContent {
    pub characters: String,
    pub font: FontName,
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Host-assigned identifier, if any. Used to address the selection.
    pub key: Option<String>,
    pub kind: NodeKind,
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Present only for TEXT nodes.
    pub text: Option<TextContent>,
    /// Host properties carried through unchanged.
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// True when this node can receive text.
    pub fn is_text_bearing(&self) -> bool {
        self.kind.is_text() && self.text.is_some()
    }

    pub fn characters(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.characters.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_kinds() {
        assert!(NodeKind::Frame.is_container());
        assert!(NodeKind::Instance.is_container());
        assert!(!NodeKind::Text.is_container());
        assert!(!NodeKind::Rectangle.is_container());
    }

    #[test]
    fn component_like_kinds() {
        assert!(NodeKind::Instance.is_component_like());
        assert!(NodeKind::Component.is_component_like());
        assert!(!NodeKind::Frame.is_component_like());
        assert!(!NodeKind::ComponentSet.is_component_like());
    }

    #[test]
    fn kind_serializes_screaming_case() {
        let json = serde_json::to_string(&NodeKind::ComponentSet).unwrap();
        assert_eq!(json, "\"COMPONENT_SET\"");
        let kind: NodeKind = serde_json::from_str("\"INSTANCE\"").unwrap();
        assert_eq!(kind, NodeKind::Instance);
        assert_eq!(NodeKind::ComponentSet.to_string(), "COMPONENT_SET");
    }

    #[test]
    fn names_compare_case_insensitively() {
        let node = Node {
            key: None,
            kind: NodeKind::Instance,
            name: "Cell".into(),
            x: 0.0,
            y: 0.0,
            text: None,
            extra: Default::default(),
            parent: None,
            children: Vec::new(),
        };
        assert!(node.is_named("cell"));
        assert!(node.is_named("CELL"));
        assert!(!node.is_named("cells"));
    }
}
