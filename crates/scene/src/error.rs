use std::fmt;

use crate::node::{FontName, NodeId};

/// Errors raised while building or serializing a scene document.
#[derive(Debug)]
pub enum SceneError {
    /// JSON parse / deserialization error.
    Parse(String),
    /// Two nodes share the same `id`.
    DuplicateId(String),
    /// A selection entry names no node in the document.
    UnknownSelection(String),
    /// Serialization failure when writing the scene back out.
    Serialize(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "scene parse error: {msg}"),
            Self::DuplicateId(id) => write!(f, "duplicate node id '{id}'"),
            Self::UnknownSelection(id) => write!(f, "selection references unknown node '{id}'"),
            Self::Serialize(msg) => write!(f, "scene serialize error: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Errors reported by a [`SceneHost`](crate::host::SceneHost) capability.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host could not make a font renderable.
    FontUnavailable(FontName),
    /// Text was assigned before the node's font was loaded.
    FontNotLoaded { node: NodeId, font: FontName },
    /// Text was assigned to a node that cannot carry text.
    NotText(NodeId),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontUnavailable(font) => write!(f, "font '{font}' is not available"),
            Self::FontNotLoaded { node, font } => {
                write!(f, "node {node}: font '{font}' must be loaded before editing text")
            }
            Self::NotText(node) => write!(f, "node {node} is not a text node"),
        }
    }
}

impl std::error::Error for HostError {}
