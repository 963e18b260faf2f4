//! In-memory scene document.
//!
//! `Document` is an arena of [`Node`]s plus the current selection. It is the
//! host used by the CLI and by tests: scenes are loaded from / written back to
//! the JSON scene format, and text edits are gated on font loading exactly as
//! a real design tool would gate them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HostError, SceneError};
use crate::host::SceneHost;
use crate::node::{FontName, Node, NodeId, NodeKind, TextContent};

// ---------------------------------------------------------------------------
// Scene file format
// ---------------------------------------------------------------------------

/// Serialized form of a node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
    /// Host properties this crate does not model (`width`, `fills`, ...),
    /// written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeSpec {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            name: name.into(),
            x: 0.0,
            y: 0.0,
            characters: None,
            font: None,
            children: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Frame, name)
    }

    pub fn instance(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Instance, name)
    }

    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        let mut spec = Self::new(NodeKind::Text, name);
        spec.characters = Some(characters.into());
        spec
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_font(mut self, font: FontName) -> Self {
        self.font = Some(font);
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Top-level scene file: `{ "nodes": [...], "selection": ["id", ...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub nodes: Vec<NodeSpec>,
    /// Node ids to select. `None` selects every top-level node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    selection: Vec<NodeId>,
    /// Explicit selection keys as loaded, kept for round-tripping.
    selection_keys: Option<Vec<String>>,
    keys: HashMap<String, NodeId>,
    loaded_fonts: HashSet<FontName>,
    unavailable_fonts: HashSet<FontName>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from root specs. `selection` lists node ids; `None`
    /// selects all roots.
    pub fn from_specs(
        roots: Vec<NodeSpec>,
        selection: Option<Vec<String>>,
    ) -> Result<Self, SceneError> {
        let mut doc = Self::new();
        for spec in roots {
            let id = doc.insert(None, spec)?;
            doc.roots.push(id);
        }

        match &selection {
            Some(keys) => {
                let mut ids = Vec::with_capacity(keys.len());
                for key in keys {
                    let id = doc
                        .find_by_key(key)
                        .ok_or_else(|| SceneError::UnknownSelection(key.clone()))?;
                    ids.push(id);
                }
                doc.selection = ids;
            }
            None => doc.selection = doc.roots.clone(),
        }
        doc.selection_keys = selection;

        Ok(doc)
    }

    pub fn from_scene(scene: SceneFile) -> Result<Self, SceneError> {
        Self::from_specs(scene.nodes, scene.selection)
    }

    pub fn from_json(input: &str) -> Result<Self, SceneError> {
        let scene: SceneFile =
            serde_json::from_str(input).map_err(|e| SceneError::Parse(e.to_string()))?;
        Self::from_scene(scene)
    }

    /// Serialize back to the scene file format.
    pub fn to_scene(&self) -> SceneFile {
        SceneFile {
            nodes: self.roots.iter().map(|&id| self.to_spec(id)).collect(),
            selection: self.selection_keys.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(&self.to_scene())
            .map_err(|e| SceneError::Serialize(e.to_string()))
    }

    /// Append `spec` (recursively) under `parent`, or as a detached root when
    /// `parent` is `None`. Root registration is up to the caller.
    pub fn insert(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> Result<NodeId, SceneError> {
        let id = NodeId::from_index(self.nodes.len());

        if let Some(key) = &spec.id {
            if self.keys.insert(key.clone(), id).is_some() {
                return Err(SceneError::DuplicateId(key.clone()));
            }
        }

        let text = if spec.kind.is_text() {
            Some(TextContent {
                characters: spec.characters.unwrap_or_default(),
                font: spec.font.unwrap_or_default(),
            })
        } else {
            None
        };

        self.nodes.push(Node {
            key: spec.id,
            kind: spec.kind,
            name: spec.name,
            x: spec.x,
            y: spec.y,
            text,
            extra: spec.extra,
            parent,
            children: Vec::new(),
        });

        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }

        for child in spec.children {
            self.insert(Some(id), child)?;
        }

        Ok(id)
    }

    fn to_spec(&self, id: NodeId) -> NodeSpec {
        let node = self.node(id);
        NodeSpec {
            id: node.key.clone(),
            kind: node.kind,
            name: node.name.clone(),
            x: node.x,
            y: node.y,
            characters: node.text.as_ref().map(|t| t.characters.clone()),
            font: node.text.as_ref().map(|t| t.font.clone()),
            children: node.children.iter().map(|&c| self.to_spec(c)).collect(),
            extra: node.extra.clone(),
        }
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another document. Use [`Document::get`]
    /// for ids of unknown origin.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn find_by_key(&self, key: &str) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_selection(&mut self, selection: Vec<NodeId>) {
        self.selection_keys = None;
        self.selection = selection;
    }

    /// Mark fonts the host cannot load. `load_fonts` fails on any of them.
    pub fn set_unavailable_fonts(&mut self, fonts: impl IntoIterator<Item = FontName>) {
        self.unavailable_fonts = fonts.into_iter().collect();
    }

    pub fn is_font_loaded(&self, font: &FontName) -> bool {
        self.loaded_fonts.contains(font)
    }
}

impl SceneHost for Document {
    fn document(&self) -> &Document {
        self
    }

    fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    fn load_fonts(&mut self, fonts: &[FontName]) -> Result<(), HostError> {
        if let Some(missing) = fonts.iter().find(|f| self.unavailable_fonts.contains(*f)) {
            return Err(HostError::FontUnavailable(missing.clone()));
        }
        self.loaded_fonts.extend(fonts.iter().cloned());
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), HostError> {
        let loaded = &self.loaded_fonts;
        let content = self
            .nodes
            .get_mut(node.index())
            .and_then(|n| n.text.as_mut())
            .ok_or(HostError::NotText(node))?;

        if !loaded.contains(&content.font) {
            return Err(HostError::FontNotLoaded {
                node,
                font: content.font.clone(),
            });
        }

        content.characters = text.to_string();
        Ok(())
    }
}
