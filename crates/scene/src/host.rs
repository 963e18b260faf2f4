//! Host capabilities consumed by the fill pipeline.

use crate::document::Document;
use crate::error::HostError;
use crate::node::{FontName, NodeId};

/// The design tool as seen by the fill pipeline.
///
/// The pipeline only reads the tree, asks for fonts once per action, and then
/// writes text. Hosts serialize user actions, so no two fills ever overlap.
pub trait SceneHost {
    /// Read-only view of the scene graph.
    fn document(&self) -> &Document;

    /// Current selection, in host order.
    fn selection(&self) -> &[NodeId];

    /// Make every font in `fonts` renderable. Blocks until done.
    ///
    /// Must be called before `set_text` touches any node using one of them.
    fn load_fonts(&mut self, fonts: &[FontName]) -> Result<(), HostError>;

    /// Replace the characters of a text node.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), HostError>;
}
