//! `tablefill-scene` — scene graph model and table discovery.
//!
//! Pure crate: walks a host scene graph to find cells, groups them into rows,
//! and resolves each cell's value slot. No IO beyond the JSON scene format.

pub mod document;
pub mod error;
pub mod host;
pub mod node;
pub mod rows;
pub mod select;
pub mod slot;
pub mod walk;

pub use document::{Document, NodeSpec, SceneFile};
pub use error::{HostError, SceneError};
pub use host::SceneHost;
pub use node::{FontName, Node, NodeId, NodeKind, TextContent};
pub use rows::{organize_rows, Row, Table};
pub use select::collect_cells;
pub use slot::{collect_fonts, find_value_slot};
