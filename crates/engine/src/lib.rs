//! `tablefill-engine` — the fill actions.
//!
//! Ties discovery (`tablefill-scene`) to data (`tablefill-datagen`): find the
//! selected table, load its fonts, write one value per cell.

pub mod error;
pub mod fill;
pub mod populate;

pub use error::FillError;
pub use fill::{
    discover, fill_dataset, fill_fixed, fill_inferred, header_row, read_table, FillOptions,
    FillReport, GenerateRequest,
};
pub use populate::populate;
