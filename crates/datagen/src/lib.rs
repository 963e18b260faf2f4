//! `tablefill-datagen` — datasets and synthetic table content.
//!
//! Pure crate: no IO. Randomness is always injected through
//! [`RandomSource`], so callers decide between entropy and a fixed seed.

pub mod classify;
pub mod dataset;
pub mod fixed;
pub mod infer;
pub mod pools;
pub mod random;
pub mod values;

pub use classify::{classify_header, ColumnType, FieldKind};
pub use dataset::{stringify, Dataset, DatasetError, Record};
pub use fixed::{generate_fixed, FixedOptions};
pub use infer::generate_from_headers;
pub use pools::Pools;
pub use random::{RandomSource, RngSource};
