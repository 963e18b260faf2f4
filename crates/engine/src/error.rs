use std::fmt;

use tablefill_scene::HostError;

#[derive(Debug, Clone, PartialEq)]
pub enum FillError {
    /// Nothing is selected.
    EmptySelection,
    /// The selection contains no cells at the searched depths.
    NoCells,
    /// Font loading or a text write failed. Earlier writes are kept.
    Host(HostError),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "select one or more tables or cells"),
            Self::NoCells => write!(f, "no cells found in selection"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FillError {}

impl From<HostError> for FillError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}
