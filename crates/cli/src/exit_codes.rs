//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, bad settings) |
//! | 3-9     | input            | Reading and parsing scene/data files     |
//! | 10-19   | fill             | Table discovery and population           |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use tablefill_engine::FillError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, invalid settings.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Input (3-9)
// =============================================================================

/// A scene, dataset or settings file could not be read or written.
pub const EXIT_IO: u8 = 3;

/// A scene, dataset or settings file is not valid.
pub const EXIT_PARSE: u8 = 4;

// =============================================================================
// Fill (10-19)
// =============================================================================

/// The scene has an empty selection.
pub const EXIT_FILL_EMPTY_SELECTION: u8 = 10;

/// The selection contains no cells.
pub const EXIT_FILL_NO_CELLS: u8 = 11;

/// Font loading or a text write failed.
pub const EXIT_FILL_HOST: u8 = 12;

/// Map a FillError to its exit code.
pub fn fill_exit_code(err: &FillError) -> u8 {
    match err {
        FillError::EmptySelection => EXIT_FILL_EMPTY_SELECTION,
        FillError::NoCells => EXIT_FILL_NO_CELLS,
        FillError::Host(_) => EXIT_FILL_HOST,
    }
}
