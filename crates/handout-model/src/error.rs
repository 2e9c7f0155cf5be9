//! Error types for document model construction
//!
//! Every variant indicates a defect in the template itself: these errors are
//! fatal and surfaced immediately, with no retry or recovery.

use thiserror::Error;

/// Errors raised while registering styles and numbering schemes or building
/// content nodes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A style id was registered twice; the first registration stays active
    #[error("style '{id}' is already defined")]
    DuplicateStyle {
        /// The offending style id
        id: String,
    },

    /// A referenced style id has no registration
    #[error("style '{id}' is not defined")]
    UnknownStyle {
        /// The unresolved style id
        id: String,
    },

    /// A numbering reference was registered twice
    #[error("numbering reference '{reference}' is already defined")]
    DuplicateNumbering {
        /// The offending reference name
        reference: String,
    },

    /// A numbering scheme was registered without any level definitions
    #[error("numbering reference '{reference}' has no levels")]
    EmptyNumbering {
        /// The offending reference name
        reference: String,
    },

    /// A referenced numbering scheme has no registration
    #[error("numbering reference '{reference}' is not defined")]
    UnknownNumbering {
        /// The unresolved reference name
        reference: String,
    },

    /// A table row's cell count does not match the declared column widths
    #[error("table row {row} has {cells} cells but {columns} columns are declared")]
    RowWidthMismatch {
        /// Zero-based index of the offending row
        row: usize,
        /// Number of cells in that row
        cells: usize,
        /// Number of declared column widths
        columns: usize,
    },

    /// A table was declared without any column widths
    #[error("table must declare at least one column width")]
    NoColumns,

    /// A literal text run was constructed with empty text
    #[error("text runs must not be empty")]
    EmptyRun,

    /// A list item referenced a numbering level the scheme does not define
    #[error("numbering reference '{reference}' defines {levels} levels, level {level} requested")]
    LevelOutOfRange {
        /// The reference name
        reference: String,
        /// Number of levels the scheme defines
        levels: usize,
        /// The requested zero-based level
        level: u8,
    },
}
