//! # handout-model
//!
//! Declarative document model for programmatic handout assembly.
//!
//! A document is described as an immutable value: a [`StyleRegistry`] and a
//! [`NumberingRegistry`] hold the named presets, and a [`DocumentTree`] holds
//! page sections whose children are [`ContentNode`]s (paragraphs, tables,
//! page breaks). Constructors validate locally-checkable invariants — style
//! and numbering references must resolve, table rows must match the declared
//! column widths — so a broken template fails before anything is rendered.

pub mod block;
pub mod document;
pub mod error;
pub mod numbering;
pub mod run;
pub mod style;

pub use block::{Cell, ContentNode, ListRef, Paragraph, Table, TableBorders, TableRow};
pub use document::{DocumentMeta, DocumentTree, HeaderFooter, PageMargins, Section};
pub use error::ModelError;
pub use numbering::{NumberFormat, NumberingLevel, NumberingRegistry};
pub use run::{RunContent, TextRun};
pub use style::{Alignment, RunDefaults, StyleAttributes, StyleRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
