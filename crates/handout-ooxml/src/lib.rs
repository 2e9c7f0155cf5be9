//! # handout-ooxml
//!
//! Deterministic OOXML (DOCX) rendering and persistence.
//!
//! This crate turns a [`handout_model::DocumentTree`] plus its style and
//! numbering registries into a complete `.docx` archive and writes it to
//! disk atomically. Rendering is a pure function of its inputs: the same
//! tree and registries always produce byte-identical output (zip entries
//! are written in sorted order with fixed timestamps, and no part embeds a
//! date or random id).
//!
//! ## Example
//!
//! ```no_run
//! use handout_model::{DocumentTree, NumberingRegistry, StyleRegistry};
//! use handout_ooxml::{persist, DocxWriter};
//!
//! let styles = StyleRegistry::new();
//! let numbering = NumberingRegistry::new();
//! let tree = DocumentTree::with_title("Handout");
//!
//! let bytes = DocxWriter::render(&tree, &styles, &numbering)?;
//! persist(&bytes, std::path::Path::new("out/handout.docx"))?;
//! # Ok::<(), handout_ooxml::DocxError>(())
//! ```

pub mod archive;
pub mod error;
pub mod numbering;
pub mod outline;
pub mod persist;
pub mod relationships;
pub mod styles;
pub mod writer;
mod xml;

pub use archive::DocxArchive;
pub use error::{DocxError, Result};
pub use outline::{DocumentOutline, OutlineElement};
pub use persist::persist;
pub use relationships::Relationships;
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
