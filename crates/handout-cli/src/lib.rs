//! handout CLI - command-line generator library
//!
//! This library wires the document model and the OOXML renderer into the
//! generator binary: it defines the handout style and numbering presets,
//! assembles the document tree, renders it, and persists the artifact.
//!
//! # Binary Usage
//!
//! ```bash
//! # Write the handout to the default path (dist/handout.docx)
//! handout
//!
//! # Write it somewhere else
//! handout --out docs/Week4_Handout.docx
//! ```

pub mod app;
pub mod sample;

// Re-export the main entry point
pub use app::run_cli;
