//! Error types for rendering and persistence

use thiserror::Error;

/// Errors that can occur while rendering or persisting a document
#[derive(Error, Debug)]
pub enum DocxError {
    /// Invalid declarative input
    #[error("model error: {0}")]
    Model(#[from] handout_model::ModelError),

    /// A style reference reached the renderer without a registration
    #[error("unresolved style reference: {0}")]
    UnresolvedStyle(String),

    /// A numbering reference reached the renderer without a registration
    #[error("unresolved numbering reference: {0}")]
    UnresolvedNumbering(String),

    /// Error reading or writing the ZIP archive
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required part not found in the archive
    #[error("required part not found: {0}")]
    MissingPart(String),

    /// Invalid document structure
    #[error("invalid document structure: {0}")]
    InvalidStructure(String),
}

/// Result type for rendering and persistence operations
pub type Result<T> = std::result::Result<T, DocxError>;
