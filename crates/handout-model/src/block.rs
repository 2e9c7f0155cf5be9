//! Block-level content nodes
//!
//! This module defines the tagged content-node variants that make up the
//! body of a document: paragraphs (including list items), tables, and page
//! breaks. Constructors validate reference resolution and table shape; the
//! returned nodes are plain immutable values.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::numbering::NumberingRegistry;
use crate::run::TextRun;
use crate::style::{Alignment, StyleRegistry};

/// A node in the document content tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentNode {
    /// A paragraph of formatted runs
    Paragraph(Paragraph),
    /// A rectangular table
    Table(Table),
    /// A page break
    PageBreak,
}

/// Reference to a registered numbering scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRef {
    /// Reference name of the scheme
    pub reference: String,
    /// Zero-based level within the scheme
    pub level: u8,
}

/// A paragraph of formatted runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordered runs comprising the paragraph content
    pub runs: Vec<TextRun>,
    /// Style id resolved against the style registry
    pub style: Option<String>,
    /// Alignment override
    pub alignment: Option<Alignment>,
    /// Spacing before the paragraph in twips
    pub spacing_before: Option<u32>,
    /// Spacing after the paragraph in twips
    pub spacing_after: Option<u32>,
    /// Numbering binding for list items
    pub numbering: Option<ListRef>,
}

impl Paragraph {
    /// Unstyled paragraph from runs
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    /// Paragraph bound to a registered style
    ///
    /// # Errors
    /// * `UnknownStyle` - the style id does not resolve
    pub fn styled(
        styles: &StyleRegistry,
        style: impl Into<String>,
        runs: Vec<TextRun>,
    ) -> Result<Self, ModelError> {
        let style = style.into();
        styles.resolve_style(&style)?;
        Ok(Self {
            runs,
            style: Some(style),
            ..Default::default()
        })
    }

    /// List item bound to a registered numbering scheme
    ///
    /// # Errors
    /// * `UnknownNumbering` - the reference does not resolve
    /// * `LevelOutOfRange` - the scheme defines fewer levels
    pub fn list_item(
        numbering: &NumberingRegistry,
        reference: impl Into<String>,
        level: u8,
        runs: Vec<TextRun>,
    ) -> Result<Self, ModelError> {
        let reference = reference.into();
        let levels = numbering.resolve_numbering(&reference)?;
        if usize::from(level) >= levels.len() {
            return Err(ModelError::LevelOutOfRange {
                reference,
                levels: levels.len(),
                level,
            });
        }
        Ok(Self {
            runs,
            numbering: Some(ListRef { reference, level }),
            ..Default::default()
        })
    }

    /// Override the paragraph alignment
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Override the spacing before the paragraph
    pub fn spacing_before(mut self, twips: u32) -> Self {
        self.spacing_before = Some(twips);
        self
    }

    /// Override the spacing after the paragraph
    pub fn spacing_after(mut self, twips: u32) -> Self {
        self.spacing_after = Some(twips);
        self
    }

    /// Concatenated literal text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }
}

/// Border preset applied to every edge of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBorders {
    /// Line width in eighths of a point
    pub size: u32,
    /// Border color
    pub color: String,
}

impl Default for TableBorders {
    fn default() -> Self {
        Self {
            size: 4,
            color: "999999".to_string(),
        }
    }
}

/// A table cell holding nested content nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell content, typically paragraphs
    pub content: Vec<ContentNode>,
    /// Background fill for the cell
    pub shading_fill: Option<String>,
}

impl Cell {
    /// Cell from nested content nodes
    pub fn new(content: Vec<ContentNode>) -> Self {
        Self {
            content,
            shading_fill: None,
        }
    }

    /// Cell holding a single plain paragraph
    ///
    /// # Errors
    /// * `EmptyRun` - the text is empty
    pub fn text(text: impl Into<String>) -> Result<Self, ModelError> {
        let run = TextRun::new(text)?;
        Ok(Self::new(vec![ContentNode::Paragraph(Paragraph::new(
            vec![run],
        ))]))
    }

    /// Cell holding a single paragraph of runs
    pub fn runs(runs: Vec<TextRun>) -> Self {
        Self::new(vec![ContentNode::Paragraph(Paragraph::new(runs))])
    }

    /// Set a background fill behind the cell
    pub fn shaded(mut self, fill: impl Into<String>) -> Self {
        self.shading_fill = Some(fill.into());
        self
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<Cell>,
    /// Whether the row repeats as a header across pages
    pub header: bool,
}

impl TableRow {
    /// Row from cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            header: false,
        }
    }

    /// Mark the row as a repeating header row
    pub fn header(mut self) -> Self {
        self.header = true;
        self
    }
}

/// A rectangular table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
    /// Declared column widths in twips
    pub column_widths: Vec<u32>,
    /// Border preset for every cell edge
    pub borders: TableBorders,
}

impl Table {
    /// Build a table from rows and declared column widths
    ///
    /// # Errors
    /// * `NoColumns` - no column widths were declared
    /// * `RowWidthMismatch` - some row's cell count differs from the
    ///   declared column count
    pub fn new(rows: Vec<TableRow>, column_widths: Vec<u32>) -> Result<Self, ModelError> {
        if column_widths.is_empty() {
            return Err(ModelError::NoColumns);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.cells.len() != column_widths.len() {
                return Err(ModelError::RowWidthMismatch {
                    row,
                    cells: r.cells.len(),
                    columns: column_widths.len(),
                });
            }
        }
        Ok(Self {
            rows,
            column_widths,
            borders: TableBorders::default(),
        })
    }

    /// Override the border preset
    pub fn with_borders(mut self, borders: TableBorders) -> Self {
        self.borders = borders;
        self
    }

    /// Number of declared columns
    pub fn columns(&self) -> usize {
        self.column_widths.len()
    }
}
