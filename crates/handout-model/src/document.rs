//! Document root, page sections, and headers/footers
//!
//! The document tree is the immutable root value handed to the renderer:
//! metadata plus an ordered list of page sections, each carrying its page
//! geometry, optional header/footer content, and content nodes in reading
//! order.

use crate::block::{ContentNode, Paragraph};

/// Page margins in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargins {
    /// Top margin
    pub top: u32,
    /// Right margin
    pub right: u32,
    /// Bottom margin
    pub bottom: u32,
    /// Left margin
    pub left: u32,
}

impl PageMargins {
    /// Uniform margins on all four sides
    pub fn uniform(twips: u32) -> Self {
        Self {
            top: twips,
            right: twips,
            bottom: twips,
            left: twips,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        // One inch on all sides
        Self::uniform(1440)
    }
}

/// Header or footer content for a page section
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderFooter {
    /// Paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
}

impl HeaderFooter {
    /// Header/footer from paragraphs
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

/// A page section: geometry, optional header/footer, and content
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    /// Page margins
    pub margins: PageMargins,
    /// Header shown on every page of the section
    pub header: Option<HeaderFooter>,
    /// Footer shown on every page of the section
    pub footer: Option<HeaderFooter>,
    /// Content nodes in reading order
    pub children: Vec<ContentNode>,
}

impl Section {
    /// Section from content nodes with default geometry
    pub fn new(children: Vec<ContentNode>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    /// Override the page margins
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Attach a header
    pub fn with_header(mut self, header: HeaderFooter) -> Self {
        self.header = Some(header);
        self
    }

    /// Attach a footer
    pub fn with_footer(mut self, footer: HeaderFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Append a content node
    pub fn push(&mut self, node: ContentNode) {
        self.children.push(node);
    }
}

/// Document metadata persisted in the archive's core properties
///
/// Carries no dates: rendered output is a pure function of the tree and
/// registries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentMeta {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator
    pub creator: Option<String>,
}

/// The document root: metadata plus page sections in reading order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentTree {
    /// Document metadata
    pub meta: DocumentMeta,
    /// Page sections in reading order
    pub sections: Vec<Section>,
}

impl DocumentTree {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            meta: DocumentMeta {
                title: Some(title.into()),
                ..Default::default()
            },
            sections: Vec::new(),
        }
    }

    /// Append a section
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over all content nodes across sections, in reading order
    pub fn nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.sections.iter().flat_map(|s| s.children.iter())
    }
}
