//! Read-back inspection of rendered documents
//!
//! Parses `word/document.xml` into a flat outline of body elements —
//! paragraph style/text/numbering, table dimensions, page-break markers —
//! so produced artifacts can be reopened and verified structurally.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::DocxArchive;
use crate::error::Result;

/// A body element recovered from a rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineElement {
    /// A body paragraph
    Paragraph {
        /// Referenced style id, if any
        style: Option<String>,
        /// Concatenated text content
        text: String,
        /// (numbering id, level) when the paragraph is a list item
        numbering: Option<(u32, u32)>,
        /// Whether the paragraph contains a page break
        page_break: bool,
    },
    /// A body table
    Table {
        /// Number of rows
        rows: usize,
        /// Number of grid columns
        columns: usize,
    },
}

/// Flat outline of a document body
#[derive(Debug, Clone, Default)]
pub struct DocumentOutline {
    /// Body elements in document order
    pub elements: Vec<OutlineElement>,
}

/// Paragraph state while parsing
#[derive(Default)]
struct ParagraphState {
    style: Option<String>,
    text: String,
    num_id: Option<u32>,
    level: Option<u32>,
    page_break: bool,
}

impl DocumentOutline {
    /// Parse the outline from document.xml bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut elements = Vec::new();
        let mut buf = Vec::new();

        // Table nesting depth; paragraphs inside cells are not body elements
        let mut table_depth = 0usize;
        let mut table_rows = 0usize;
        let mut table_columns = 0usize;
        let mut paragraph: Option<ParagraphState> = None;
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                // Self-closing empty paragraph at body level
                Ok(Event::Empty(ref e))
                    if e.local_name().as_ref() == b"p" && table_depth == 0 =>
                {
                    elements.push(OutlineElement::Paragraph {
                        style: None,
                        text: String::new(),
                        numbering: None,
                        page_break: false,
                    });
                }
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    match e.local_name().as_ref() {
                        b"tbl" => {
                            table_depth += 1;
                            if table_depth == 1 {
                                table_rows = 0;
                                table_columns = 0;
                            }
                        }
                        b"tr" if table_depth == 1 => table_rows += 1,
                        b"gridCol" if table_depth == 1 => table_columns += 1,
                        b"p" if table_depth == 0 => {
                            paragraph = Some(ParagraphState::default());
                        }
                        b"pStyle" => {
                            if let Some(p) = paragraph.as_mut() {
                                p.style = attr(e, b"w:val");
                            }
                        }
                        b"numId" => {
                            if let Some(p) = paragraph.as_mut() {
                                p.num_id = attr(e, b"w:val").and_then(|v| v.parse().ok());
                            }
                        }
                        b"ilvl" => {
                            if let Some(p) = paragraph.as_mut() {
                                p.level = attr(e, b"w:val").and_then(|v| v.parse().ok());
                            }
                        }
                        b"br" => {
                            if let Some(p) = paragraph.as_mut() {
                                if attr(e, b"w:type").as_deref() == Some("page") {
                                    p.page_break = true;
                                }
                            }
                        }
                        b"t" => in_text = true,
                        _ => {}
                    }
                }
                Ok(Event::Text(ref t)) => {
                    if in_text {
                        if let Some(p) = paragraph.as_mut() {
                            if let Ok(s) = t.unescape() {
                                p.text.push_str(&s);
                            }
                        }
                    }
                }
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"tbl" => {
                        table_depth = table_depth.saturating_sub(1);
                        if table_depth == 0 {
                            elements.push(OutlineElement::Table {
                                rows: table_rows,
                                columns: table_columns,
                            });
                        }
                    }
                    b"p" if table_depth == 0 => {
                        if let Some(p) = paragraph.take() {
                            let numbering = match (p.num_id, p.level) {
                                (Some(id), Some(level)) => Some((id, level)),
                                (Some(id), None) => Some((id, 0)),
                                _ => None,
                            };
                            elements.push(OutlineElement::Paragraph {
                                style: p.style,
                                text: p.text,
                                numbering,
                                page_break: p.page_break,
                            });
                        }
                    }
                    b"t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { elements })
    }

    /// Parse the outline of an archive's main document part
    pub fn from_archive(archive: &DocxArchive) -> Result<Self> {
        Self::parse(archive.document_xml()?)
    }

    /// Number of body elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the body is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Read an attribute value from an element
fn attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.to_string()))
}
