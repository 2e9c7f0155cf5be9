//! Relationship parts (_rels/*.rels) for the generated archive
//!
//! OOXML maps relationship ids to targets through .rels parts; the writer
//! uses them for styles, numbering, headers/footers, and hyperlinks.
//! Insertion order is preserved so serialization is deterministic.

use std::collections::HashMap;

use crate::xml::escape_xml;

/// Common relationship type URIs
impl Relationships {
    /// Main document relationship type
    pub const TYPE_OFFICE_DOCUMENT: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    /// Core properties relationship type
    pub const TYPE_CORE_PROPERTIES: &'static str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    /// Styles relationship type
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Numbering relationship type
    pub const TYPE_NUMBERING: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    /// Header relationship type
    pub const TYPE_HEADER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    /// Footer relationship type
    pub const TYPE_FOOTER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    /// Hyperlink relationship type
    pub const TYPE_HYPERLINK: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
}

/// A relationship target with its type and mode
#[derive(Debug, Clone)]
pub struct RelationshipTarget {
    /// The target URL or part path
    pub target: String,
    /// The relationship type URI
    pub rel_type: String,
    /// Target mode: "External" for URLs, None for internal parts
    pub target_mode: Option<String>,
}

/// An ordered set of relationships for one .rels part
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Ordered list of relationship ids (maintains insertion order)
    order: Vec<String>,
    /// Map of relationship id to target (for fast lookups)
    map: HashMap<String, RelationshipTarget>,
    /// Counter for generating unique ids (starts at rId1)
    next_id_counter: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            map: HashMap::new(),
            next_id_counter: 1,
        }
    }
}

impl Relationships {
    /// Create an empty relationship set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an internal relationship, returning the assigned id
    pub fn add(&mut self, target: impl Into<String>, rel_type: impl Into<String>) -> String {
        self.insert(target.into(), rel_type.into(), None)
    }

    /// Add an external relationship (hyperlink targets), returning the id
    pub fn add_external(
        &mut self,
        target: impl Into<String>,
        rel_type: impl Into<String>,
    ) -> String {
        self.insert(target.into(), rel_type.into(), Some("External".to_string()))
    }

    fn insert(
        &mut self,
        target: String,
        rel_type: String,
        target_mode: Option<String>,
    ) -> String {
        let id = format!("rId{}", self.next_id_counter);
        self.next_id_counter += 1;
        self.order.push(id.clone());
        self.map.insert(
            id.clone(),
            RelationshipTarget {
                target,
                rel_type,
                target_mode,
            },
        );
        id
    }

    /// Look up a relationship by id
    pub fn get(&self, id: &str) -> Option<&RelationshipTarget> {
        self.map.get(id)
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Serialize to .rels XML, in insertion order
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for id in &self.order {
            let rel = &self.map[id];
            xml.push('\n');
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                escape_xml(id),
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            ));
            if let Some(mode) = &rel.target_mode {
                xml.push_str(&format!(r#" TargetMode="{}""#, escape_xml(mode)));
            }
            xml.push_str("/>");
        }

        xml.push_str("\n</Relationships>");
        xml
    }
}
