//! Style attributes and the style registry
//!
//! Styles are registered once under a string id and resolved by that id from
//! paragraphs. Registration order is preserved so rendered output is stable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

/// Formatting attributes resolved through a style id
///
/// All measurements follow OOXML conventions: font sizes in half-points,
/// spacing and indentation in twips, colors as `RRGGBB` hex strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleAttributes {
    /// Font family name
    pub font: Option<String>,
    /// Font size in half-points (24 = 12pt)
    pub size: Option<u32>,
    /// Text color
    pub color: Option<String>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Spacing before the paragraph in twips
    pub spacing_before: Option<u32>,
    /// Spacing after the paragraph in twips
    pub spacing_after: Option<u32>,
    /// Paragraph alignment
    pub alignment: Option<Alignment>,
    /// Left indentation in twips
    pub indent_left: Option<u32>,
    /// Hanging indentation in twips
    pub indent_hanging: Option<u32>,
    /// Paragraph background fill
    pub shading_fill: Option<String>,
    /// Outline level for headings (0 = top level)
    pub outline_level: Option<u8>,
    /// Base style id
    pub based_on: Option<String>,
    /// Style id applied to the following paragraph
    pub next: Option<String>,
}

/// Document-wide run defaults applied where no style overrides them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDefaults {
    /// Default font family
    pub font: String,
    /// Default font size in half-points
    pub size: u32,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            size: 24,
        }
    }
}

/// Registry of named paragraph styles
///
/// Read-only once rendering begins; the renderer only ever borrows it.
/// Re-registering an id is rejected rather than overwritten, so the first
/// definition of a style always wins.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    /// Registration order of style ids
    order: Vec<String>,
    /// Style definitions keyed by id
    styles: HashMap<String, StyleAttributes>,
    /// Run defaults emitted as the document default
    pub defaults: RunDefaults,
}

impl StyleRegistry {
    /// Create an empty registry with default run settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with explicit run defaults
    pub fn with_defaults(defaults: RunDefaults) -> Self {
        Self {
            order: Vec::new(),
            styles: HashMap::new(),
            defaults,
        }
    }

    /// Register a named style
    ///
    /// # Errors
    /// * `DuplicateStyle` - the id is already registered; the existing
    ///   definition is left untouched
    pub fn define_style(
        &mut self,
        id: impl Into<String>,
        attributes: StyleAttributes,
    ) -> Result<(), ModelError> {
        let id = id.into();
        if self.styles.contains_key(&id) {
            return Err(ModelError::DuplicateStyle { id });
        }
        self.order.push(id.clone());
        self.styles.insert(id, attributes);
        Ok(())
    }

    /// Resolve a style id to its attributes
    ///
    /// # Errors
    /// * `UnknownStyle` - no style is registered under the id
    pub fn resolve_style(&self, id: &str) -> Result<&StyleAttributes, ModelError> {
        self.styles.get(id).ok_or_else(|| ModelError::UnknownStyle {
            id: id.to_string(),
        })
    }

    /// Check whether a style id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    /// Iterate over styles in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleAttributes)> {
        self.order.iter().map(|id| (id.as_str(), &self.styles[id]))
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no styles are registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading() -> StyleAttributes {
        StyleAttributes {
            size: Some(36),
            bold: true,
            color: Some("1A365D".to_string()),
            outline_level: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn test_define_and_resolve() {
        let mut registry = StyleRegistry::new();
        registry.define_style("Heading1", heading()).unwrap();

        let attrs = registry.resolve_style("Heading1").unwrap();
        assert_eq!(attrs.size, Some(36));
        assert!(attrs.bold);
    }

    #[test]
    fn test_duplicate_definition_rejected() {
        let mut registry = StyleRegistry::new();
        registry.define_style("Heading1", heading()).unwrap();

        let second = StyleAttributes {
            size: Some(20),
            ..Default::default()
        };
        let err = registry.define_style("Heading1", second).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateStyle {
                id: "Heading1".to_string()
            }
        );

        // The first registration stays active
        assert_eq!(registry.resolve_style("Heading1").unwrap().size, Some(36));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_style() {
        let registry = StyleRegistry::new();
        let err = registry.resolve_style("Missing").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownStyle {
                id: "Missing".to_string()
            }
        );
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut registry = StyleRegistry::new();
        registry
            .define_style("Title", StyleAttributes::default())
            .unwrap();
        registry.define_style("Heading1", heading()).unwrap();
        registry
            .define_style("Note", StyleAttributes::default())
            .unwrap();

        let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["Title", "Heading1", "Note"]);
    }
}
