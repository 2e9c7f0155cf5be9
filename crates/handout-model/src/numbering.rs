//! Numbering schemes and the numbering registry
//!
//! A scheme is an ordered list of level definitions (bullet glyph or numeric
//! pattern plus indentation) registered under a reference name. List items
//! point at a reference and a level; both must exist before any rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::style::Alignment;

/// Number format for a list level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Bullet glyph
    Bullet,
    /// Arabic numerals
    Decimal,
    /// Lowercase letters
    LowerLetter,
    /// Uppercase letters
    UpperLetter,
    /// Lowercase roman numerals
    LowerRoman,
    /// Uppercase roman numerals
    UpperRoman,
}

/// A single level of a numbering scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingLevel {
    /// Number format at this level
    pub format: NumberFormat,
    /// Level text: the glyph for bullets, or a pattern such as `%1.`
    pub text: String,
    /// Number alignment
    pub alignment: Alignment,
    /// Left indentation in twips
    pub indent_left: u32,
    /// Hanging indentation in twips
    pub indent_hanging: u32,
}

impl NumberingLevel {
    /// Bullet level with the standard list indentation
    pub fn bullet(glyph: impl Into<String>) -> Self {
        Self {
            format: NumberFormat::Bullet,
            text: glyph.into(),
            alignment: Alignment::Left,
            indent_left: 720,
            indent_hanging: 360,
        }
    }

    /// Decimal level with the standard list indentation
    ///
    /// The pattern uses `%1`-style placeholders, e.g. `"%1."` or `"Step %1:"`.
    pub fn decimal(pattern: impl Into<String>) -> Self {
        Self {
            format: NumberFormat::Decimal,
            text: pattern.into(),
            alignment: Alignment::Left,
            indent_left: 720,
            indent_hanging: 360,
        }
    }

    /// Override the indentation of this level
    pub fn indented(mut self, left: u32, hanging: u32) -> Self {
        self.indent_left = left;
        self.indent_hanging = hanging;
        self
    }
}

/// Registry of named numbering schemes
///
/// Registration order determines the numbering ids assigned in the rendered
/// archive, keeping output stable across runs.
#[derive(Debug, Clone, Default)]
pub struct NumberingRegistry {
    /// Registration order of reference names
    order: Vec<String>,
    /// Level definitions keyed by reference name
    schemes: HashMap<String, Vec<NumberingLevel>>,
}

impl NumberingRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a numbering scheme under a reference name
    ///
    /// # Errors
    /// * `DuplicateNumbering` - the reference is already registered
    /// * `EmptyNumbering` - no levels were supplied
    pub fn define_numbering(
        &mut self,
        reference: impl Into<String>,
        levels: Vec<NumberingLevel>,
    ) -> Result<(), ModelError> {
        let reference = reference.into();
        if self.schemes.contains_key(&reference) {
            return Err(ModelError::DuplicateNumbering { reference });
        }
        if levels.is_empty() {
            return Err(ModelError::EmptyNumbering { reference });
        }
        self.order.push(reference.clone());
        self.schemes.insert(reference, levels);
        Ok(())
    }

    /// Resolve a reference name to its level definitions
    ///
    /// # Errors
    /// * `UnknownNumbering` - no scheme is registered under the reference
    pub fn resolve_numbering(&self, reference: &str) -> Result<&[NumberingLevel], ModelError> {
        self.schemes
            .get(reference)
            .map(|levels| levels.as_slice())
            .ok_or_else(|| ModelError::UnknownNumbering {
                reference: reference.to_string(),
            })
    }

    /// Check whether a reference name is registered
    pub fn contains(&self, reference: &str) -> bool {
        self.schemes.contains_key(reference)
    }

    /// Zero-based registration index of a reference, if registered
    ///
    /// The renderer derives stable numbering ids from this index.
    pub fn index_of(&self, reference: &str) -> Option<usize> {
        self.order.iter().position(|r| r == reference)
    }

    /// Iterate over schemes in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NumberingLevel])> {
        self.order
            .iter()
            .map(|r| (r.as_str(), self.schemes[r].as_slice()))
    }

    /// Number of registered schemes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no schemes are registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_resolve() {
        let mut registry = NumberingRegistry::new();
        registry
            .define_numbering("bullet-list", vec![NumberingLevel::bullet("\u{2022}")])
            .unwrap();

        let levels = registry.resolve_numbering("bullet-list").unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].format, NumberFormat::Bullet);
        assert_eq!(levels[0].indent_left, 720);
    }

    #[test]
    fn test_duplicate_reference_rejected() {
        let mut registry = NumberingRegistry::new();
        registry
            .define_numbering("steps", vec![NumberingLevel::decimal("%1.")])
            .unwrap();

        let err = registry
            .define_numbering("steps", vec![NumberingLevel::decimal("Step %1:")])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateNumbering {
                reference: "steps".to_string()
            }
        );
        assert_eq!(
            registry.resolve_numbering("steps").unwrap()[0].text,
            "%1."
        );
    }

    #[test]
    fn test_empty_scheme_rejected() {
        let mut registry = NumberingRegistry::new();
        let err = registry.define_numbering("empty", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyNumbering {
                reference: "empty".to_string()
            }
        );
        assert!(!registry.contains("empty"));
    }

    #[test]
    fn test_unknown_reference() {
        let registry = NumberingRegistry::new();
        let err = registry.resolve_numbering("not-registered").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownNumbering {
                reference: "not-registered".to_string()
            }
        );
    }

    #[test]
    fn test_index_follows_registration_order() {
        let mut registry = NumberingRegistry::new();
        registry
            .define_numbering("bullets", vec![NumberingLevel::bullet("\u{2022}")])
            .unwrap();
        registry
            .define_numbering("steps", vec![NumberingLevel::decimal("%1.")])
            .unwrap();

        assert_eq!(registry.index_of("bullets"), Some(0));
        assert_eq!(registry.index_of("steps"), Some(1));
        assert_eq!(registry.index_of("missing"), None);
    }

    #[test]
    fn test_multi_level_scheme() {
        let mut registry = NumberingRegistry::new();
        registry
            .define_numbering(
                "main-bullets",
                vec![
                    NumberingLevel::bullet("\u{2022}"),
                    NumberingLevel::bullet("\u{25cb}").indented(1440, 360),
                ],
            )
            .unwrap();

        let levels = registry.resolve_numbering("main-bullets").unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].indent_left, 1440);
    }
}
