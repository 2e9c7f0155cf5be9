//! Text runs with inline formatting overrides
//!
//! A text run is a span of content with consistent formatting. Literal text
//! must be non-empty; page-number and page-count fields exist for headers
//! and footers and render as Word field codes.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Content carried by a text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunContent {
    /// Literal text
    Text(String),
    /// The current page number field
    PageNumber,
    /// The total page count field
    PageCount,
}

/// A span of content with inline formatting overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The run content
    pub content: RunContent,
    /// Bold override
    pub bold: bool,
    /// Italic override
    pub italic: bool,
    /// Font size override in half-points
    pub size: Option<u32>,
    /// Font family override
    pub font: Option<String>,
    /// Text color override
    pub color: Option<String>,
    /// Run background fill (inline code backgrounds)
    pub shading_fill: Option<String>,
    /// External hyperlink target
    pub link_url: Option<String>,
}

impl TextRun {
    /// Create a plain text run
    ///
    /// # Errors
    /// * `EmptyRun` - the text is empty
    pub fn new(text: impl Into<String>) -> Result<Self, ModelError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ModelError::EmptyRun);
        }
        Ok(Self::from_content(RunContent::Text(text)))
    }

    /// Create a current-page-number field run
    pub fn page_number() -> Self {
        Self::from_content(RunContent::PageNumber)
    }

    /// Create a total-page-count field run
    pub fn page_count() -> Self {
        Self::from_content(RunContent::PageCount)
    }

    fn from_content(content: RunContent) -> Self {
        Self {
            content,
            bold: false,
            italic: false,
            size: None,
            font: None,
            color: None,
            shading_fill: None,
            link_url: None,
        }
    }

    /// Make the run bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the run italic
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Override the font size in half-points
    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    /// Override the font family
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Override the text color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set a background fill behind the run
    pub fn shaded(mut self, fill: impl Into<String>) -> Self {
        self.shading_fill = Some(fill.into());
        self
    }

    /// Turn the run into an external hyperlink
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    /// The literal text of this run, empty for field runs
    pub fn text(&self) -> &str {
        match &self.content {
            RunContent::Text(text) => text,
            _ => "",
        }
    }

    /// Check if any formatting override is applied
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.size.is_some()
            || self.font.is_some()
            || self.color.is_some()
            || self.shading_fill.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run() {
        let run = TextRun::new("Hello").unwrap();
        assert_eq!(run.text(), "Hello");
        assert!(!run.has_formatting());
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(TextRun::new("").unwrap_err(), ModelError::EmptyRun);
    }

    #[test]
    fn test_formatting_overrides() {
        let run = TextRun::new("ping -c 4 10.0.0.2")
            .unwrap()
            .size(22)
            .font("Consolas")
            .shaded("F0F0F0");
        assert!(run.has_formatting());
        assert_eq!(run.font.as_deref(), Some("Consolas"));
    }

    #[test]
    fn test_field_runs_carry_no_text() {
        assert_eq!(TextRun::page_number().text(), "");
        assert_eq!(TextRun::page_count().content, RunContent::PageCount);
    }

    #[test]
    fn test_link_run() {
        let run = TextRun::new("RFC 793")
            .unwrap()
            .link("https://www.rfc-editor.org/rfc/rfc793");
        assert!(run.link_url.is_some());
    }
}
