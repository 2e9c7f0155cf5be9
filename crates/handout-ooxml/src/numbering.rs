//! Numbering part generation (word/numbering.xml)
//!
//! Each registered scheme becomes one `w:abstractNum` plus a `w:num`
//! mapping. Ids follow registration order: scheme `i` gets abstract id `i`
//! and concrete numbering id `i + 1` (numbering ids are 1-based in OOXML).

use handout_model::{NumberFormat, NumberingLevel, NumberingRegistry};

use crate::xml::{escape_xml, jc_val};

/// The `w:numFmt` value for a number format
fn num_fmt_val(format: NumberFormat) -> &'static str {
    match format {
        NumberFormat::Bullet => "bullet",
        NumberFormat::Decimal => "decimal",
        NumberFormat::LowerLetter => "lowerLetter",
        NumberFormat::UpperLetter => "upperLetter",
        NumberFormat::LowerRoman => "lowerRoman",
        NumberFormat::UpperRoman => "upperRoman",
    }
}

/// The concrete numbering id the renderer emits for a registered reference
pub fn num_id(registry: &NumberingRegistry, reference: &str) -> Option<usize> {
    registry.index_of(reference).map(|i| i + 1)
}

/// Generate the complete numbering part from a registry
pub fn numbering_xml(registry: &NumberingRegistry) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
"#,
    );

    for (index, (_, levels)) in registry.iter().enumerate() {
        xml.push_str(&format!(
            "<w:abstractNum w:abstractNumId=\"{}\">\n",
            index
        ));
        for (ilvl, level) in levels.iter().enumerate() {
            push_level(&mut xml, ilvl, level);
        }
        xml.push_str("</w:abstractNum>\n");
    }

    for (index, _) in registry.iter().enumerate() {
        xml.push_str(&format!(
            "<w:num w:numId=\"{}\">\n<w:abstractNumId w:val=\"{}\"/>\n</w:num>\n",
            index + 1,
            index
        ));
    }

    xml.push_str("</w:numbering>");
    xml
}

/// Emit a single `w:lvl` element
fn push_level(xml: &mut String, ilvl: usize, level: &NumberingLevel) {
    xml.push_str(&format!("<w:lvl w:ilvl=\"{}\">\n", ilvl));
    xml.push_str("<w:start w:val=\"1\"/>\n");
    xml.push_str(&format!(
        "<w:numFmt w:val=\"{}\"/>\n",
        num_fmt_val(level.format)
    ));
    xml.push_str(&format!(
        "<w:lvlText w:val=\"{}\"/>\n",
        escape_xml(&level.text)
    ));
    xml.push_str(&format!(
        "<w:lvlJc w:val=\"{}\"/>\n",
        jc_val(level.alignment)
    ));
    xml.push_str("<w:pPr>\n");
    xml.push_str(&format!(
        "<w:ind w:left=\"{}\" w:hanging=\"{}\"/>\n",
        level.indent_left, level.indent_hanging
    ));
    xml.push_str("</w:pPr>\n");
    xml.push_str("</w:lvl>\n");
}
