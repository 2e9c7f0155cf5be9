//! Style part generation (word/styles.xml)
//!
//! Emits document run defaults plus one `w:style` element per registered
//! style, in registration order. The `Normal` base style is always present
//! so `w:basedOn`/`w:next` references have a stable anchor.

use handout_model::{StyleAttributes, StyleRegistry};

use crate::xml::{escape_xml, jc_val};

/// Generate the complete styles part from a registry
pub fn styles_xml(registry: &StyleRegistry) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
"#,
    );

    // Document defaults from the registry's run defaults
    xml.push_str("<w:docDefaults>\n<w:rPrDefault>\n<w:rPr>\n");
    xml.push_str(&format!(
        "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/>\n",
        escape_xml(&registry.defaults.font)
    ));
    xml.push_str(&format!(
        "<w:sz w:val=\"{0}\"/>\n<w:szCs w:val=\"{0}\"/>\n",
        registry.defaults.size
    ));
    xml.push_str("</w:rPr>\n</w:rPrDefault>\n</w:docDefaults>\n");

    // Normal base style
    xml.push_str(
        "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">\n<w:name w:val=\"Normal\"/>\n</w:style>\n",
    );

    for (id, attrs) in registry.iter() {
        push_style(&mut xml, id, attrs);
    }

    xml.push_str("</w:styles>");
    xml
}

/// Emit a single `w:style` element
fn push_style(xml: &mut String, id: &str, attrs: &StyleAttributes) {
    xml.push_str(&format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{}\">\n",
        escape_xml(id)
    ));
    xml.push_str(&format!("<w:name w:val=\"{}\"/>\n", escape_xml(id)));

    let based_on = attrs.based_on.as_deref().unwrap_or("Normal");
    xml.push_str(&format!(
        "<w:basedOn w:val=\"{}\"/>\n",
        escape_xml(based_on)
    ));
    if let Some(next) = &attrs.next {
        xml.push_str(&format!("<w:next w:val=\"{}\"/>\n", escape_xml(next)));
    }

    // Paragraph properties
    let has_ppr = attrs.spacing_before.is_some()
        || attrs.spacing_after.is_some()
        || attrs.alignment.is_some()
        || attrs.indent_left.is_some()
        || attrs.indent_hanging.is_some()
        || attrs.shading_fill.is_some()
        || attrs.outline_level.is_some();
    if has_ppr {
        xml.push_str("<w:pPr>\n");
        if attrs.spacing_before.is_some() || attrs.spacing_after.is_some() {
            xml.push_str("<w:spacing");
            if let Some(before) = attrs.spacing_before {
                xml.push_str(&format!(" w:before=\"{}\"", before));
            }
            if let Some(after) = attrs.spacing_after {
                xml.push_str(&format!(" w:after=\"{}\"", after));
            }
            xml.push_str("/>\n");
        }
        if attrs.indent_left.is_some() || attrs.indent_hanging.is_some() {
            xml.push_str("<w:ind");
            if let Some(left) = attrs.indent_left {
                xml.push_str(&format!(" w:left=\"{}\"", left));
            }
            if let Some(hanging) = attrs.indent_hanging {
                xml.push_str(&format!(" w:hanging=\"{}\"", hanging));
            }
            xml.push_str("/>\n");
        }
        if let Some(alignment) = attrs.alignment {
            xml.push_str(&format!("<w:jc w:val=\"{}\"/>\n", jc_val(alignment)));
        }
        if let Some(fill) = &attrs.shading_fill {
            xml.push_str(&format!(
                "<w:shd w:val=\"clear\" w:fill=\"{}\"/>\n",
                escape_xml(fill)
            ));
        }
        if let Some(level) = attrs.outline_level {
            xml.push_str(&format!("<w:outlineLvl w:val=\"{}\"/>\n", level));
        }
        xml.push_str("</w:pPr>\n");
    }

    // Run properties
    let has_rpr = attrs.font.is_some()
        || attrs.size.is_some()
        || attrs.color.is_some()
        || attrs.bold
        || attrs.italic;
    if has_rpr {
        xml.push_str("<w:rPr>\n");
        if let Some(font) = &attrs.font {
            xml.push_str(&format!(
                "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/>\n",
                escape_xml(font)
            ));
        }
        if attrs.bold {
            xml.push_str("<w:b/>\n");
        }
        if attrs.italic {
            xml.push_str("<w:i/>\n");
        }
        if let Some(color) = &attrs.color {
            xml.push_str(&format!("<w:color w:val=\"{}\"/>\n", escape_xml(color)));
        }
        if let Some(size) = attrs.size {
            xml.push_str(&format!(
                "<w:sz w:val=\"{0}\"/>\n<w:szCs w:val=\"{0}\"/>\n",
                size
            ));
        }
        xml.push_str("</w:rPr>\n");
    }

    xml.push_str("</w:style>\n");
}
