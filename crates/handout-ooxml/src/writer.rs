//! DOCX writer
//!
//! This module renders a `handout_model::DocumentTree` together with its
//! style and numbering registries into a complete DOCX archive. Every part
//! is generated from scratch; no template file is involved.
//!
//! Rendering is deterministic: relationship ids are assigned in traversal
//! order, numbering ids follow registration order, archive entries are
//! written sorted, and no part embeds a timestamp or random id.
//!
//! # Example
//!
//! ```no_run
//! use handout_model::{DocumentTree, NumberingRegistry, StyleRegistry};
//! use handout_ooxml::writer::DocxWriter;
//!
//! let styles = StyleRegistry::new();
//! let numbering = NumberingRegistry::new();
//! let tree = DocumentTree::with_title("Handout");
//! let bytes = DocxWriter::render(&tree, &styles, &numbering)?;
//! # Ok::<(), handout_ooxml::DocxError>(())
//! ```

use handout_model::{
    Cell, ContentNode, DocumentMeta, DocumentTree, HeaderFooter, NumberingRegistry, Paragraph,
    RunContent, Section, StyleRegistry, Table, TextRun,
};

use crate::archive::DocxArchive;
use crate::error::{DocxError, Result};
use crate::numbering::{num_id, numbering_xml};
use crate::relationships::Relationships;
use crate::styles::styles_xml;
use crate::xml::{escape_xml, jc_val};

/// Hyperlink run color (Word's standard link blue)
const HYPERLINK_COLOR: &str = "0563C1";

/// Distance of headers and footers from the page edge, in twips
const HEADER_FOOTER_MARGIN: u32 = 720;

/// DOCX writer for rendering a document tree into archive bytes
pub struct DocxWriter<'a> {
    /// Style registry, read-only during rendering
    styles: &'a StyleRegistry,
    /// Numbering registry, read-only during rendering
    numbering: &'a NumberingRegistry,
    /// XML output buffer for the part currently being generated
    output: String,
    /// Document relationships (word/_rels/document.xml.rels)
    relationships: Relationships,
    /// Generated header parts: (part name, xml)
    headers: Vec<(String, String)>,
    /// Generated footer parts: (part name, xml)
    footers: Vec<(String, String)>,
}

impl<'a> DocxWriter<'a> {
    /// Render a document tree into a complete DOCX archive
    ///
    /// The output is a pure function of the three inputs: rendering the same
    /// tree and registries twice yields byte-identical archives.
    ///
    /// # Errors
    /// * `UnresolvedStyle` / `UnresolvedNumbering` - a reference survived
    ///   construction without a registration; nothing is produced
    pub fn render(
        tree: &DocumentTree,
        styles: &'a StyleRegistry,
        numbering: &'a NumberingRegistry,
    ) -> Result<Vec<u8>> {
        let writer = DocxWriter {
            styles,
            numbering,
            output: String::new(),
            relationships: Relationships::new(),
            headers: Vec::new(),
            footers: Vec::new(),
        };
        writer.check_references(tree)?;
        writer.generate(tree)
    }

    // =========================================================================
    // Reference validation
    // =========================================================================

    /// Re-resolve every style and numbering reference in the tree
    ///
    /// Builder constructors already validate references; this pass catches
    /// hand-assembled nodes before any part is generated.
    fn check_references(&self, tree: &DocumentTree) -> Result<()> {
        for section in &tree.sections {
            for node in &section.children {
                self.check_node(node)?;
            }
            let header_footers = section.header.iter().chain(section.footer.iter());
            for part in header_footers {
                for para in &part.paragraphs {
                    self.check_paragraph(para)?;
                }
            }
        }
        Ok(())
    }

    fn check_node(&self, node: &ContentNode) -> Result<()> {
        match node {
            ContentNode::Paragraph(para) => self.check_paragraph(para),
            ContentNode::Table(table) => {
                for row in &table.rows {
                    for cell in &row.cells {
                        for node in &cell.content {
                            self.check_node(node)?;
                        }
                    }
                }
                Ok(())
            }
            ContentNode::PageBreak => Ok(()),
        }
    }

    fn check_paragraph(&self, para: &Paragraph) -> Result<()> {
        if let Some(style) = &para.style {
            if !self.styles.contains(style) {
                return Err(DocxError::UnresolvedStyle(style.clone()));
            }
        }
        if let Some(numbering) = &para.numbering {
            if !self.numbering.contains(&numbering.reference) {
                return Err(DocxError::UnresolvedNumbering(numbering.reference.clone()));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Archive assembly
    // =========================================================================

    /// Generate all parts and serialize the archive
    fn generate(mut self, tree: &DocumentTree) -> Result<Vec<u8>> {
        // Fixed relationships for the parts every document carries
        self.relationships
            .add("styles.xml", Relationships::TYPE_STYLES);
        let has_numbering = !self.numbering.is_empty();
        if has_numbering {
            self.relationships
                .add("numbering.xml", Relationships::TYPE_NUMBERING);
        }

        let document_xml = self.generate_document_xml(tree)?;

        let mut archive = DocxArchive::new();
        archive.set_string("word/document.xml", document_xml);
        archive.set_string("word/styles.xml", styles_xml(self.styles));
        if has_numbering {
            archive.set_string("word/numbering.xml", numbering_xml(self.numbering));
        }
        for (name, xml) in &self.headers {
            archive.set_string(format!("word/{}", name), xml.clone());
        }
        for (name, xml) in &self.footers {
            archive.set_string(format!("word/{}", name), xml.clone());
        }
        archive.set_string("word/_rels/document.xml.rels", self.relationships.to_xml());
        archive.set_string("_rels/.rels", package_rels_xml());
        archive.set_string(
            "[Content_Types].xml",
            self.content_types_xml(has_numbering),
        );
        archive.set_string("docProps/core.xml", core_properties_xml(&tree.meta));

        log::info!(
            "rendered document with {} section(s), {} header(s), {} footer(s)",
            tree.sections.len(),
            self.headers.len(),
            self.footers.len()
        );
        archive.to_bytes()
    }

    /// Generate the [Content_Types].xml part
    fn content_types_xml(&self, has_numbering: bool) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
"#,
        );
        if has_numbering {
            xml.push_str("<Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>\n");
        }
        for (name, _) in &self.headers {
            xml.push_str(&format!(
                "<Override PartName=\"/word/{}\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml\"/>\n",
                name
            ));
        }
        for (name, _) in &self.footers {
            xml.push_str(&format!(
                "<Override PartName=\"/word/{}\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml\"/>\n",
                name
            ));
        }
        xml.push_str("<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\n");
        xml.push_str("</Types>");
        xml
    }

    // =========================================================================
    // word/document.xml
    // =========================================================================

    /// Generate the complete document part
    fn generate_document_xml(&mut self, tree: &DocumentTree) -> Result<String> {
        self.output.clear();
        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(r#"<w:document "#);
        self.output
            .push_str(r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#);
        self.output.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        let last = tree.sections.len().saturating_sub(1);
        for (index, section) in tree.sections.iter().enumerate() {
            for node in &section.children {
                self.generate_node(node)?;
            }

            let sect_pr = self.section_properties(section)?;
            if index == last {
                // The final section's properties close the body directly
                self.output.push_str(&sect_pr);
            } else {
                // Intermediate section breaks live in an empty paragraph
                self.output.push_str("<w:p>\n<w:pPr>\n");
                self.output.push_str(&sect_pr);
                self.output.push_str("</w:pPr>\n</w:p>\n");
            }
        }

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        Ok(std::mem::take(&mut self.output))
    }

    /// Generate the `w:sectPr` element for a section, emitting header and
    /// footer parts as needed
    fn section_properties(&mut self, section: &Section) -> Result<String> {
        let mut xml = String::from("<w:sectPr>\n");

        if let Some(header) = &section.header {
            let name = format!("header{}.xml", self.headers.len() + 1);
            let part = self.header_footer_part("w:hdr", header)?;
            let rel_id = self
                .relationships
                .add(name.clone(), Relationships::TYPE_HEADER);
            self.headers.push((name, part));
            xml.push_str(&format!(
                "<w:headerReference w:type=\"default\" r:id=\"{}\"/>\n",
                rel_id
            ));
        }
        if let Some(footer) = &section.footer {
            let name = format!("footer{}.xml", self.footers.len() + 1);
            let part = self.header_footer_part("w:ftr", footer)?;
            let rel_id = self
                .relationships
                .add(name.clone(), Relationships::TYPE_FOOTER);
            self.footers.push((name, part));
            xml.push_str(&format!(
                "<w:footerReference w:type=\"default\" r:id=\"{}\"/>\n",
                rel_id
            ));
        }

        let margins = section.margins;
        xml.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\"/>\n",
            margins.top,
            margins.right,
            margins.bottom,
            margins.left,
            HEADER_FOOTER_MARGIN,
            HEADER_FOOTER_MARGIN
        ));
        xml.push_str("</w:sectPr>\n");
        Ok(xml)
    }

    /// Generate a header or footer part (`w:hdr` / `w:ftr` root)
    fn header_footer_part(&mut self, root: &str, content: &HeaderFooter) -> Result<String> {
        // Paragraph generation always targets self.output; swap in a fresh
        // buffer for the duration of this part
        let saved = std::mem::take(&mut self.output);
        for para in &content.paragraphs {
            self.generate_paragraph(para)?;
        }
        let body = std::mem::replace(&mut self.output, saved);

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<{} xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            root
        ));
        xml.push('\n');
        xml.push_str(&body);
        xml.push_str(&format!("</{}>", root));
        Ok(xml)
    }

    // =========================================================================
    // Content nodes
    // =========================================================================

    /// Generate XML for a single content node
    fn generate_node(&mut self, node: &ContentNode) -> Result<()> {
        match node {
            ContentNode::Paragraph(para) => self.generate_paragraph(para),
            ContentNode::Table(table) => self.generate_table(table),
            ContentNode::PageBreak => {
                self.output.push_str("<w:p>\n<w:r>\n");
                self.output.push_str("<w:br w:type=\"page\"/>\n");
                self.output.push_str("</w:r>\n</w:p>\n");
                Ok(())
            }
        }
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) -> Result<()> {
        self.output.push_str("<w:p>\n");

        let has_ppr = para.style.is_some()
            || para.numbering.is_some()
            || para.alignment.is_some()
            || para.spacing_before.is_some()
            || para.spacing_after.is_some();
        if has_ppr {
            self.output.push_str("<w:pPr>\n");
            if let Some(style) = &para.style {
                self.output
                    .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", escape_xml(style)));
            }
            if let Some(list) = &para.numbering {
                let num = num_id(self.numbering, &list.reference)
                    .ok_or_else(|| DocxError::UnresolvedNumbering(list.reference.clone()))?;
                self.output.push_str("<w:numPr>\n");
                self.output
                    .push_str(&format!("<w:ilvl w:val=\"{}\"/>\n", list.level));
                self.output
                    .push_str(&format!("<w:numId w:val=\"{}\"/>\n", num));
                self.output.push_str("</w:numPr>\n");
            }
            if para.spacing_before.is_some() || para.spacing_after.is_some() {
                self.output.push_str("<w:spacing");
                if let Some(before) = para.spacing_before {
                    self.output.push_str(&format!(" w:before=\"{}\"", before));
                }
                if let Some(after) = para.spacing_after {
                    self.output.push_str(&format!(" w:after=\"{}\"", after));
                }
                self.output.push_str("/>\n");
            }
            if let Some(alignment) = para.alignment {
                self.output
                    .push_str(&format!("<w:jc w:val=\"{}\"/>\n", jc_val(alignment)));
            }
            self.output.push_str("</w:pPr>\n");
        }

        for run in &para.runs {
            self.generate_run(run);
        }

        self.output.push_str("</w:p>\n");
        Ok(())
    }

    /// Generate XML for a text run, wrapping hyperlinks
    fn generate_run(&mut self, run: &TextRun) {
        if let Some(url) = &run.link_url {
            let rel_id = self
                .relationships
                .add_external(url.clone(), Relationships::TYPE_HYPERLINK);
            self.output
                .push_str(&format!("<w:hyperlink r:id=\"{}\">\n", rel_id));
            self.push_run_body(run, true);
            self.output.push_str("</w:hyperlink>\n");
        } else {
            self.push_run_body(run, false);
        }
    }

    fn push_run_body(&mut self, run: &TextRun, hyperlink: bool) {
        match &run.content {
            RunContent::Text(text) => {
                self.output.push_str("<w:r>\n");
                self.push_run_properties(run, hyperlink);
                self.output.push_str(&format!(
                    "<w:t xml:space=\"preserve\">{}</w:t>\n",
                    escape_xml(text)
                ));
                self.output.push_str("</w:r>\n");
            }
            RunContent::PageNumber => self.push_field_run(run, "PAGE"),
            RunContent::PageCount => self.push_field_run(run, "NUMPAGES"),
        }
    }

    /// Emit a simple field run; the placeholder text is fixed so output
    /// stays deterministic
    fn push_field_run(&mut self, run: &TextRun, instruction: &str) {
        self.output
            .push_str(&format!("<w:fldSimple w:instr=\" {} \">\n", instruction));
        self.output.push_str("<w:r>\n");
        self.push_run_properties(run, false);
        self.output.push_str("<w:t>1</w:t>\n");
        self.output.push_str("</w:r>\n");
        self.output.push_str("</w:fldSimple>\n");
    }

    fn push_run_properties(&mut self, run: &TextRun, hyperlink: bool) {
        if !run.has_formatting() && !hyperlink {
            return;
        }
        self.output.push_str("<w:rPr>\n");
        if let Some(font) = &run.font {
            self.output.push_str(&format!(
                "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/>\n",
                escape_xml(font)
            ));
        }
        if run.bold {
            self.output.push_str("<w:b/>\n");
        }
        if run.italic {
            self.output.push_str("<w:i/>\n");
        }
        if let Some(color) = &run.color {
            self.output
                .push_str(&format!("<w:color w:val=\"{}\"/>\n", escape_xml(color)));
        } else if hyperlink {
            self.output
                .push_str(&format!("<w:color w:val=\"{}\"/>\n", HYPERLINK_COLOR));
        }
        if hyperlink {
            self.output.push_str("<w:u w:val=\"single\"/>\n");
        }
        if let Some(size) = run.size {
            self.output.push_str(&format!(
                "<w:sz w:val=\"{0}\"/>\n<w:szCs w:val=\"{0}\"/>\n",
                size
            ));
        }
        if let Some(fill) = &run.shading_fill {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:fill=\"{}\"/>\n",
                escape_xml(fill)
            ));
        }
        self.output.push_str("</w:rPr>\n");
    }

    /// Generate XML for a table
    fn generate_table(&mut self, table: &Table) -> Result<()> {
        self.output.push_str("<w:tbl>\n");

        // Table properties: fixed layout with a uniform border preset
        self.output.push_str("<w:tblPr>\n");
        self.output.push_str("<w:tblLayout w:type=\"fixed\"/>\n");
        self.output.push_str("<w:tblBorders>\n");
        for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            self.output.push_str(&format!(
                "<w:{} w:val=\"single\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>\n",
                edge,
                table.borders.size,
                escape_xml(&table.borders.color)
            ));
        }
        self.output.push_str("</w:tblBorders>\n");
        self.output.push_str("</w:tblPr>\n");

        // Table grid (column definitions)
        self.output.push_str("<w:tblGrid>\n");
        for width in &table.column_widths {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", width));
        }
        self.output.push_str("</w:tblGrid>\n");

        for row in &table.rows {
            self.output.push_str("<w:tr>\n");
            if row.header {
                self.output.push_str("<w:trPr>\n<w:tblHeader/>\n</w:trPr>\n");
            }
            for (column, cell) in row.cells.iter().enumerate() {
                self.generate_cell(cell, table.column_widths[column])?;
            }
            self.output.push_str("</w:tr>\n");
        }

        self.output.push_str("</w:tbl>\n");
        Ok(())
    }

    /// Generate XML for a table cell
    fn generate_cell(&mut self, cell: &Cell, width: u32) -> Result<()> {
        self.output.push_str("<w:tc>\n");
        self.output.push_str("<w:tcPr>\n");
        self.output
            .push_str(&format!("<w:tcW w:w=\"{}\" w:type=\"dxa\"/>\n", width));
        if let Some(fill) = &cell.shading_fill {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:fill=\"{}\"/>\n",
                escape_xml(fill)
            ));
        }
        self.output.push_str("</w:tcPr>\n");

        for node in &cell.content {
            self.generate_node(node)?;
        }
        // Every cell needs at least one paragraph to be valid
        if cell.content.is_empty() {
            self.output.push_str("<w:p/>\n");
        }

        self.output.push_str("</w:tc>\n");
        Ok(())
    }
}

/// Generate the package relationships part (_rels/.rels)
fn package_rels_xml() -> String {
    let mut rels = Relationships::new();
    rels.add("word/document.xml", Relationships::TYPE_OFFICE_DOCUMENT);
    rels.add("docProps/core.xml", Relationships::TYPE_CORE_PROPERTIES);
    rels.to_xml()
}

/// Generate the core properties part
///
/// Carries no dates; the archive is a pure function of the tree.
fn core_properties_xml(meta: &DocumentMeta) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
    );
    if let Some(title) = &meta.title {
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    if let Some(subject) = &meta.subject {
        xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape_xml(subject)));
    }
    if let Some(creator) = &meta.creator {
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(creator)));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}
