//! Writer coverage tests
//!
//! Structural assertions on the parts `DocxWriter` generates, beyond the
//! inline unit tests.

use std::io::Cursor;

use handout_model::{
    Alignment, Cell, ContentNode, DocumentTree, HeaderFooter, NumberingLevel, NumberingRegistry,
    PageMargins, Paragraph, Section, StyleAttributes, StyleRegistry, Table, TableRow, TextRun,
};
use handout_ooxml::{DocxArchive, DocxWriter};

fn presets() -> (StyleRegistry, NumberingRegistry) {
    let mut styles = StyleRegistry::new();
    styles
        .define_style(
            "Heading1",
            StyleAttributes {
                font: Some("Arial".to_string()),
                size: Some(36),
                bold: true,
                color: Some("1A365D".to_string()),
                spacing_before: Some(360),
                spacing_after: Some(200),
                outline_level: Some(0),
                ..Default::default()
            },
        )
        .unwrap();
    styles
        .define_style(
            "InstructorNote",
            StyleAttributes {
                size: Some(22),
                italic: true,
                color: Some("666666".to_string()),
                indent_left: Some(720),
                shading_fill: Some("FFF8E1".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let mut numbering = NumberingRegistry::new();
    numbering
        .define_numbering("bullet-list", vec![NumberingLevel::bullet("\u{2022}")])
        .unwrap();
    numbering
        .define_numbering("numbered-list", vec![NumberingLevel::decimal("%1.")])
        .unwrap();

    (styles, numbering)
}

fn render(tree: &DocumentTree) -> DocxArchive {
    let (styles, numbering) = presets();
    let bytes = DocxWriter::render(tree, &styles, &numbering).unwrap();
    DocxArchive::from_reader(Cursor::new(bytes)).unwrap()
}

fn part(archive: &DocxArchive, path: &str) -> String {
    archive
        .get_string(path)
        .unwrap()
        .unwrap_or_else(|| panic!("missing part: {}", path))
}

fn single_section(nodes: Vec<ContentNode>) -> DocumentTree {
    let mut tree = DocumentTree::new();
    tree.push_section(Section::new(nodes));
    tree
}

#[test]
fn test_heading_paragraph_references_style() {
    let (styles, _) = presets();
    let para = Paragraph::styled(
        &styles,
        "Heading1",
        vec![TextRun::new("1. Transport protocols").unwrap()],
    )
    .unwrap();
    let archive = render(&single_section(vec![ContentNode::Paragraph(para)]));

    let document = part(&archive, "word/document.xml");
    assert!(document.contains("<w:pStyle w:val=\"Heading1\"/>"));
    assert!(document.contains("1. Transport protocols"));

    let styles_part = part(&archive, "word/styles.xml");
    assert!(styles_part.contains("w:styleId=\"Heading1\""));
    assert!(styles_part.contains("<w:outlineLvl w:val=\"0\"/>"));
}

#[test]
fn test_list_items_reference_registered_numbering() {
    let (_, numbering) = presets();
    let bullet = Paragraph::list_item(
        &numbering,
        "bullet-list",
        0,
        vec![TextRun::new("capture traffic with tcpdump").unwrap()],
    )
    .unwrap();
    let step = Paragraph::list_item(
        &numbering,
        "numbered-list",
        0,
        vec![TextRun::new("start the topology").unwrap()],
    )
    .unwrap();
    let archive = render(&single_section(vec![
        ContentNode::Paragraph(bullet),
        ContentNode::Paragraph(step),
    ]));

    let document = part(&archive, "word/document.xml");
    // bullet-list registered first -> numId 1, numbered-list -> numId 2
    assert!(document.contains("<w:numId w:val=\"1\"/>"));
    assert!(document.contains("<w:numId w:val=\"2\"/>"));

    let numbering_part = part(&archive, "word/numbering.xml");
    assert!(numbering_part.contains("<w:numFmt w:val=\"bullet\"/>"));
    assert!(numbering_part.contains("<w:lvlText w:val=\"%1.\"/>"));
}

#[test]
fn test_table_grid_borders_and_shading() {
    let rows = vec![
        TableRow::new(vec![
            Cell::text("Command").unwrap().shaded("E8F4FD"),
            Cell::text("Purpose").unwrap().shaded("E8F4FD"),
        ])
        .header(),
        TableRow::new(vec![
            Cell::text("ss -tlnp").unwrap(),
            Cell::text("list listening sockets").unwrap(),
        ]),
    ];
    let table = Table::new(rows, vec![4680, 4680]).unwrap();
    let archive = render(&single_section(vec![ContentNode::Table(table)]));

    let document = part(&archive, "word/document.xml");
    assert_eq!(document.matches("<w:gridCol w:w=\"4680\"/>").count(), 2);
    assert!(document.contains("<w:tblHeader/>"));
    assert!(document.contains("<w:shd w:val=\"clear\" w:fill=\"E8F4FD\"/>"));
    assert!(document.contains(
        "<w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"999999\"/>"
    ));
    assert!(document.contains("<w:tcW w:w=\"4680\" w:type=\"dxa\"/>"));
}

#[test]
fn test_empty_cell_gets_placeholder_paragraph() {
    let table = Table::new(
        vec![TableRow::new(vec![Cell::default(), Cell::text("x").unwrap()])],
        vec![2000, 2000],
    )
    .unwrap();
    let archive = render(&single_section(vec![ContentNode::Table(table)]));

    let document = part(&archive, "word/document.xml");
    assert!(document.contains("<w:p/>"));
}

#[test]
fn test_header_and_footer_parts() {
    let header = HeaderFooter::new(vec![Paragraph::new(vec![TextRun::new(
        "Computer Networks | Week 4",
    )
    .unwrap()
    .size(20)
    .color("666666")])
    .aligned(Alignment::Right)]);
    let footer = HeaderFooter::new(vec![Paragraph::new(vec![
        TextRun::new("Page ").unwrap().size(20),
        TextRun::page_number().size(20),
        TextRun::new(" of ").unwrap().size(20),
        TextRun::page_count().size(20),
    ])
    .aligned(Alignment::Center)]);

    let mut tree = DocumentTree::new();
    tree.push_section(
        Section::new(Vec::new())
            .with_margins(PageMargins::uniform(1440))
            .with_header(header)
            .with_footer(footer),
    );
    let archive = render(&tree);

    let document = part(&archive, "word/document.xml");
    assert!(document.contains("<w:headerReference w:type=\"default\""));
    assert!(document.contains("<w:footerReference w:type=\"default\""));
    assert!(document.contains(
        "<w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\""
    ));

    let header_part = part(&archive, "word/header1.xml");
    assert!(header_part.starts_with("<?xml"));
    assert!(header_part.contains("Computer Networks | Week 4"));
    assert!(header_part.contains("<w:jc w:val=\"right\"/>"));

    let footer_part = part(&archive, "word/footer1.xml");
    assert!(footer_part.contains("<w:fldSimple w:instr=\" PAGE \">"));
    assert!(footer_part.contains("<w:fldSimple w:instr=\" NUMPAGES \">"));

    let rels = part(&archive, "word/_rels/document.xml.rels");
    assert!(rels.contains("header1.xml"));
    assert!(rels.contains("footer1.xml"));

    let content_types = part(&archive, "[Content_Types].xml");
    assert!(content_types.contains("/word/header1.xml"));
    assert!(content_types.contains("/word/footer1.xml"));
}

#[test]
fn test_hyperlink_gets_external_relationship() {
    let para = Paragraph::new(vec![TextRun::new("RFC 793")
        .unwrap()
        .link("https://www.rfc-editor.org/rfc/rfc793")]);
    let archive = render(&single_section(vec![ContentNode::Paragraph(para)]));

    let document = part(&archive, "word/document.xml");
    assert!(document.contains("<w:hyperlink r:id=\""));
    assert!(document.contains("<w:u w:val=\"single\"/>"));

    let rels = part(&archive, "word/_rels/document.xml.rels");
    assert!(rels.contains("https://www.rfc-editor.org/rfc/rfc793"));
    assert!(rels.contains("TargetMode=\"External\""));
}

#[test]
fn test_inline_overrides_on_runs() {
    let para = Paragraph::new(vec![
        TextRun::new("Run ").unwrap(),
        TextRun::new("nc -l 9090").unwrap().font("Consolas").size(22).shaded("F0F0F0"),
        TextRun::new(" in a second terminal.").unwrap(),
    ]);
    let archive = render(&single_section(vec![ContentNode::Paragraph(para)]));

    let document = part(&archive, "word/document.xml");
    assert!(document.contains("<w:rFonts w:ascii=\"Consolas\" w:hAnsi=\"Consolas\"/>"));
    assert!(document.contains("<w:shd w:val=\"clear\" w:fill=\"F0F0F0\"/>"));
    assert!(document.contains("<w:sz w:val=\"22\"/>"));
}

#[test]
fn test_two_sections_emit_intermediate_break() {
    let mut tree = DocumentTree::new();
    tree.push_section(Section::new(vec![ContentNode::Paragraph(Paragraph::new(
        vec![TextRun::new("first section").unwrap()],
    ))]));
    tree.push_section(
        Section::new(vec![ContentNode::Paragraph(Paragraph::new(vec![
            TextRun::new("second section").unwrap(),
        ]))])
        .with_margins(PageMargins::uniform(1080)),
    );
    let archive = render(&tree);

    let document = part(&archive, "word/document.xml");
    // One sectPr wrapped in a paragraph (intermediate), one closing the body
    assert_eq!(document.matches("<w:sectPr>").count(), 2);
    assert!(document.contains("<w:pgMar w:top=\"1080\""));

    let first = document.find("first section").unwrap();
    let second = document.find("second section").unwrap();
    let break_pos = document.find("<w:sectPr>").unwrap();
    assert!(first < break_pos && break_pos < second);
}

#[test]
fn test_numbering_part_omitted_without_schemes() {
    let styles = StyleRegistry::new();
    let numbering = NumberingRegistry::new();
    let tree = single_section(vec![ContentNode::Paragraph(Paragraph::new(vec![
        TextRun::new("plain").unwrap(),
    ]))]);

    let bytes = DocxWriter::render(&tree, &styles, &numbering).unwrap();
    let archive = DocxArchive::from_reader(Cursor::new(bytes)).unwrap();

    assert!(archive.numbering_xml().is_none());
    let content_types = part(&archive, "[Content_Types].xml");
    assert!(!content_types.contains("numbering"));
}
