//! Rendering determinism tests
//!
//! `render` must be a pure function of the tree and registries: identical
//! inputs yield byte-identical archives.

use handout_model::{
    Alignment, Cell, ContentNode, DocumentTree, HeaderFooter, NumberingLevel, NumberingRegistry,
    Paragraph, Section, StyleAttributes, StyleRegistry, Table, TableRow, TextRun,
};
use handout_ooxml::DocxWriter;
use sha2::{Digest, Sha256};

fn digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

fn presets() -> (StyleRegistry, NumberingRegistry) {
    let mut styles = StyleRegistry::new();
    styles
        .define_style(
            "Heading1",
            StyleAttributes {
                size: Some(36),
                bold: true,
                outline_level: Some(0),
                ..Default::default()
            },
        )
        .unwrap();
    let mut numbering = NumberingRegistry::new();
    numbering
        .define_numbering("bullet-list", vec![NumberingLevel::bullet("\u{2022}")])
        .unwrap();
    (styles, numbering)
}

fn sample_tree(styles: &StyleRegistry, numbering: &NumberingRegistry) -> DocumentTree {
    let heading = Paragraph::styled(
        styles,
        "Heading1",
        vec![TextRun::new("1. Packet capture").unwrap()],
    )
    .unwrap();
    let item = Paragraph::list_item(
        numbering,
        "bullet-list",
        0,
        vec![TextRun::new("tcpdump -i h1-eth0").unwrap().font("Consolas")],
    )
    .unwrap();
    let table = Table::new(
        vec![
            TableRow::new(vec![
                Cell::text("Filter").unwrap().shaded("E8F4FD"),
                Cell::text("Meaning").unwrap().shaded("E8F4FD"),
            ])
            .header(),
            TableRow::new(vec![
                Cell::text("tcp port 80").unwrap(),
                Cell::text("HTTP traffic only").unwrap(),
            ]),
        ],
        vec![3000, 6000],
    )
    .unwrap();

    let footer = HeaderFooter::new(vec![Paragraph::new(vec![
        TextRun::new("Page ").unwrap(),
        TextRun::page_number(),
        TextRun::new(" of ").unwrap(),
        TextRun::page_count(),
    ])
    .aligned(Alignment::Center)]);

    let mut tree = DocumentTree::with_title("Week 7 Lab Sheet");
    tree.push_section(
        Section::new(vec![
            ContentNode::Paragraph(heading),
            ContentNode::Paragraph(item),
            ContentNode::Table(table),
            ContentNode::PageBreak,
        ])
        .with_footer(footer),
    );
    tree
}

#[test]
fn test_identical_inputs_yield_identical_bytes() {
    let (styles, numbering) = presets();
    let tree = sample_tree(&styles, &numbering);

    let first = DocxWriter::render(&tree, &styles, &numbering).unwrap();
    let second = DocxWriter::render(&tree, &styles, &numbering).unwrap();

    assert_eq!(digest(&first), digest(&second));
    assert_eq!(first, second);
}

#[test]
fn test_rebuilt_tree_yields_identical_bytes() {
    // Two independently constructed but equal trees must also agree
    let (styles, numbering) = presets();
    let first = DocxWriter::render(&sample_tree(&styles, &numbering), &styles, &numbering).unwrap();
    let second =
        DocxWriter::render(&sample_tree(&styles, &numbering), &styles, &numbering).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_content_change_changes_bytes() {
    let (styles, numbering) = presets();
    let base = sample_tree(&styles, &numbering);

    let mut changed = sample_tree(&styles, &numbering);
    changed.meta.title = Some("Week 8 Lab Sheet".to_string());

    let first = DocxWriter::render(&base, &styles, &numbering).unwrap();
    let second = DocxWriter::render(&changed, &styles, &numbering).unwrap();
    assert_ne!(digest(&first), digest(&second));
}
