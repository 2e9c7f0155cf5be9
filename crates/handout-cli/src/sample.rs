//! Handout presets and document assembly
//!
//! Defines the style and numbering presets shared by the course handouts
//! and assembles a representative document: title block, course info table,
//! headings, lists, a command table with a shaded header row, an instructor
//! note, and a page break before the exercises.

use handout_model::{
    Alignment, Cell, ContentNode, DocumentTree, HeaderFooter, ModelError, NumberingLevel,
    NumberingRegistry, PageMargins, Paragraph, RunDefaults, Section, StyleAttributes,
    StyleRegistry, Table, TableRow, TextRun,
};

/// Dark blue used for the title and first-level headings
const HEADING_DARK: &str = "1A365D";
/// Mid blue for second-level headings and the subtitle
const HEADING_MID: &str = "2C5282";
/// Light blue for third-level headings
const HEADING_LIGHT: &str = "3182CE";
/// Fill behind table header rows
const TABLE_HEADER_FILL: &str = "E8F4FD";
/// Fill behind inline code runs
const CODE_FILL: &str = "F0F0F0";

/// Register the handout style and numbering presets
pub fn presets() -> Result<(StyleRegistry, NumberingRegistry), ModelError> {
    let mut styles = StyleRegistry::with_defaults(RunDefaults {
        font: "Arial".to_string(),
        size: 24,
    });

    styles.define_style(
        "Title",
        StyleAttributes {
            font: Some("Arial".to_string()),
            size: Some(56),
            bold: true,
            color: Some(HEADING_DARK.to_string()),
            spacing_before: Some(240),
            spacing_after: Some(240),
            alignment: Some(Alignment::Center),
            ..Default::default()
        },
    )?;
    styles.define_style(
        "Heading1",
        StyleAttributes {
            font: Some("Arial".to_string()),
            size: Some(36),
            bold: true,
            color: Some(HEADING_DARK.to_string()),
            spacing_before: Some(360),
            spacing_after: Some(200),
            outline_level: Some(0),
            next: Some("Normal".to_string()),
            ..Default::default()
        },
    )?;
    styles.define_style(
        "Heading2",
        StyleAttributes {
            font: Some("Arial".to_string()),
            size: Some(30),
            bold: true,
            color: Some(HEADING_MID.to_string()),
            spacing_before: Some(280),
            spacing_after: Some(160),
            outline_level: Some(1),
            next: Some("Normal".to_string()),
            ..Default::default()
        },
    )?;
    styles.define_style(
        "Heading3",
        StyleAttributes {
            font: Some("Arial".to_string()),
            size: Some(26),
            bold: true,
            color: Some(HEADING_LIGHT.to_string()),
            spacing_before: Some(200),
            spacing_after: Some(120),
            outline_level: Some(2),
            next: Some("Normal".to_string()),
            ..Default::default()
        },
    )?;
    styles.define_style(
        "InstructorNote",
        StyleAttributes {
            font: Some("Arial".to_string()),
            size: Some(22),
            italic: true,
            color: Some("666666".to_string()),
            spacing_before: Some(100),
            spacing_after: Some(100),
            indent_left: Some(720),
            shading_fill: Some("FFF8E1".to_string()),
            ..Default::default()
        },
    )?;

    let mut numbering = NumberingRegistry::new();
    numbering.define_numbering(
        "bullet-list",
        vec![
            NumberingLevel::bullet("\u{2022}"),
            NumberingLevel::bullet("\u{25cb}").indented(1440, 360),
        ],
    )?;
    numbering.define_numbering("numbered-list", vec![NumberingLevel::decimal("%1.")])?;
    numbering.define_numbering("exercise-list", vec![NumberingLevel::decimal("Ex %1:")])?;

    Ok((styles, numbering))
}

/// Plain body paragraph
fn p(text: &str) -> Result<Paragraph, ModelError> {
    Ok(Paragraph::new(vec![TextRun::new(text)?]).spacing_after(120))
}

/// Inline code run
fn code(text: &str) -> Result<TextRun, ModelError> {
    Ok(TextRun::new(text)?.size(22).font("Consolas").shaded(CODE_FILL))
}

/// Info-table cell with a bold label followed by a value
fn labeled(label: &str, value: &str) -> Result<Cell, ModelError> {
    Ok(Cell::runs(vec![
        TextRun::new(label)?.bold(),
        TextRun::new(value)?,
    ]))
}

/// Shaded header cell for command tables
fn header_cell(text: &str) -> Result<Cell, ModelError> {
    Ok(Cell::text(text)?.shaded(TABLE_HEADER_FILL))
}

/// Assemble the representative handout document
pub fn handout(
    styles: &StyleRegistry,
    numbering: &NumberingRegistry,
) -> Result<DocumentTree, ModelError> {
    let mut children: Vec<ContentNode> = Vec::new();

    // Title block
    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "Title",
        vec![TextRun::new("Week 4")?],
    )?));
    children.push(ContentNode::Paragraph(
        Paragraph::new(vec![TextRun::new(
            "Custom text and binary protocols over TCP and UDP",
        )?
        .size(36)
        .color(HEADING_MID)])
        .aligned(Alignment::Center)
        .spacing_after(480),
    ));

    // Course info table
    let info = Table::new(
        vec![
            TableRow::new(vec![
                labeled("Course: ", "Computer Networks")?,
                labeled("Program: ", "Economic Informatics")?,
            ]),
            TableRow::new(vec![
                labeled("Year: ", "3, Semester 2")?,
                labeled("Duration: ", "2h lecture + 2h seminar")?,
            ]),
        ],
        vec![4680, 4680],
    )?;
    children.push(ContentNode::Table(info));

    // Learning outcomes
    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "Heading1",
        vec![TextRun::new("1. Learning outcomes")?],
    )?));
    children.push(ContentNode::Paragraph(p(
        "After this week you will be able to design a small application \
         protocol, implement both endpoints, and inspect the traffic it \
         produces on the wire.",
    )?));
    for outcome in [
        "Frame messages explicitly instead of relying on TCP stream boundaries",
        "Choose between text and binary encodings and justify the trade-off",
        "Verify protocol behavior with packet captures",
    ] {
        children.push(ContentNode::Paragraph(
            Paragraph::list_item(numbering, "bullet-list", 0, vec![TextRun::new(outcome)?])?
                .spacing_after(60),
        ));
    }
    children.push(ContentNode::Paragraph(
        Paragraph::list_item(
            numbering,
            "bullet-list",
            1,
            vec![TextRun::new("Capture on the loopback interface first; it keeps the trace small")?],
        )?
        .spacing_after(60),
    ));

    // Quickstart steps
    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "Heading2",
        vec![TextRun::new("1.1 Quickstart")?],
    )?));
    children.push(ContentNode::Paragraph(Paragraph::new(vec![
        TextRun::new("Start the echo server with ")?,
        code("python3 server.py 9090")?,
        TextRun::new(" and connect from a second terminal:")?,
    ])
    .spacing_after(120)));
    for step in [
        "Start the topology and open terminals on h1 and h2",
        "Run the server on h2, then the client on h1",
        "Capture one full exchange and save it next to your report",
    ] {
        children.push(ContentNode::Paragraph(
            Paragraph::list_item(numbering, "numbered-list", 0, vec![TextRun::new(step)?])?
                .spacing_after(60),
        ));
    }

    // Command reference table
    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "Heading3",
        vec![TextRun::new("Useful commands")?],
    )?));
    let commands = Table::new(
        vec![
            TableRow::new(vec![header_cell("Command")?, header_cell("Purpose")?]).header(),
            TableRow::new(vec![
                Cell::runs(vec![code("nc -l 9090")?]),
                Cell::text("Minimal TCP listener for manual testing")?,
            ]),
            TableRow::new(vec![
                Cell::runs(vec![code("tcpdump -i lo port 9090 -w demo.pcap")?]),
                Cell::text("Capture the exchange for later inspection")?,
            ]),
        ],
        vec![3600, 5760],
    )?;
    children.push(ContentNode::Table(commands));

    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "InstructorNote",
        vec![TextRun::new(
            "Remind students that a single send() call does not map to a \
             single recv() call; most framing bugs come from this assumption.",
        )?],
    )?));

    // Exercises start on a fresh page
    children.push(ContentNode::PageBreak);
    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "Heading1",
        vec![TextRun::new("2. Exercises")?],
    )?));
    for exercise in [
        "Extend the text protocol with a LIST command and document its grammar",
        "Re-encode the same exchange with fixed-size binary headers and compare sizes",
        "Break framing on purpose and describe the failure you observe",
    ] {
        children.push(ContentNode::Paragraph(
            Paragraph::list_item(numbering, "exercise-list", 0, vec![TextRun::new(exercise)?])?
                .spacing_after(80),
        ));
    }

    // References
    children.push(ContentNode::Paragraph(Paragraph::styled(
        styles,
        "Heading2",
        vec![TextRun::new("2.1 References")?],
    )?));
    children.push(ContentNode::Paragraph(
        Paragraph::list_item(
            numbering,
            "bullet-list",
            0,
            vec![
                TextRun::new("Postel, J. (1981). Transmission Control Protocol. ")?,
                TextRun::new("RFC 793")?.link("https://www.rfc-editor.org/rfc/rfc793"),
            ],
        )?
        .spacing_after(60),
    ));
    children.push(ContentNode::Paragraph(
        Paragraph::list_item(
            numbering,
            "bullet-list",
            0,
            vec![
                TextRun::new("Python struct module documentation: ")?,
                TextRun::new("docs.python.org/3/library/struct.html")?
                    .link("https://docs.python.org/3/library/struct.html"),
            ],
        )?
        .spacing_after(60),
    ));

    let header = HeaderFooter::new(vec![Paragraph::new(vec![TextRun::new(
        "Computer Networks | Week 4",
    )?
    .size(20)
    .color("666666")])
    .aligned(Alignment::Right)]);

    let footer = HeaderFooter::new(vec![Paragraph::new(vec![
        TextRun::new("Page ")?.size(20),
        TextRun::page_number().size(20),
        TextRun::new(" of ")?.size(20),
        TextRun::page_count().size(20),
    ])
    .aligned(Alignment::Center)]);

    let mut tree = DocumentTree::with_title("Week 4 — Custom protocols over TCP and UDP");
    tree.meta.creator = Some("Computer Networks course".to_string());
    tree.push_section(
        Section::new(children)
            .with_margins(PageMargins::uniform(1440))
            .with_header(header)
            .with_footer(footer),
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_register_all_styles() {
        let (styles, numbering) = presets().unwrap();
        for id in ["Title", "Heading1", "Heading2", "Heading3", "InstructorNote"] {
            assert!(styles.contains(id), "missing style {}", id);
        }
        assert!(numbering.contains("bullet-list"));
        assert!(numbering.contains("numbered-list"));
        assert!(numbering.contains("exercise-list"));
    }

    #[test]
    fn test_handout_assembles() {
        let (styles, numbering) = presets().unwrap();
        let tree = handout(&styles, &numbering).unwrap();

        assert_eq!(tree.sections.len(), 1);
        let section = &tree.sections[0];
        assert!(section.header.is_some());
        assert!(section.footer.is_some());

        let has_page_break = tree
            .nodes()
            .any(|n| matches!(n, ContentNode::PageBreak));
        assert!(has_page_break);

        let tables = tree
            .nodes()
            .filter(|n| matches!(n, ContentNode::Table(_)))
            .count();
        assert_eq!(tables, 2);
    }
}
