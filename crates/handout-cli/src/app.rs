//! CLI application logic
//!
//! One command: assemble the handout document, render it, and write the
//! artifact. Any failure propagates to the top level and exits non-zero;
//! success prints a confirmation with the output path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use handout_ooxml::{persist, DocxWriter};

use crate::sample;

#[derive(Parser)]
#[command(name = "handout")]
#[command(author, version, about = "Generate the course handout as DOCX", long_about = None)]
struct Cli {
    /// Output DOCX path
    #[arg(short, long, default_value = "dist/handout.docx")]
    out: PathBuf,
}

/// Run the generator
///
/// This is the main entry point for the command-line interface.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let (styles, numbering) = sample::presets().context("define style and numbering presets")?;
    let tree = sample::handout(&styles, &numbering).context("assemble handout document")?;
    log::debug!(
        "assembled {} section(s), {} registered style(s)",
        tree.sections.len(),
        styles.len()
    );

    let bytes =
        DocxWriter::render(&tree, &styles, &numbering).context("render handout document")?;
    persist(&bytes, &cli.out).with_context(|| format!("write {}", cli.out.display()))?;

    println!("Wrote {} ({} bytes)", cli.out.display(), bytes.len());
    Ok(())
}
