/*!
 * Markdown writer implementation for ProjSum
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::Config;
use crate::error::Result;
use crate::types::{FileContent, SummaryDocument};

/// Markdown writer for scan results
pub struct MarkdownWriter {
    /// Writer configuration
    config: Config,
}

impl MarkdownWriter {
    /// Create a new Markdown writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the summary document to the configured output file
    pub fn write(&self, document: &SummaryDocument) -> Result<()> {
        let file = File::create(&self.config.output_file)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "# Project Summary")?;
        writeln!(out)?;
        writeln!(out, "## Folder Structure")?;
        writeln!(out, "```")?;
        out.write_all(document.tree.as_bytes())?;
        writeln!(out, "```")?;
        writeln!(out)?;

        for section in &document.files {
            writeln!(out, "## File: {}", section.rel_path.display())?;
            writeln!(out, "**Absolute Path:** {}", section.abs_path.display())?;
            writeln!(out)?;
            writeln!(out, "**Content:**")?;
            writeln!(out, "```")?;
            match &section.content {
                FileContent::Text(text) => out.write_all(text.as_bytes())?,
                FileContent::Error(message) => out.write_all(message.as_bytes())?,
            }
            writeln!(out)?;
            writeln!(out, "```")?;
            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }
}
