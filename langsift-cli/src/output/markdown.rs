//! Markdown output formatter

use super::{CountRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

const HEADER: &str = "| Source | Words | Sentences | Language |\n|--------|------:|----------:|:--------:|";

/// Markdown formatter - outputs records as a table with a totals footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    inputs: usize,
    words: usize,
    sentences: usize,
    languages: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            inputs: 0,
            words: 0,
            sentences: 0,
            languages: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &CountRecord) -> Result<()> {
        if self.inputs == 0 {
            writeln!(self.writer, "{HEADER}")?;
        }

        self.inputs += 1;
        self.words += record.words;
        self.sentences += record.sentences;
        if record.is_language {
            self.languages += 1;
        }

        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            record.source.replace('|', "\\|"),
            record.words,
            record.sentences,
            if record.is_language { "yes" } else { "no" }
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.inputs == 0 {
            writeln!(self.writer, "{HEADER}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total: {} inputs, {} words, {} sentences, {} with language*",
            self.inputs, self.words, self.sentences, self.languages
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
