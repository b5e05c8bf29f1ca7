//! Plain text output formatter

use super::{CountRecord, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one tab-separated line per input
///
/// Columns: source, words, sentences, `yes`/`no` verdict. Accepted
/// sentences follow as indented lines when present.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &CountRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            record.source,
            record.words,
            record.sentences,
            if record.is_language { "yes" } else { "no" }
        )?;

        for sentence in record.details.iter().flatten() {
            writeln!(
                self.writer,
                "  - {} [markers: {}, stopwords: {}{}]",
                sentence.text(),
                sentence.markers,
                sentence.stopwords,
                if sentence.from_split { ", split" } else { "" }
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langsift_core::{Counts, Detector};

    #[test]
    fn test_tab_separated_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_record(&CountRecord::from_counts("a.txt", Counts::new(6, 1)))
            .unwrap();
        formatter
            .format_record(&CountRecord::from_counts("b.txt", Counts::new(4, 0)))
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output, "a.txt\t6\t1\tyes\nb.txt\t4\t0\tno\n");
    }

    #[test]
    fn test_details_are_indented() {
        let analysis = Detector::default().analyze("The cat sits on the mat.");
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_record(&CountRecord::from_analysis("<text>", analysis))
            .unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.contains("  - The cat sits on the mat [markers: 1, stopwords: 3]"));
    }
}
