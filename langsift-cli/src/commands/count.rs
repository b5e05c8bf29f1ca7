//! Count command implementation

use super::parse_preset;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    CountRecord, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use crate::profile_source::ProfileSource;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use langsift_core::{BatchOptions, Detector, Preset};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Source label used for `--text` input
pub const TEXT_SOURCE: &str = "<text>";

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Count this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Count every non-empty line as a separate input
    #[arg(long)]
    pub lines: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Strictness preset (default, strict, loose)
    #[arg(short, long, value_name = "PRESET", value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// External profile file replacing the built-in English tables
    #[arg(short, long, value_name = "FILE", env = "LANGSIFT_PROFILE")]
    pub config: Option<PathBuf>,

    /// Count files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Report each accepted sentence
    #[arg(long)]
    pub details: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated line per input
    Text,
    /// JSON array of records
    Json,
    /// Markdown table with totals
    Markdown,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting count");
        log::debug!("Arguments: {:?}", self);

        if self.threads == Some(0) {
            return Err(CliError::ConfigError("--threads must be greater than 0".into()).into());
        }

        let detector = ProfileSource::from_options(self.config.clone(), self.preset)
            .build_detector()?;

        let records = match &self.text {
            Some(text) => self.count_source(&detector, TEXT_SOURCE, text)?,
            None => self.count_files(&detector)?,
        };

        let mut formatter = self.create_formatter()?;
        for record in &records {
            formatter.format_record(record)?;
        }
        formatter.finish()?;

        log::info!("Counted {} inputs", records.len());
        Ok(())
    }

    fn count_files(&self, detector: &Detector) -> Result<Vec<CountRecord>> {
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let count_one = |path: &PathBuf| -> Result<Vec<CountRecord>> {
            let records = self.count_file(detector, path)?;
            progress.file_completed(&path.display().to_string());
            Ok(records)
        };

        let per_file: Vec<Vec<CountRecord>> = if self.parallel || self.threads.is_some() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads.unwrap_or(0))
                .build()
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;
            log::debug!("Counting {} files on {} threads", files.len(), pool.current_num_threads());
            pool.install(|| files.par_iter().map(count_one).collect::<Result<_>>())?
        } else {
            files.iter().map(count_one).collect::<Result<_>>()?
        };

        progress.finish();
        Ok(per_file.into_iter().flatten().collect())
    }

    fn count_file(&self, detector: &Detector, path: &Path) -> Result<Vec<CountRecord>> {
        let text = FileReader::read_text(path)?;
        self.count_source(detector, &path.display().to_string(), &text)
    }

    /// Count one text, whole or line by line
    fn count_source(
        &self,
        detector: &Detector,
        source: &str,
        text: &str,
    ) -> Result<Vec<CountRecord>> {
        if !self.lines {
            let record = if self.details {
                CountRecord::from_analysis(source, detector.analyze(text))
            } else {
                CountRecord::from_counts(source, detector.count(text))
            };
            return Ok(vec![record]);
        }

        let (numbers, lines): (Vec<usize>, Vec<&str>) = FileReader::numbered_lines(text).unzip();
        let labels = numbers.iter().map(|n| format!("{source}:{n}"));

        if self.details {
            return Ok(labels
                .zip(&lines)
                .map(|(label, line)| CountRecord::from_analysis(label, detector.analyze(line)))
                .collect());
        }

        let options = BatchOptions {
            threads: self.threads,
        };
        let counts = detector
            .count_batch_with(&lines, &options)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        Ok(labels
            .zip(counts)
            .map(|(label, counts)| CountRecord::from_counts(label, counts))
            .collect())
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> CountArgs {
        CountArgs {
            input: Vec::new(),
            text: None,
            lines: false,
            output: None,
            format: OutputFormat::Text,
            preset: None,
            config: None,
            parallel: false,
            threads: None,
            details: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_count_whole_text() {
        let records = args()
            .count_source(&Detector::default(), TEXT_SOURCE, "The cat sits on the mat.")
            .unwrap();
        assert_eq!(
            records,
            vec![CountRecord::from_counts(TEXT_SOURCE, langsift_core::Counts::new(6, 1))]
        );
    }

    #[test]
    fn test_count_lines() {
        let mut args = args();
        args.lines = true;
        let text = "The cat sits on the mat.\n\nBUY SPAM BUY SPAM!\n";

        let records = args
            .count_source(&Detector::default(), "mail.txt", text)
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "mail.txt:1");
        assert!(records[0].is_language);
        assert_eq!(records[1].source, "mail.txt:3");
        assert!(!records[1].is_language);
    }

    #[test]
    fn test_count_lines_with_details() {
        let mut args = args();
        args.lines = true;
        args.details = true;

        let records = args
            .count_source(&Detector::default(), TEXT_SOURCE, "He had a great time there.")
            .unwrap();
        let details = records[0].details.as_ref().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].words, 5);
    }

    #[test]
    fn test_parallel_files_keep_order() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [
            ("a.txt", "The cat sits on the mat."),
            ("b.txt", "BUY SPAM BUY SPAM!"),
            ("c.txt", "He had a great time there."),
        ] {
            fs::write(dir.path().join(name), text).unwrap();
        }

        let mut args = args();
        args.input = vec![dir.path().join("*.txt").display().to_string()];
        args.threads = Some(2);

        let records = args.count_files(&Detector::default()).unwrap();
        let sentences: Vec<usize> = records.iter().map(|r| r.sentences).collect();
        assert_eq!(sentences, vec![1, 0, 1]);
        assert!(records[0].source.ends_with("a.txt"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut args = args();
        args.text = Some("anything".to_string());
        args.threads = Some(0);
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("--threads"));
    }
}
