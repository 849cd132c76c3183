//! Cipher jobs - one input source transformed into one output sink

use crate::core::{Mode, TransformStats, Vigenere};
use crate::execution::executor::transform_stream;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, BufReader, BufWriter};
use tracing::{debug, info};

/// Where the text to transform comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text given directly
    Text(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

/// Where the transformed text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
    /// Collect the output in memory (returned in `JobOutcome::output`)
    Buffer,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Text(text) => write!(f, "text ({} chars)", text.chars().count()),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => write!(f, "stdout"),
            Sink::File(path) => write!(f, "{}", path.display()),
            Sink::Buffer => write!(f, "memory"),
        }
    }
}

/// Result of running a job
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub stats: TransformStats,

    /// Transformed text, only for `Sink::Buffer`
    pub output: Option<String>,
}

/// A single encrypt or decrypt run
#[derive(Debug, Clone)]
pub struct Job {
    pub cipher: Vigenere,
    pub mode: Mode,
    pub source: Source,
    pub sink: Sink,

    /// Show a byte progress bar for file input
    pub show_progress: bool,
}

type BoxedReader = Box<dyn AsyncBufRead + Unpin + Send>;

impl Job {
    pub fn new(cipher: Vigenere, mode: Mode, source: Source, sink: Sink) -> Self {
        Self {
            cipher,
            mode,
            source,
            sink,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the job to completion
    pub async fn run(&self) -> Result<JobOutcome> {
        info!(
            "Starting {:?}: {} -> {} (key length {})",
            self.mode,
            self.source,
            self.sink,
            self.cipher.key().len()
        );

        if let (Source::File(input), Sink::File(output)) = (&self.source, &self.sink) {
            if same_file(input, output).await {
                anyhow::bail!(
                    "Input and output are the same file ({}); write to a different path",
                    output.display()
                );
            }
        }

        let (reader, input_len) = self.open_source().await?;
        let progress = match input_len {
            Some(len) if self.show_progress => Some(create_progress_bar(len)),
            _ => None,
        };

        let mut cipher = self.cipher.stream(self.mode);
        let outcome = match &self.sink {
            Sink::Stdout => {
                let writer = tokio::io::stdout();
                let stats = transform_stream(&mut cipher, reader, writer, progress.as_ref()).await?;
                JobOutcome { stats, output: None }
            }
            Sink::File(path) => {
                let file = tokio::fs::File::create(path)
                    .await
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                let writer = BufWriter::new(file);
                let stats = transform_stream(&mut cipher, reader, writer, progress.as_ref()).await?;
                JobOutcome { stats, output: None }
            }
            Sink::Buffer => {
                let mut buffer = Vec::new();
                let stats =
                    transform_stream(&mut cipher, reader, &mut buffer, progress.as_ref()).await?;
                let output = String::from_utf8(buffer).context("Transformed output is not UTF-8")?;
                JobOutcome {
                    stats,
                    output: Some(output),
                }
            }
        };

        if let Some(progress) = progress {
            progress.finish_and_clear();
        }

        info!(
            "Finished {:?}: {} letters, {} characters, {} skipped",
            self.mode, outcome.stats.letters, outcome.stats.characters, outcome.stats.skipped
        );
        Ok(outcome)
    }

    /// Open the source, returning a reader and, for files, its length in bytes
    async fn open_source(&self) -> Result<(BoxedReader, Option<u64>)> {
        match &self.source {
            Source::Text(text) => {
                let reader: BoxedReader = Box::new(Cursor::new(text.clone().into_bytes()));
                Ok((reader, None))
            }
            Source::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                let len = file.metadata().await.ok().map(|meta| meta.len());
                debug!("Input file {} is {:?} bytes", path.display(), len);
                Ok((Box::new(BufReader::new(file)), len))
            }
            Source::Stdin => Ok((Box::new(BufReader::new(tokio::io::stdin())), None)),
        }
    }
}

/// Whether two paths name the same existing file
///
/// A path that doesn't exist yet can't alias anything.
async fn same_file(a: &Path, b: &Path) -> bool {
    match (tokio::fs::canonicalize(a).await, tokio::fs::canonicalize(b).await) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create a byte progress bar drawn on stderr
pub fn create_progress_bar(total_bytes: u64) -> ProgressBar {
    let progress = ProgressBar::new(total_bytes);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
    {
        progress.set_style(style.progress_chars("#>-"));
    }
    progress
}
