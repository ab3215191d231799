use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::errors::{AppError, CorpusError};
use crate::file_utils::FileManager;
use crate::frequency::{FrequencyTable, WordCount};
use crate::normalizer;
use crate::report;
use crate::tokenizer::{self, TokenBoundary};

// @module: Application controller for the word counting pipeline

/// Count the words of already-read archive contents.
///
/// Joins the contents, normalizes the lines, tokenizes and aggregates. No
/// filesystem access happens here.
pub fn count_words<S: AsRef<str>>(contents: &[S], boundary: TokenBoundary) -> FrequencyTable {
    let lines = normalizer::split_corpus(contents);
    let lines = normalizer::normalize(lines);
    let words = tokenizer::tokenize(&lines, boundary);
    debug!("Tokenized {} dialogue lines into {} words", lines.len(), words.len());

    FrequencyTable::from_words(words)
}

/// Main application controller for counting subtitle words
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// List the configured directory and keep the matching archives
    pub fn find_archives(&self) -> Result<Vec<PathBuf>, CorpusError> {
        let entries = if self.config.recursive {
            FileManager::list_dir_recursive(&self.config.directory)?
        } else {
            FileManager::list_dir(&self.config.directory)?
        };

        let archives = FileManager::filter_by_suffix(&entries, &self.config.extension);
        debug!(
            "{} of {} entries end with {:?}",
            archives.len(),
            entries.len(),
            self.config.extension
        );
        Ok(archives)
    }

    /// Read the archives concurrently while showing a progress bar
    pub async fn read_corpus(&self, archives: &[PathBuf]) -> Result<Vec<String>, CorpusError> {
        let progress_bar = ProgressBar::new(archives.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} archives ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        let result = FileManager::read_archives(archives, self.config.max_concurrent_reads, |done, _total| {
            progress_bar.set_position(done as u64);
        })
        .await;

        progress_bar.finish_and_clear();
        result
    }

    /// Run the whole pipeline and return the ordered word counts
    pub async fn count(&self) -> Result<Vec<WordCount>, AppError> {
        let start_time = std::time::Instant::now();

        let archives = self.find_archives()?;
        if archives.is_empty() {
            warn!(
                "No files ending with {:?} found in {:?}",
                self.config.extension, self.config.directory
            );
        }

        let contents = self.read_corpus(&archives).await?;
        let mut table = count_words(&contents, self.config.token_boundary);
        let total_words = table.total_words();
        let distinct_words = table.len();

        table.retain_min_count(self.config.min_count);

        let mut records = table.sorted(self.config.sort_order);
        if let Some(limit) = self.config.limit {
            records.truncate(limit);
        }

        info!(
            "Counted {} words ({} distinct) across {} archives in {:.2?}",
            total_words,
            distinct_words,
            archives.len(),
            start_time.elapsed()
        );

        Ok(records)
    }

    /// Run the pipeline and render the result into `sink`
    pub async fn run<W: Write>(&self, sink: &mut W) -> Result<(), AppError> {
        let records = self.count().await?;
        report::render(&records, self.config.output_format, sink)
    }

    /// Run the pipeline and print the result to stdout
    pub async fn run_to_stdout(&self) -> anyhow::Result<()> {
        let records = self
            .count()
            .await
            .with_context(|| format!("Failed to count words in {:?}", self.config.directory))?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        report::render(&records, self.config.output_format, &mut handle)
            .context("Failed to write report")
    }
}
