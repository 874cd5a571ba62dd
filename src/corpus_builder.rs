use log::{debug, info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

use crate::app_config::Config;
use crate::corpus_writer;
use crate::errors::CorpusError;
use crate::file_utils::{FileManager, PoemFile};
use crate::poem::{title_from_filename, PoemRecord};
use crate::transliteration::{ItransTransliterator, Transliterator};

// @module: Corpus build pipeline

/// A poem file that was left out of the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Result of one build: the records in output order plus the skipped files
#[derive(Debug, Default)]
pub struct CorpusReport {
    pub records: Vec<PoemRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// Builds a poem corpus from a directory and writes it as JSON
pub struct CorpusBuilder {
    // @field: Build settings
    config: Config,

    // @field: Converter used when transliteration is enabled
    transliterator: Box<dyn Transliterator>,
}

impl CorpusBuilder {
    // @method: Create a builder using the ITRANS converter
    pub fn new(config: Config) -> Self {
        Self::with_transliterator(config, Box::new(ItransTransliterator::new()))
    }

    // @method: Create a builder with a specific converter
    pub fn with_transliterator(config: Config, transliterator: Box<dyn Transliterator>) -> Self {
        Self {
            config,
            transliterator,
        }
    }

    /// Enumerate, read and assemble every poem in the input directory.
    ///
    /// Fails only when the directory is missing or cannot be listed. A file
    /// that cannot be read is logged, recorded as skipped and consumes no id.
    pub fn build(&mut self) -> Result<CorpusReport, CorpusError> {
        let poem_files = FileManager::list_poem_files(&self.config.input_dir, &self.config.file_extension)?;

        let progress_bar = self.progress_bar(poem_files.len() as u64);
        let mut report = CorpusReport::default();

        for PoemFile { name: filename, path } in poem_files {
            progress_bar.set_message(filename.clone());
            debug!("Processing poem file: {}", filename);

            match FileManager::read_poem_lines(&path) {
                Ok(lines) => {
                    // Ids follow the records already assembled, so skips leave no gap
                    let id = report.records.len() as u64 + 1;
                    let record = self.assemble(id, &filename, lines);
                    report.records.push(record);
                }
                Err(e) => {
                    warn!("Error processing file {}: {}", filename, e);
                    report.skipped.push(SkippedFile {
                        filename,
                        reason: e.to_string(),
                    });
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        Ok(report)
    }

    /// Build the corpus and write it to the configured output file
    pub fn run(&mut self) -> Result<CorpusReport, CorpusError> {
        let start_time = Instant::now();
        let report = self.build()?;

        corpus_writer::write_corpus(&report.records, &self.config.output_file)?;

        info!(
            "Wrote {} poem(s), skipped {} file(s) in {:.2}s",
            report.records.len(),
            report.skipped.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(report)
    }

    // @assembles: One record in the configured variant
    fn assemble(&mut self, id: u64, filename: &str, lines: Vec<String>) -> PoemRecord {
        let title = title_from_filename(filename);
        if self.config.enable_transliteration {
            PoemRecord::romanized(id, title, lines, self.transliterator.as_mut())
        } else {
            PoemRecord::basic(id, title, lines)
        }
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} poems ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }
}
