/*!
 * # poem-corpus
 *
 * Turns a directory of plain-text poems into a single JSON corpus, optionally
 * adding a romanized (ITRANS) rendering of Devanagari titles and lines.
 *
 * ## Features
 *
 * - One poem per file, the filename without its extension is the title
 * - Stable ids assigned in filename order
 * - Unreadable files are skipped without stopping the run
 * - Best-effort romanization with empty translation placeholders
 * - Atomic output writes with human-readable UTF-8 JSON
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `file_utils`: Directory listing, poem reading and atomic writes
 * - `poem`: The `PoemRecord` type and title derivation
 * - `transliteration`: The `Transliterator` seam and the ITRANS backend
 * - `corpus_builder`: The build pipeline
 * - `corpus_writer`: JSON serialization of the corpus
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod corpus_builder;
pub mod corpus_writer;
pub mod errors;
pub mod file_utils;
pub mod poem;
pub mod transliteration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use corpus_builder::{CorpusBuilder, CorpusReport, SkippedFile};
pub use errors::{CorpusError, TransliterationError};
pub use file_utils::{FileManager, PoemFile};
pub use poem::PoemRecord;
pub use transliteration::{romanize_or_original, ItransTransliterator, Transliterator};
