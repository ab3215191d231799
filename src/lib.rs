/*!
 * # legendcount - word frequencies for subtitle archives
 *
 * A Rust library for counting how often each word is spoken across a folder
 * of SRT subtitle files.
 *
 * ## Features
 *
 * - List a directory and select the archives by file suffix
 * - Read every archive concurrently, keeping the listing order
 * - Strip sequence numbers, timing lines and markup from the dialogue
 * - Count words case-insensitively and order them by quantity
 * - Render the result as a table, a plain word list or JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `file_utils`: Directory listing and archive reading
 * - `normalizer`: Removal of subtitle artifacts from the corpus
 * - `tokenizer`: Splitting dialogue into words
 * - `frequency`: Word counting and ordering
 * - `report`: Output rendering
 * - `app_controller`: Pipeline composition
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod frequency;
pub mod normalizer;
pub mod report;
pub mod tokenizer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, count_words};
pub use errors::{AppError, CorpusError};
pub use frequency::{FrequencyTable, SortOrder, WordCount};
pub use report::OutputFormat;
pub use tokenizer::TokenBoundary;
