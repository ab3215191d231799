/*!
 * Common test utilities for the legendcount test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds SRT content with one entry per dialogue line
pub fn srt_content(dialogue: &[&str]) -> String {
    let mut content = String::new();
    for (index, line) in dialogue.iter().enumerate() {
        let second = index + 1;
        content.push_str(&format!(
            "{}\n00:00:{:02},000 --> 00:00:{:02},500\n{}\n\n",
            index + 1,
            second,
            second,
            line
        ));
    }
    content
}

/// Creates a subtitle file holding the given dialogue lines
pub fn create_test_subtitle(dir: &Path, filename: &str, dialogue: &[&str]) -> Result<PathBuf> {
    create_test_file(dir, filename, &srt_content(dialogue))
}

/// Routes pipeline logs to the test output (set RUST_LOG=debug to see them)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
