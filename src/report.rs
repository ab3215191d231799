use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::errors::AppError;
use crate::frequency::WordCount;

// @module: Rendering word counts into an output sink

/// Output rendering
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `word quantity` rows
    #[default]
    Table,
    /// One word per line, in order, without quantities
    Words,
    /// Pretty-printed JSON array of word counts
    Json,
}

// Words are printed through Debug escaping so merged tokens such as "a\nb"
// stay on one row.
fn display_word(word: &str) -> String {
    let escaped = format!("{:?}", word);
    if escaped.len() == word.len() + 2 {
        word.to_string()
    } else {
        escaped
    }
}

/// Render `records` in the requested format
pub fn render<W: Write>(records: &[WordCount], format: OutputFormat, sink: &mut W) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            let words: Vec<String> = records.iter().map(|r| display_word(&r.word)).collect();
            let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0).max(4);

            writeln!(sink, "{:<width$} {}", "WORD", "QUANTITY", width = width)?;
            for (word, record) in words.iter().zip(records) {
                writeln!(sink, "{:<width$} {}", word, record.quantity, width = width)?;
            }
        }
        OutputFormat::Words => {
            for record in records {
                writeln!(sink, "{}", display_word(&record.word))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *sink, records)
                .map_err(|e| AppError::Output(format!("Failed to serialize word counts: {}", e)))?;
            writeln!(sink)?;
        }
    }

    sink.flush()?;
    Ok(())
}
