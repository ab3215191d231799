/*!
 * Tests for normalization, tokenization and counting of in-memory archives
 */

use legendcount::frequency::{FrequencyTable, SortOrder, WordCount};
use legendcount::normalizer;
use legendcount::tokenizer::{self, TokenBoundary};
use legendcount::count_words;
use crate::common;

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Test each normalization stage on a typical subtitle block
#[test]
fn test_normalize_stages_withSubtitleBlock_shouldApplyInOrder() {
    let lines = owned(&["1", "00:00:01,000 --> 00:00:02,000", "Hello, World!", "", "42"]);

    let lines = normalizer::drop_blank_lines(lines);
    assert_eq!(lines.len(), 4);

    let lines = normalizer::drop_timing_lines(lines);
    assert_eq!(lines, owned(&["1", "Hello, World!", "42"]));

    let lines = normalizer::drop_numeric_lines(lines);
    assert_eq!(lines, owned(&["Hello, World!"]));

    assert_eq!(normalizer::strip_symbols(lines), owned(&["Hello World!"]));
}

/// Test that dialogue opening with a number is dropped with the index lines
#[test]
fn test_normalize_withDialogueStartingWithNumber_shouldDropLine() {
    let lines = owned(&["42 is cool", "is 42 cool"]);
    assert_eq!(normalizer::normalize(lines), owned(&["is 42 cool"]));
}

/// Test that windows line endings are cleaned
#[test]
fn test_count_words_withCrlfArchive_shouldIgnoreCarriageReturns() {
    let archive = "1\r\n00:00:01,000 --> 00:00:02,000\r\nYes yes\r\n\r\n";
    let table = count_words(&[archive], TokenBoundary::Space);

    assert_eq!(table.get("yes"), Some(2));
    assert_eq!(table.len(), 1);
}

/// Test aggregation of a word list
#[test]
fn test_frequency_table_withMixedCase_shouldMatchExpectedSet() {
    let table = FrequencyTable::from_words(["Hello", "hello", "World"]);

    let mut records = table.records();
    records.sort_by(|a, b| a.word.cmp(&b.word));
    assert_eq!(records, vec![WordCount::new("hello", 2), WordCount::new("world", 1)]);
}

/// Test the sorter on the documented example
#[test]
fn test_sorted_withAscAndDesc_shouldOrderByQuantity() {
    let table = FrequencyTable::from_words(["a", "b", "a", "a"]);

    assert_eq!(
        table.sorted(SortOrder::Asc),
        vec![WordCount::new("b", 1), WordCount::new("a", 3)]
    );
    assert_eq!(
        table.sorted(SortOrder::Desc),
        vec![WordCount::new("a", 3), WordCount::new("b", 1)]
    );
}

/// Test that line breaks only separate words with the whitespace rule
#[test]
fn test_count_words_withTwoArchives_shouldDependOnBoundary() {
    let archive = common::srt_content(&["Hello Hello"]);
    let contents = vec![archive.clone(), archive];

    let by_space = count_words(&contents, TokenBoundary::Space);
    assert_eq!(by_space.get("hello"), Some(2));
    assert_eq!(by_space.get("hello\nhello"), Some(1));

    let by_whitespace = count_words(&contents, TokenBoundary::Whitespace);
    assert_eq!(by_whitespace.get("hello"), Some(4));
    assert_eq!(by_whitespace.len(), 1);
}

/// Test that markup and music symbols never reach the word list
#[test]
fn test_count_words_withMarkup_shouldCountBareWords() {
    let archive = common::srt_content(&["<i>♪ Sing, sing a song ♪</i>"]);
    let words = tokenizer::tokenize(
        &normalizer::normalize(normalizer::split_corpus(&[archive])),
        TokenBoundary::Whitespace,
    );

    assert_eq!(words, vec!["Sing", "sing", "a", "song"]);
}
