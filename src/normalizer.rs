/*!
 * Subtitle text normalization.
 *
 * Turns the raw concatenation of every archive into the lines that carry
 * dialogue: blank separators, timing lines and sequence numbers are dropped,
 * and markup or punctuation symbols are deleted from what remains.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// @const: Symbols deleted from every dialogue line
pub const SYMBOLS: [&str; 14] = [
    ".", "?", "-", ",", "\"", "_", "♪", "<i>", "</i>", "\r", "[", "]", "(", ")",
];

// @const: Marker found on SRT timing lines
pub const TIMING_MARKER: &str = "-->";

// @const: Integer prefix, decimal or 0x-prefixed hexadecimal
static INTEGER_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:0[xX][0-9a-fA-F]|0(?:[^xX]|$)|[1-9])").unwrap()
});

// ECMAScript whitespace and line terminators: Unicode White_Space without
// NEL (U+0085), plus the byte order mark some SRT exports start with
fn is_line_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(is_line_whitespace)
}

/// Join all archive contents with a newline and split the corpus back into lines
pub fn split_corpus<S: AsRef<str>>(contents: &[S]) -> Vec<String> {
    let corpus = contents
        .iter()
        .map(|content| content.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    corpus.split('\n').map(str::to_string).collect()
}

/// Drop lines that are empty or contain only whitespace
pub fn drop_blank_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !trim_line(line).is_empty()).collect()
}

/// Drop SRT timing lines
pub fn drop_timing_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.contains(TIMING_MARKER)).collect()
}

/// Whether a line reads as a number under integer-prefix parsing.
///
/// Parsing stops at the first character that cannot continue the number, so
/// any line that merely starts with digits counts: "42 is cool" is a number.
/// Sequence index lines are the intended target; dialogue that opens with a
/// number is dropped along with them.
pub fn is_numeric_line(line: &str) -> bool {
    INTEGER_PREFIX_REGEX.is_match(trim_line(line))
}

/// Drop lines that read as numbers (sequence indexes)
pub fn drop_numeric_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !is_numeric_line(line)).collect()
}

/// Delete every occurrence of each symbol in [`SYMBOLS`] from a single line
pub fn strip_symbols_from_line(line: &str) -> String {
    SYMBOLS
        .iter()
        .fold(line.to_string(), |acc, symbol| acc.replace(*symbol, ""))
}

/// Delete the symbol set from every line
pub fn strip_symbols(lines: Vec<String>) -> Vec<String> {
    lines.iter().map(|line| strip_symbols_from_line(line)).collect()
}

/// Run the four normalization stages in order
pub fn normalize(lines: Vec<String>) -> Vec<String> {
    let total = lines.len();

    let lines = drop_blank_lines(lines);
    debug!("Normalizer: {} of {} lines left after dropping blanks", lines.len(), total);

    let lines = drop_timing_lines(lines);
    debug!("Normalizer: {} lines left after dropping timing lines", lines.len());

    let lines = drop_numeric_lines(lines);
    debug!("Normalizer: {} lines left after dropping numeric lines", lines.len());

    strip_symbols(lines)
}
