/*!
 * Word frequency aggregation and ordering.
 *
 * Words are counted case-insensitively. The table remembers the order in which
 * each distinct word was first seen, and sorting is stable, so words with the
 * same quantity keep that first-seen order in either direction.
 */

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Occurrences of a single lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lowercase word
    pub word: String,
    /// Number of occurrences, always at least 1
    pub quantity: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, quantity: usize) -> Self {
        Self {
            word: word.into(),
            quantity,
        }
    }
}

/// Direction for ordering word counts
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(anyhow::anyhow!("Invalid sort order: {}", s)),
        }
    }
}

/// Case-insensitive word counts, one entry per distinct lowercase word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word, lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.add(word.as_ref());
        }
        table
    }

    /// Record one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    /// Occurrences of `word`, compared case-insensitively
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(&word.to_lowercase()).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of words counted
    pub fn total_words(&self) -> usize {
        self.counts.values().sum()
    }

    /// Drop words seen fewer than `min_count` times
    pub fn retain_min_count(&mut self, min_count: usize) {
        self.counts.retain(|_, quantity| *quantity >= min_count);
    }

    /// Records in first-seen order
    pub fn records(&self) -> Vec<WordCount> {
        self.counts
            .iter()
            .map(|(word, quantity)| WordCount::new(word.clone(), *quantity))
            .collect()
    }

    /// Records ordered by quantity
    pub fn sorted(&self, order: SortOrder) -> Vec<WordCount> {
        let mut records = self.records();
        sort_by_quantity(&mut records, order);
        records
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Stable sort by quantity; equal quantities keep their relative order
pub fn sort_by_quantity(records: &mut [WordCount], order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
        SortOrder::Desc => records.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
    }
}
