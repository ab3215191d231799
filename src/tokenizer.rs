use serde::{Deserialize, Serialize};

// @module: Splitting normalized dialogue into words

/// How words are delimited once the cleaned lines are joined back together
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenBoundary {
    /// Split on the literal space character only.
    ///
    /// Line breaks are not boundaries, so the last word of one line and the
    /// first word of the next merge into a single token such as "bye\nhello".
    /// Consecutive spaces yield empty tokens, which are counted like any other.
    #[default]
    Space,
    /// Split on any whitespace and drop empty tokens
    Whitespace,
}

impl TokenBoundary {
    // @returns: Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Whitespace => "whitespace",
        }
    }
}

impl std::fmt::Display for TokenBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Join the cleaned lines with newlines and split the text into words
pub fn tokenize<S: AsRef<str>>(lines: &[S], boundary: TokenBoundary) -> Vec<String> {
    let text = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    match boundary {
        TokenBoundary::Space => text.split(' ').map(str::to_string).collect(),
        TokenBoundary::Whitespace => text.split_whitespace().map(str::to_string).collect(),
    }
}
