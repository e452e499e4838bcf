//! Trimming rule configuration.
//!
//! A `TrimRules` value describes which string fragments count as
//! unwanted: prefixes removed at the start, suffixes removed at the
//! end, and whole words that reduce the entire string to empty. Each
//! category is independently optional — `None` disables it without
//! error.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pattern sets fed to a `CompositeTrimmer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrimRules {
    /// Fragments removable from the start of a word.
    pub prefixes: Option<Vec<String>>,
    /// Fragments removable from the end of a word.
    pub suffixes: Option<Vec<String>>,
    /// Words that trim to the empty string when matched in full.
    pub whole_words: Option<Vec<String>>,
}

impl TrimRules {
    /// Rules with all three categories disabled (the identity trimmer).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = Some(suffixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_whole_words<I, S>(mut self, whole_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whole_words = Some(whole_words.into_iter().map(Into::into).collect());
        self
    }

    /// Reject degenerate configurations.
    ///
    /// An empty-string pattern would match every input and break the
    /// strict-shortening guarantee the recursive expansion relies on,
    /// so it is refused up front in every category.
    pub fn validate(&self) -> Result<()> {
        for (category, patterns) in [
            ("prefixes", &self.prefixes),
            ("suffixes", &self.suffixes),
            ("whole_words", &self.whole_words),
        ] {
            if let Some(patterns) = patterns {
                if patterns.iter().any(|p| p.is_empty()) {
                    return Err(Error::Config(format!(
                        "empty string is not a valid pattern (in {category})"
                    )));
                }
            }
        }
        Ok(())
    }
}
