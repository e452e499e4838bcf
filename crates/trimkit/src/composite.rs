//! Combined prefix + suffix + whole-word trimming.

use std::collections::HashSet;

use tracing::debug;
use trimkit_core::{Result, TrimRules};

use crate::affix::{PrefixTrimmer, SuffixTrimmer};
use crate::trim::{push_unique, Trim};

/// Removes unwanted parts from a string, as configured by `TrimRules`.
///
/// * prefixes are removed only at the beginning,
/// * suffixes only at the end,
/// * a whole-word match turns the string into the empty string.
///
/// Unwanted parts can have different lengths, so a single pass can
/// produce several different remainders; `trim_once` and `trim` return
/// all of them. A trimmer with no rules configured passes every word
/// through unchanged.
#[derive(Debug)]
pub struct CompositeTrimmer {
    prefix: Option<PrefixTrimmer>,
    suffix: Option<SuffixTrimmer>,
    whole_words: HashSet<String>,
}

impl CompositeTrimmer {
    pub fn new(rules: TrimRules) -> Result<Self> {
        rules.validate()?;
        let prefix = rules.prefixes.map(PrefixTrimmer::new).transpose()?;
        let suffix = rules.suffixes.map(SuffixTrimmer::new).transpose()?;
        let whole_words: HashSet<String> =
            rules.whole_words.into_iter().flatten().collect();
        debug!(
            prefixes = prefix.is_some(),
            suffixes = suffix.is_some(),
            whole_words = whole_words.len(),
            "built composite trimmer"
        );
        Ok(Self {
            prefix,
            suffix,
            whole_words,
        })
    }
}

impl Trim for CompositeTrimmer {
    fn trim_once(&self, word: &str) -> Vec<String> {
        let mut result = Vec::new();
        if self.whole_words.contains(word) {
            push_unique(&mut result, String::new());
        }

        // Suffix and prefix passes both start from the original word:
        // one pass removes one part, never a composition of two.
        let suffix_pass = self
            .suffix
            .as_ref()
            .map(|t| t.trim_once(word))
            .unwrap_or_default();
        let prefix_pass = self
            .prefix
            .as_ref()
            .map(|t| t.trim_once(word))
            .unwrap_or_default();

        for trimmed in suffix_pass.into_iter().chain(prefix_pass) {
            if trimmed != word {
                let is_whole = self.whole_words.contains(&trimmed);
                push_unique(&mut result, trimmed);
                if is_whole {
                    push_unique(&mut result, String::new());
                }
            }
        }

        if result.is_empty() {
            result.push(word.to_string());
        }
        result
    }
}
