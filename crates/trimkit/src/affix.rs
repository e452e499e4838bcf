//! Single-pass prefix and suffix strippers.
//!
//! `SuffixTrimmer` reuses the prefix machinery through the
//! reverse-string trick: the lookup is built over char-reversed
//! patterns, queries are reversed on the way in, and matched lengths
//! are taken off the end of the original word on the way out.

use tracing::debug;
use trimkit_core::Result;

use crate::lookup::PrefixSet;
use crate::trim::Trim;

/// Removes one configured prefix per pass.
#[derive(Debug)]
pub struct PrefixTrimmer {
    lookup: PrefixSet,
}

impl PrefixTrimmer {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookup = PrefixSet::build(patterns)?;
        debug!(patterns = lookup.len(), "built prefix trimmer");
        Ok(Self { lookup })
    }
}

impl Trim for PrefixTrimmer {
    fn trim_once(&self, word: &str) -> Vec<String> {
        let trimmed: Vec<String> = self
            .lookup
            .prefixes(word)
            .map(|prefix| word[prefix.len()..].to_string())
            .collect();
        if trimmed.is_empty() {
            vec![word.to_string()]
        } else {
            trimmed
        }
    }
}

/// Removes one configured suffix per pass.
#[derive(Debug)]
pub struct SuffixTrimmer {
    // Indexes the char-reversed form of every pattern.
    lookup: PrefixSet,
}

impl SuffixTrimmer {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookup = PrefixSet::build(
            patterns.into_iter().map(|p| reverse(p.as_ref())),
        )?;
        debug!(patterns = lookup.len(), "built suffix trimmer");
        Ok(Self { lookup })
    }
}

impl Trim for SuffixTrimmer {
    fn trim_once(&self, word: &str) -> Vec<String> {
        let reversed = reverse(word);
        // A matched reversed prefix covers the same chars as the
        // original suffix, so its byte length lands on a boundary.
        let trimmed: Vec<String> = self
            .lookup
            .prefixes(&reversed)
            .map(|prefix| word[..word.len() - prefix.len()].to_string())
            .collect();
        if trimmed.is_empty() {
            vec![word.to_string()]
        } else {
            trimmed
        }
    }
}

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
