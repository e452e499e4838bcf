//! The `Trim` trait — single-pass trimming plus recursive expansion.
//!
//! Implementors only provide `trim_once`; `trim` and `shortest` come
//! for free. `trim` explores every order in which removable parts can
//! be stripped and collects all distinct fixed points, because
//! overlapping patterns can bottom out at different minimal strings.
//! Branching is bounded by the number of simultaneously matching
//! patterns per step, so heavily overlapping rule sets can make the
//! expansion exponential in nesting depth. Inputs are expected to be
//! word- or phrase-sized; there is no truncation.

use tracing::trace;

/// Append `item` unless an equal string is already present.
pub(crate) fn push_unique(result: &mut Vec<String>, item: String) {
    if !result.iter().any(|existing| *existing == item) {
        result.push(item);
    }
}

/// A single-pass trimming strategy with recursive expansion on top.
pub trait Trim {
    /// All ways to remove one unwanted part from `word`.
    ///
    /// Yields `word` itself when nothing matches (the pass-through
    /// sentinel); every other candidate is strictly shorter.
    fn trim_once(&self, word: &str) -> Vec<String>;

    /// All distinct fixed points reachable by repeated single-pass
    /// trimming, in order of first discovery. Never empty.
    fn trim(&self, word: &str) -> Vec<String> {
        trace!(word, "expanding");
        let mut result = Vec::new();
        for smaller in self.trim_once(word) {
            if smaller == word {
                push_unique(&mut result, smaller);
            } else {
                for sub in self.trim(&smaller) {
                    push_unique(&mut result, sub);
                }
            }
        }
        result
    }

    /// The shortest fixed point of `trim`, by char count.
    ///
    /// Ties resolve to the earliest discovered result, so the answer
    /// is deterministic for a given trimmer.
    fn shortest(&self, word: &str) -> String {
        self.trim(word)
            .into_iter()
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strips one trailing 'x' or 'y' per pass.
    struct TailLetters;

    impl Trim for TailLetters {
        fn trim_once(&self, word: &str) -> Vec<String> {
            match word.strip_suffix(['x', 'y']) {
                Some(rest) => vec![rest.to_string()],
                None => vec![word.to_string()],
            }
        }
    }

    #[test]
    fn test_trim_reaches_fixed_point() {
        assert_eq!(TailLetters.trim("abxyx"), vec!["ab"]);
        assert_eq!(TailLetters.trim("ab"), vec!["ab"]);
    }

    #[test]
    fn test_trim_never_empty() {
        assert_eq!(TailLetters.trim(""), vec![""]);
    }

    #[test]
    fn test_shortest_of_single_branch() {
        assert_eq!(TailLetters.shortest("abxy"), "ab");
    }

    #[test]
    fn test_push_unique() {
        let mut result = vec!["a".to_string()];
        push_unique(&mut result, "b".to_string());
        push_unique(&mut result, "a".to_string());
        assert_eq!(result, vec!["a", "b"]);
    }
}
