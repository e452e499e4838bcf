//! Trimkit — repeated removal of unwanted prefixes, suffixes, and
//! whole words from a string.
//!
//! Build a [`CompositeTrimmer`] from [`TrimRules`], then call
//! [`Trim::trim`] to get every distinct minimal remainder, or
//! [`Trim::shortest`] for just the shortest one:
//!
//! ```
//! use trimkit::{CompositeTrimmer, Trim, TrimRules};
//!
//! let trimmer = CompositeTrimmer::new(
//!     TrimRules::new()
//!         .with_prefixes(["aaa", "aa"])
//!         .with_suffixes(["bb", "bbb"])
//!         .with_whole_words(["JUNK"]),
//! )?;
//!
//! assert_eq!(trimmer.trim("aaasomething"), vec!["asomething", "something"]);
//! assert_eq!(trimmer.shortest("aaaSOMETHINGbbb"), "SOMETHING");
//! # Ok::<(), trimkit::Error>(())
//! ```
//!
//! Trimmers are immutable once built and can be shared freely across
//! threads.

pub mod affix;
pub mod composite;
pub mod lookup;
pub mod trim;

pub use affix::{PrefixTrimmer, SuffixTrimmer};
pub use composite::CompositeTrimmer;
pub use lookup::PrefixSet;
pub use trim::Trim;
pub use trimkit_core::{Error, Result, TrimRules};

#[cfg(test)]
mod tests {
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    fn triple() -> CompositeTrimmer {
        CompositeTrimmer::new(
            TrimRules::new()
                .with_prefixes(["aaa", "aa"])
                .with_suffixes(["bb", "bbb"])
                .with_whole_words(["JUNK"]),
        )
        .unwrap()
    }

    #[test]
    fn test_trimmers_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrefixTrimmer>();
        assert_send_sync::<SuffixTrimmer>();
        assert_send_sync::<CompositeTrimmer>();
    }

    #[test]
    fn test_results_never_longer_than_input() {
        let trimmer = triple();
        for word in ["", "a", "aaaJUNKbbb", "aabbaabb", "unrelated"] {
            let results = trimmer.trim(word);
            assert!(!results.is_empty());
            for r in &results {
                assert!(char_len(r) <= char_len(word));
            }
        }
    }

    #[test]
    fn test_fixed_points_are_idempotent() {
        let trimmer = triple();
        for word in ["aaaJUNKbbb", "aaasomething", "somethingbbb", "JUNK"] {
            for fixed in trimmer.trim(word) {
                assert_eq!(trimmer.trim_once(&fixed), vec![fixed.clone()]);
            }
        }
    }

    #[test]
    fn test_shortest_is_minimal() {
        let trimmer = triple();
        for word in ["aaaJUNKbbb", "aaaSOMETHINGbbb", "aabb"] {
            let best = trimmer.shortest(word);
            for r in trimmer.trim(word) {
                assert!(char_len(&best) <= char_len(&r));
            }
        }
    }

    #[test]
    fn test_whole_word_yields_empty() {
        let trimmer = triple();
        assert!(trimmer.trim("JUNK").contains(&String::new()));
    }

    #[test]
    fn test_prefix_only_lookup_chain() {
        let trimmer = PrefixTrimmer::new(["pre1-", "pre2-"]).unwrap();
        assert_eq!(trimmer.trim("pre2-pre1-abc"), vec!["abc"]);
    }

    #[test]
    fn test_rules_from_json() {
        let rules: TrimRules = serde_json::from_str(
            r#"{"prefixes": ["aaa", "aa"], "suffixes": null, "whole_words": ["JUNK"]}"#,
        )
        .unwrap();
        let trimmer = CompositeTrimmer::new(rules).unwrap();
        assert_eq!(trimmer.trim("aaJUNK"), vec![""]);
    }
}
