//! Prefix lookup — an immutable char-level trie over a pattern set.
//!
//! Answers "which stored patterns are a prefix of this query?" and
//! returns every match, not just the longest. Built once, never
//! mutated afterward; the read path borrows immutably, so a built
//! `PrefixSet` can be queried from any number of threads.

use std::collections::BTreeMap;

use trimkit_core::{Error, Result};

#[derive(Debug, Default)]
struct Node {
    terminal: bool,
    // BTreeMap keeps child order deterministic per build.
    children: BTreeMap<char, Node>,
}

/// An immutable set of patterns indexed for prefix matching.
#[derive(Debug)]
pub struct PrefixSet {
    root: Node,
    len: usize,
}

impl PrefixSet {
    /// Index a finite set of patterns.
    ///
    /// The empty string is rejected: it would be a prefix of every
    /// query and removing it never shortens anything.
    pub fn build<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Node::default();
        let mut len = 0;
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(Error::Config(
                    "empty string is not a valid pattern".into(),
                ));
            }
            let mut node = &mut root;
            for ch in pattern.chars() {
                node = node.children.entry(ch).or_default();
            }
            if !node.terminal {
                node.terminal = true;
                len += 1;
            }
        }
        Ok(Self { root, len })
    }

    /// Number of distinct patterns in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored pattern that is a prefix of `query`, shortest
    /// first, as slices of `query`. Lazy and restartable: each call
    /// walks the trie from the root.
    pub fn prefixes<'a>(&'a self, query: &'a str) -> Prefixes<'a> {
        Prefixes {
            query,
            chars: query.char_indices(),
            node: Some(&self.root),
        }
    }
}

/// Iterator over the patterns matching a query as a prefix.
pub struct Prefixes<'a> {
    query: &'a str,
    chars: std::str::CharIndices<'a>,
    node: Option<&'a Node>,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let node = self.node?;
            let (idx, ch) = match self.chars.next() {
                Some(next) => next,
                None => {
                    self.node = None;
                    return None;
                }
            };
            match node.children.get(&ch) {
                Some(child) => {
                    self.node = Some(child);
                    if child.terminal {
                        return Some(&self.query[..idx + ch.len_utf8()]);
                    }
                }
                None => {
                    self.node = None;
                    return None;
                }
            }
        }
    }
}
