//! Prefix dictionary over codepoints.
//!
//! ## How Matching Works
//!
//! The dictionary is a trie: each edge is one codepoint, and a node is marked
//! when the path leading to it spells a complete word.
//!
//! ```text
//! words: 研究, 研究生, 生命
//!
//! (root) ─研─ ( ) ─究─ (*) ─生─ (*)
//!    └──生─ ( ) ─命─ (*)
//! ```
//!
//! Matching from a position walks the text one codepoint at a time and
//! records a span every time it passes a marked node. The walk stops at the
//! first codepoint with no edge, so one call costs at most the length of the
//! longest dictionary word.
//!
//! ```text
//! text:  研 究 生 命 运
//!        ^
//! matches_from(0) = [0..2 研究, 0..3 研究生]   (shortest first)
//! ```
//!
//! Spans come out in increasing length because that is the order the walk
//! discovers them. The enumerator relies on that order for tie-breaking.

use std::collections::HashMap;

use crate::Span;

#[derive(Debug, Default, Clone)]
struct Node {
    children: HashMap<char, Node>,
    is_word: bool,
}

/// The set of known words, stored as a prefix tree.
///
/// Built once, then read-only during segmentation. `Dictionary` is `Sync`, so
/// one instance can serve any number of concurrent segmenters.
///
/// ## Example
///
/// ```rust
/// use mmseg::{Dictionary, Span};
///
/// let dict: Dictionary = ["研究", "研究生", "生命"].into_iter().collect();
/// let text: Vec<char> = "研究生命".chars().collect();
///
/// let matches = dict.matches_from(&text, 0, text.len());
/// assert_eq!(matches, vec![Span::new(0, 2), Span::new(0, 3)]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    root: Node,
    words: usize,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word.
    ///
    /// Returns `true` if the word was not already present. Empty words are
    /// ignored and return `false`: a zero-length match would stall the
    /// segmenter.
    pub fn insert<I>(&mut self, word: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut chars = word.into_iter().peekable();
        if chars.peek().is_none() {
            return false;
        }

        let mut node = &mut self.root;
        for ch in chars {
            node = node.children.entry(ch).or_default();
        }

        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.words += 1;
        true
    }

    /// Whether `word` is a complete dictionary entry.
    ///
    /// Prefixes of longer entries are not words unless inserted themselves.
    #[must_use]
    pub fn contains(&self, word: &[char]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for ch in word {
            match node.children.get(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word
    }

    /// Every dictionary word that is a prefix of `text[start..end]`.
    ///
    /// Returned spans all begin at `start` and are ordered shortest first.
    /// An empty result is the normal "no match" answer.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > text.len()`.
    #[must_use]
    pub fn matches_from(&self, text: &[char], start: usize, end: usize) -> Vec<Span> {
        assert!(start <= end, "match start {start} is past end {end}");

        let mut matches = Vec::new();
        let mut node = &self.root;
        for (pos, ch) in text[start..end].iter().enumerate() {
            match node.children.get(ch) {
                Some(child) => node = child,
                None => break,
            }
            if node.is_word {
                matches.push(Span::new(start, start + pos + 1));
            }
        }
        matches
    }

    /// Number of distinct words.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Whether the dictionary has no words.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of distinct first codepoints across all words.
    #[must_use]
    pub fn root_branches(&self) -> usize {
        self.root.children.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref().chars());
        }
    }
}
