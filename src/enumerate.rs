//! Depth-bounded enumeration of candidate chunks.
//!
//! ## The Search Tree
//!
//! From a start position, every dictionary match opens one branch, and a
//! single-codepoint fallback always opens one more. Each branch recurses
//! from its end until `depth` words are placed or the text runs out.
//!
//! ```text
//! dict: 研究 研究生 生命 命运      depth = 2
//!
//! 0 ─┬─ 研究 ─┬─ 生命      → [研究, 生命]
//!    │        └─ 生        → [研究, 生]
//!    ├─ 研究生 ─┬─ 命运    → [研究生, 命运]
//!    │          └─ 命      → [研究生, 命]
//!    └─ 研 ─── 究          → [研, 究]
//! ```
//!
//! Every leaf becomes one [`Chunk`]. Leaves are emitted depth-first in this
//! order (dictionary matches shortest first, then the fallback), and that
//! order is what decides full ties in [`crate::select_best`].
//!
//! ## Cost
//!
//! The tree has at most `(m + 1)^depth` leaves, where `m` is the number of
//! dictionary matches per position. Keep `depth` small; 3 is the classic
//! choice.

use crate::{Chunk, Dictionary, FrequencyTable, Span};

/// Every candidate chunk for `text[start..end]`, up to `depth` words deep.
///
/// Returns an empty vector when `depth == 0` or `start == end`, since no
/// chunk with zero words is ever built. Otherwise at least one chunk is
/// returned, because the single-codepoint fallback always applies.
///
/// ```rust
/// use mmseg::{enumerate_chunks, Dictionary, FrequencyTable, Span};
///
/// let dict: Dictionary = ["ab"].into_iter().collect();
/// let text: Vec<char> = "abc".chars().collect();
/// let chunks = enumerate_chunks(&dict, &FrequencyTable::new(), &text, 0, 3, 1);
///
/// let firsts: Vec<Span> = chunks.iter().map(|c| c.first_word()).collect();
/// assert_eq!(firsts, vec![Span::new(0, 2), Span::new(0, 1)]);
/// ```
///
/// # Panics
///
/// Panics if `start > end` or `end > text.len()`.
#[must_use]
pub fn enumerate_chunks(
    dict: &Dictionary,
    freqs: &FrequencyTable,
    text: &[char],
    start: usize,
    end: usize,
    depth: usize,
) -> Vec<Chunk> {
    assert!(start <= end, "enumeration start {start} is past end {end}");
    assert!(
        end <= text.len(),
        "enumeration end {end} is past text length {}",
        text.len()
    );

    let mut search = Search {
        dict,
        freqs,
        text,
        end,
        path: Vec::with_capacity(depth),
        chunks: Vec::new(),
    };
    if depth > 0 && start < end {
        search.expand(start, depth);
    }
    search.chunks
}

struct Search<'a> {
    dict: &'a Dictionary,
    freqs: &'a FrequencyTable,
    text: &'a [char],
    end: usize,
    path: Vec<Span>,
    chunks: Vec<Chunk>,
}

impl Search<'_> {
    fn expand(&mut self, start: usize, depth: usize) {
        if depth == 0 || start == self.end {
            self.chunks
                .push(Chunk::new(self.path.clone(), self.text, self.freqs));
            return;
        }

        for word in self.dict.matches_from(self.text, start, self.end) {
            self.descend(word, depth);
        }
        self.descend(Span::single(start), depth);
    }

    fn descend(&mut self, word: Span, depth: usize) {
        self.path.push(word);
        self.expand(word.end, depth - 1);
        self.path.pop();
    }
}
