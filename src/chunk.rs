//! Candidate chunks and the four-rule ranking.
//!
//! ## What a Chunk Is
//!
//! A chunk is one way to cut the next few words off the front of the
//! remaining text. With a look-ahead of three words:
//!
//! ```text
//! text: 研究生命运
//!
//! 研究 | 生命 | 运      (5 chars, 3 words)
//! 研究 | 生   | 命运    (5 chars, 3 words)
//! 研究生 | 命运         (5 chars, 2 words)
//! 研究生 | 命 | 运      (5 chars, 3 words)
//! ...
//! ```
//!
//! Only the first word of the winning chunk is kept. The rest of the chunk
//! exists to judge whether that first word leaves a sensible continuation.
//!
//! ## The Four Rules
//!
//! Chunks are ranked by four statistics, compared lexicographically, larger
//! is better for each:
//!
//! | Rule | Statistic | Prefers |
//! |------|-----------|---------|
//! | 1 | `total_length` | covering more text |
//! | 2 | `mean_length` | fewer, longer words |
//! | 3 | `neg_variance` | words of even length |
//! | 4 | `degree` | single characters that often stand alone |
//!
//! For the example above rules 1 and 2 settle it: `研究生 | 命运` covers five
//! characters in two words, a mean of 2.5 against 1.67 for the others.
//!
//! The variance is stored negated so that "larger is better" holds for all
//! four numbers and the comparison stays a plain tuple ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::{FrequencyTable, Span};

/// A scored candidate segmentation of a look-ahead window.
///
/// Spans index into the text the chunk was built from and are only
/// meaningful alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    words: Vec<Span>,
    total_length: usize,
    mean_length: f64,
    neg_variance: f64,
    degree: f64,
}

impl Chunk {
    /// Score a sequence of contiguous word spans.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty, or if a one-codepoint span lies outside
    /// `text`.
    #[must_use]
    pub fn new(words: Vec<Span>, text: &[char], freqs: &FrequencyTable) -> Self {
        assert!(!words.is_empty(), "a chunk must contain at least one word");
        debug_assert!(
            words.windows(2).all(|w| w[0].end == w[1].start),
            "chunk words must be contiguous"
        );

        let n = words.len();
        let total_length: usize = words.iter().map(Span::len).sum();
        let sum_squares: usize = words.iter().map(|w| w.len() * w.len()).sum();

        let mean_length = total_length as f64 / n as f64;

        // n²·var = n·Σl² − (Σl)², kept integral so equal length multisets
        // always tie exactly regardless of word order.
        let spread = n * sum_squares - total_length * total_length;
        let neg_variance = if spread == 0 {
            0.0
        } else {
            -(spread as f64) / (n * n) as f64
        };

        let degree = words
            .iter()
            .filter(|w| w.len() == 1)
            .fold(0.0, |acc, w| acc + freqs.log_frequency(text[w.start]));

        Self {
            words,
            total_length,
            mean_length,
            neg_variance,
            degree,
        }
    }

    /// The word spans, in text order.
    #[must_use]
    pub fn words(&self) -> &[Span] {
        &self.words
    }

    /// The word this chunk commits to if it wins.
    #[must_use]
    pub fn first_word(&self) -> Span {
        self.words[0]
    }

    /// Rule 1: codepoints covered.
    #[must_use]
    pub const fn total_length(&self) -> usize {
        self.total_length
    }

    /// Rule 2: average word length.
    #[must_use]
    pub const fn mean_length(&self) -> f64 {
        self.mean_length
    }

    /// Rule 3: negated population variance of word lengths.
    #[must_use]
    pub const fn neg_variance(&self) -> f64 {
        self.neg_variance
    }

    /// Rule 4: sum of `ln(frequency)` over one-codepoint words.
    #[must_use]
    pub const fn degree(&self) -> f64 {
        self.degree
    }

    /// Compare two chunks by the four rules, in order.
    ///
    /// `Greater` means `self` is the better segmentation.
    #[must_use]
    pub fn score_cmp(&self, other: &Self) -> Ordering {
        self.total_length
            .cmp(&other.total_length)
            .then_with(|| cmp_f64(self.mean_length, other.mean_length))
            .then_with(|| cmp_f64(self.neg_variance, other.neg_variance))
            .then_with(|| cmp_f64(self.degree, other.degree))
    }

    /// Render the chunk's words and statistics against its source text.
    #[must_use]
    pub fn display<'a>(&'a self, text: &'a [char]) -> ChunkDisplay<'a> {
        ChunkDisplay { chunk: self, text }
    }
}

// Statistics are never NaN: counts are positive and word_count >= 1.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Pick the winning chunk.
///
/// On a full tie across all four rules the earliest chunk wins, so the
/// result depends only on enumeration order.
///
/// ```rust
/// use mmseg::{select_best, Chunk, FrequencyTable, Span};
///
/// let text: Vec<char> = "ab".chars().collect();
/// let freqs = FrequencyTable::new();
/// let chunks = vec![
///     Chunk::new(vec![Span::new(0, 1), Span::new(1, 2)], &text, &freqs),
///     Chunk::new(vec![Span::new(0, 2)], &text, &freqs),
/// ];
///
/// assert_eq!(select_best(&chunks).unwrap().first_word(), Span::new(0, 2));
/// ```
#[must_use]
pub fn select_best(chunks: &[Chunk]) -> Option<&Chunk> {
    chunks.iter().reduce(|best, chunk| {
        if chunk.score_cmp(best).is_gt() {
            chunk
        } else {
            best
        }
    })
}

/// Display adapter returned by [`Chunk::display`].
///
/// Formats as `w1 w2 w3 (length mean variance degree)`.
#[derive(Debug)]
pub struct ChunkDisplay<'a> {
    chunk: &'a Chunk,
    text: &'a [char],
}

impl fmt::Display for ChunkDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.chunk.words {
            let s: String = word.slice(self.text).iter().collect();
            write!(f, "{s} ")?;
        }
        write!(
            f,
            "({} {:.6} {:.6} {:.6})",
            self.chunk.total_length,
            self.chunk.mean_length,
            self.chunk.neg_variance,
            self.chunk.degree
        )
    }
}
