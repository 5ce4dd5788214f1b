//! The segmentation driver.
//!
//! ## The Loop
//!
//! ```text
//! pos = 0
//! while pos < len:
//!     chunks = every segmentation of text[pos..] up to `depth` words
//!     best   = max by (total_length, mean_length, neg_variance, degree)
//!     emit best's first word
//!     pos   += that word's length
//! ```
//!
//! Each round commits exactly one word and looks `depth` words ahead to
//! choose it. Every first word is at least one codepoint long, so the loop
//! finishes in at most `len` rounds and the emitted words always
//! concatenate back to the input.

use tracing::{trace, warn};

use crate::{enumerate_chunks, select_best, Chunk, Dictionary, FrequencyTable, Span};

/// Look-ahead used by [`MmSeg::segment`] unless overridden.
pub const DEFAULT_DEPTH: usize = 3;

/// MMSeg word segmenter.
///
/// Owns a read-only [`Dictionary`] and [`FrequencyTable`]. Segmentation takes
/// `&self`, so a single instance can be shared across threads (for example
/// behind an `Arc`) with no locking.
///
/// ## Example
///
/// ```rust
/// use mmseg::{Dictionary, FrequencyTable, MmSeg};
///
/// let dict: Dictionary = ["研究", "研究生", "生命", "命运"].into_iter().collect();
/// let seg = MmSeg::new(dict, FrequencyTable::new());
///
/// assert_eq!(seg.segment_str("研究生命运"), vec!["研究生", "命运"]);
/// ```
#[derive(Debug, Clone)]
pub struct MmSeg {
    dict: Dictionary,
    freqs: FrequencyTable,
    depth: usize,
}

impl MmSeg {
    /// Create a segmenter with the default look-ahead of three words.
    ///
    /// An empty dictionary is accepted but logged: every word will then be a
    /// single codepoint.
    #[must_use]
    pub fn new(dict: Dictionary, freqs: FrequencyTable) -> Self {
        if dict.is_empty() {
            warn!("segmenter built over an empty dictionary; output will be single characters");
        }
        Self {
            dict,
            freqs,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Set the look-ahead depth in words.
    ///
    /// `1` gives plain greedy longest match. `0` disables the dictionary and
    /// splits into single codepoints.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// The configured look-ahead depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The dictionary in use.
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// The frequency table in use.
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    /// Split `text` into words using the configured depth.
    ///
    /// Returned words borrow from `text`.
    #[must_use]
    pub fn segment<'t>(&self, text: &'t [char]) -> Vec<&'t [char]> {
        self.segment_with_depth(text, self.depth)
    }

    /// Split `text` into words with an explicit look-ahead depth.
    #[must_use]
    pub fn segment_with_depth<'t>(&self, text: &'t [char], depth: usize) -> Vec<&'t [char]> {
        self.segment_spans(text, depth)
            .into_iter()
            .map(|span| span.slice(text))
            .collect()
    }

    /// Word boundaries of `text` as codepoint spans.
    ///
    /// The spans are contiguous, non-empty, and cover `text` exactly.
    #[must_use]
    pub fn segment_spans(&self, text: &[char], depth: usize) -> Vec<Span> {
        if depth == 0 {
            return (0..text.len()).map(Span::single).collect();
        }

        let end = text.len();
        let mut words = Vec::new();
        let mut pos = 0;

        while pos < end {
            let chunks = enumerate_chunks(&self.dict, &self.freqs, text, pos, end, depth);
            for chunk in &chunks {
                trace!(pos, chunk = %chunk.display(text), "candidate");
            }

            // enumerate_chunks always yields the fallback path for a
            // non-empty window.
            let word =
                select_best(&chunks).map_or_else(|| Span::single(pos), Chunk::first_word);
            trace!(pos, word = %word, "selected");

            words.push(word);
            pos = word.end;
        }

        words
    }

    /// Split a UTF-8 string into words.
    ///
    /// Convenience wrapper over [`MmSeg::segment_spans`] that works on `char`
    /// codepoints and maps the result back to byte ranges of `text`.
    ///
    /// ```rust
    /// use mmseg::{Dictionary, FrequencyTable, MmSeg};
    ///
    /// let dict: Dictionary = ["北京", "大学"].into_iter().collect();
    /// let seg = MmSeg::new(dict, FrequencyTable::new());
    ///
    /// assert_eq!(seg.segment_str("北京大学生"), vec!["北京", "大学", "生"]);
    /// ```
    #[must_use]
    pub fn segment_str<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let (mut offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        offsets.push(text.len());

        self.segment_spans(&chars, self.depth)
            .into_iter()
            .map(|span| &text[offsets[span.start]..offsets[span.end]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn words(seg: &MmSeg, s: &str, depth: usize) -> Vec<String> {
        let text = chars(s);
        seg.segment_with_depth(&text, depth)
            .into_iter()
            .map(|w| w.iter().collect())
            .collect()
    }

    #[test]
    fn test_reference_example() {
        let dict: Dictionary = ["研究", "研究生", "生命", "命运"].into_iter().collect();
        let seg = MmSeg::new(dict, FrequencyTable::new());
        assert_eq!(words(&seg, "研究生命运", 3), vec!["研究生", "命运"]);
    }

    #[test]
    fn test_longest_match_preferred() {
        let dict: Dictionary = ["AB", "A"].into_iter().collect();
        let seg = MmSeg::new(dict, FrequencyTable::new());
        assert_eq!(words(&seg, "AB", 3), vec!["AB"]);
    }

    #[test]
    fn test_empty_input() {
        let seg = MmSeg::new(Dictionary::new(), FrequencyTable::new());
        for depth in 0..4 {
            assert!(seg.segment_with_depth(&[], depth).is_empty());
        }
        assert!(seg.segment_str("").is_empty());
    }

    #[test]
    fn test_zero_depth_is_single_chars() {
        let dict: Dictionary = ["研究"].into_iter().collect();
        let seg = MmSeg::new(dict, FrequencyTable::new()).with_depth(0);
        assert_eq!(seg.segment_str("研究"), vec!["研", "究"]);
    }

    #[test]
    fn test_depth_builder() {
        let seg = MmSeg::new(Dictionary::new(), FrequencyTable::new());
        assert_eq!(seg.depth(), DEFAULT_DEPTH);
        assert_eq!(seg.with_depth(5).depth(), 5);
    }

    #[test]
    fn test_segment_str_maps_byte_offsets() {
        let dict: Dictionary = ["世界", "hello"].into_iter().collect();
        let seg = MmSeg::new(dict, FrequencyTable::new());
        assert_eq!(seg.segment_str("hello世界!"), vec!["hello", "世界", "!"]);
    }

    #[test]
    fn test_degree_picks_free_standing_char() {
        // 主 | 要是 vs 主要 | 是: rules 1-3 tie (2+1 vs 1+2 within "主要是"),
        // and 是 standing alone is far more common than 主.
        let dict: Dictionary = ["主要", "要是"].into_iter().collect();
        let freqs: FrequencyTable = [
            ('主', NonZeroU32::new(10).unwrap()),
            ('是', NonZeroU32::new(10_000).unwrap()),
        ]
        .into_iter()
        .collect();
        let seg = MmSeg::new(dict, freqs);
        assert_eq!(words(&seg, "主要是", 3), vec!["主要", "是"]);
    }
}
