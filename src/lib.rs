//! # mmseg
//!
//! Dictionary-driven word segmentation for text without spaces.
//!
//! ## The Problem
//!
//! Chinese (and Japanese, Thai, ...) is written without delimiters between
//! words. A search indexer or tokenizer still needs word boundaries, and the
//! obvious approach, greedy longest dictionary match, goes wrong whenever two
//! dictionary words overlap:
//!
//! ```text
//! Dictionary: 研究, 研究生, 生命, 命运
//! Text:       研究生命运   ("postgraduates' fate" / "study life's fate")
//!
//! Greedy:  研究生 | 命运      (happens to be right)
//! Text:    研究生命起源
//! Greedy:  研究生 | 命 | 起源  (wrong: should be 研究 | 生命 | 起源)
//! ```
//!
//! ## MMSeg
//!
//! MMSeg looks a few words ahead. At each position it enumerates every way to
//! place the next `depth` words (a "chunk"), ranks the chunks with four
//! rules, and commits only the first word of the winner:
//!
//! 1. **Maximum matching**: the chunk covering the most characters.
//! 2. **Largest average word length**: fewer, longer words.
//! 3. **Smallest variance of word lengths**: evenly sized words.
//! 4. **Largest sum of degree of morphemic freedom**: single-character
//!    words that commonly occur alone, scored as `ln(frequency)`.
//!
//! Each rule only breaks ties left by the previous ones. Remaining full ties
//! go to the chunk enumerated first, which makes the output deterministic.
//!
//! ## Quick Start
//!
//! ```rust
//! use mmseg::{Dictionary, FrequencyTable, MmSeg};
//!
//! let dict: Dictionary = ["研究", "研究生", "生命", "命运", "起源"]
//!     .into_iter()
//!     .collect();
//! let seg = MmSeg::new(dict, FrequencyTable::new());
//!
//! assert_eq!(seg.segment_str("研究生命起源"), vec!["研究", "生命", "起源"]);
//! ```
//!
//! Working on `char` slices directly avoids the UTF-8 round trip:
//!
//! ```rust
//! # use mmseg::{Dictionary, FrequencyTable, MmSeg};
//! # let seg = MmSeg::new(["命运"].into_iter().collect(), FrequencyTable::new());
//! let text: Vec<char> = "命运".chars().collect();
//! let words: Vec<&[char]> = seg.segment(&text);
//! assert_eq!(words, vec![&text[..]]);
//! ```
//!
//! ## Loading Dictionaries
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mmseg::MmSeg;
//!
//! let seg = MmSeg::load("words.dic", Some(Path::new("chars.dic")))?;
//! # Ok::<(), mmseg::Error>(())
//! ```
//!
//! See [`Dictionary::from_reader`] and [`FrequencyTable::from_reader`] for
//! the file formats.
//!
//! ## Performance Considerations
//!
//! | Depth | Behaviour | Cost per word |
//! |-------|-----------|---------------|
//! | 0 | Single characters | O(1) |
//! | 1 | Greedy longest match | O(L) |
//! | 3 | Classic MMSeg | O((m+1)³ · L) |
//!
//! Where L is the longest dictionary word and m the number of dictionary
//! matches at a position. The search is exponential in depth; 3 is the
//! sweet spot.

mod chunk;
mod enumerate;
mod error;
mod freq;
mod load;
mod segmenter;
mod span;
mod trie;

pub use chunk::{select_best, Chunk, ChunkDisplay};
pub use enumerate::enumerate_chunks;
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use segmenter::{MmSeg, DEFAULT_DEPTH};
pub use span::Span;
pub use trie::Dictionary;
