//! Single-character frequency counts.

use std::collections::HashMap;
use std::num::NonZeroU32;

/// Observed frequency of individual codepoints.
///
/// Only consulted when scoring one-character words (the "degree of
/// morphemic freedom" rule). Characters without an entry are normal and
/// simply contribute nothing.
///
/// ```rust
/// use std::num::NonZeroU32;
/// use mmseg::FrequencyTable;
///
/// let mut freqs = FrequencyTable::new();
/// freqs.insert('的', NonZeroU32::new(1_000).unwrap());
///
/// assert_eq!(freqs.lookup('的'), Some(1_000));
/// assert_eq!(freqs.lookup('龘'), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<char, NonZeroU32>,
}

impl FrequencyTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the count for `ch`, replacing any earlier count.
    ///
    /// Returns the count that was replaced, if any.
    pub fn insert(&mut self, ch: char, count: NonZeroU32) -> Option<u32> {
        self.counts.insert(ch, count).map(NonZeroU32::get)
    }

    /// The recorded count for `ch`.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<u32> {
        self.counts.get(&ch).copied().map(NonZeroU32::get)
    }

    /// Natural log of the count for `ch`, or `0.0` when absent.
    #[must_use]
    pub(crate) fn log_frequency(&self, ch: char) -> f64 {
        self.lookup(ch).map(|c| f64::from(c).ln()).unwrap_or(0.0)
    }

    /// Number of characters with a count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(char, NonZeroU32)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (char, NonZeroU32)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (ch, count) in iter {
            table.insert(ch, count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_lookup_absent() {
        let freqs = FrequencyTable::new();
        assert!(freqs.is_empty());
        assert_eq!(freqs.lookup('a'), None);
        assert_eq!(freqs.log_frequency('a'), 0.0);
    }

    #[test]
    fn test_last_insert_wins() {
        let mut freqs = FrequencyTable::new();
        assert_eq!(freqs.insert('的', nz(5)), None);
        assert_eq!(freqs.insert('的', nz(9)), Some(5));
        assert_eq!(freqs.lookup('的'), Some(9));
        assert_eq!(freqs.len(), 1);
    }

    #[test]
    fn test_log_frequency() {
        let freqs: FrequencyTable = [('a', nz(1)), ('b', nz(100))].into_iter().collect();
        assert_eq!(freqs.log_frequency('a'), 0.0);
        assert!((freqs.log_frequency('b') - 100f64.ln()).abs() < 1e-12);
    }
}
