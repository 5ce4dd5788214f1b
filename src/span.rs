//! The Span type: one matched word as a position pair.

/// A half-open range `[start, end)` of codepoint positions into a text.
///
/// A span does not own the text it points into. It is only meaningful
/// together with the slice it was produced from:
///
/// ```rust
/// use mmseg::Span;
///
/// let text: Vec<char> = "研究生命".chars().collect();
/// let span = Span::new(0, 3);
///
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.slice(&text), &['研', '究', '生']);
/// ```
///
/// Positions count codepoints, not bytes. [`crate::MmSeg::segment_str`]
/// converts back to byte offsets at the `&str` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Position of the first codepoint.
    pub start: usize,
    /// Position one past the last codepoint.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// A span covering exactly one codepoint at `start`.
    #[must_use]
    pub fn single(start: usize) -> Self {
        Self::new(start, start + 1)
    }

    /// Number of codepoints covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range`, for indexing.
    #[must_use]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Borrow the covered codepoints out of `text`.
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside `text`.
    #[must_use]
    pub fn slice<'t, T>(&self, text: &'t [T]) -> &'t [T] {
        &text[self.range()]
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_range() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert_eq!(span.range(), 2..5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_single() {
        let span = Span::single(4);
        assert_eq!(span, Span::new(4, 5));
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_slice() {
        let text = ['a', 'b', 'c', 'd'];
        assert_eq!(Span::new(1, 3).slice(&text), &['b', 'c']);
        assert!(Span::new(4, 4).slice(&text).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_inverted_span_panics() {
        let _ = Span::new(3, 2);
    }
}
