//! Span type for styled regions in the scanned text.

/// A styled region within the scanned text.
///
/// Spans cover the half-open range `[start, end)` of the plain text (with
/// delimiters stripped), counted in the [`OffsetUnit`](crate::OffsetUnit)
/// used for the scan. The style is a clone of the payload bound to the
/// delimiter symbol that produced the span.
#[derive(Clone, Debug, PartialEq)]
pub struct Span<S> {
    /// Start offset (inclusive) in the plain text.
    pub start: usize,
    /// End offset (exclusive) in the plain text.
    pub end: usize,
    /// Style to apply to this region.
    pub style: S,
    /// The delimiter symbol that produced this span.
    pub symbol: String,
}

impl<S> Span<S> {
    /// Create a new span produced by `symbol`.
    pub fn new(start: usize, end: usize, style: S, symbol: impl Into<String>) -> Self {
        Self {
            start,
            end,
            style,
            symbol: symbol.into(),
        }
    }

    /// Returns true if this span covers a zero-length range (`$$`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the length of this span in offset units.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Check if this span contains a given offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this span overlaps with another span.
    pub fn overlaps<T>(&self, other: &Span<T>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if `other` lies entirely within this span.
    pub fn encloses<T>(&self, other: &Span<T>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Replace the style payload, keeping the range.
    pub fn map_style<T>(self, f: impl FnOnce(S) -> T) -> Span<T> {
        Span {
            start: self.start,
            end: self.end,
            style: f(self.style),
            symbol: self.symbol,
        }
    }
}

/// Which side of a delimiter pair failed to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnmatchedKind {
    /// An opener still open when the scan ended.
    Opener,
    /// A closer met while a different symbol was innermost; it closed nothing.
    Closer,
}

/// A delimiter occurrence that produced no span.
///
/// It is stripped from the text like any other delimiter; `offset` is the
/// plain-text position it was removed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unmatched {
    pub symbol: String,
    pub offset: usize,
    pub kind: UnmatchedKind,
}
