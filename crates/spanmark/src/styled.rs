//! StyledText result type.
//!
//! This is the result of scanning delimiter markup.

use crate::config::OffsetUnit;
use crate::grapheme;
use crate::span::{Span, Unmatched};

/// The result of applying delimiter styles.
///
/// Contains the plain text (delimiters stripped, escaped symbols restored) and
/// the spans that define styled regions, in the order their closers appeared.
///
/// # Examples
///
/// ```
/// use spanmark::{RuleSet, apply_styles};
///
/// let rules = RuleSet::builder().rule("$", "red").build().unwrap();
/// let styled = apply_styles("This is $red$ text.", &rules);
/// assert_eq!(styled.text(), "This is red text.");
/// assert_eq!(styled.span_text(&styled.spans()[0]), "red");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText<S> {
    /// Plain text with all delimiters stripped.
    text: String,
    /// Style spans referencing positions in `text`.
    spans: Vec<Span<S>>,
    /// Unit the span offsets are counted in.
    unit: OffsetUnit,
    /// Delimiters that produced no span.
    unmatched: Vec<Unmatched>,
}

impl<S> StyledText<S> {
    /// Create a new StyledText with the given text and spans.
    pub fn new(text: String, spans: Vec<Span<S>>, unit: OffsetUnit) -> Self {
        Self {
            text,
            spans,
            unit,
            unmatched: Vec::new(),
        }
    }

    /// Create a StyledText from plain text (no spans).
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text.into(), Vec::new(), OffsetUnit::default())
    }

    pub(crate) fn with_unmatched(mut self, unmatched: Vec<Unmatched>) -> Self {
        self.unmatched = unmatched;
        self
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all spans, in closing order.
    pub fn spans(&self) -> &[Span<S>] {
        &self.spans
    }

    /// The unit span offsets are counted in.
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Delimiters that were stripped without producing a span, by offset.
    pub fn unmatched(&self) -> &[Unmatched] {
        &self.unmatched
    }

    /// Returns true if there are no spans (plain text only).
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get the length of the text in the offset unit.
    pub fn len(&self) -> usize {
        self.unit.measure(&self.text)
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into the plain text and the spans.
    pub fn into_parts(self) -> (String, Vec<Span<S>>) {
        (self.text, self.spans)
    }

    /// Spans in document order: by `start`, then outermost (largest `end`)
    /// first. Spans with equal ranges keep their closing order.
    pub fn sorted_spans(&self) -> Vec<&Span<S>> {
        let mut spans: Vec<_> = self.spans.iter().collect();
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        spans
    }

    /// The slice of plain text covered by `span`.
    pub fn span_text<T>(&self, span: &Span<T>) -> &str {
        self.slice(span.start, span.end)
    }

    /// The slice of plain text between two offsets in the offset unit.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start = grapheme::byte_index(&self.text, start, self.unit);
        let end = grapheme::byte_index(&self.text, end, self.unit).max(start);
        &self.text[start..end]
    }

    /// Styles of every span covering `offset`, outermost first.
    pub fn styles_at(&self, offset: usize) -> Vec<&S> {
        self.sorted_spans()
            .into_iter()
            .filter(|span| span.contains(offset))
            .map(|span| &span.style)
            .collect()
    }

    /// Get all spans that contain a specific offset.
    pub fn spans_at(&self, offset: usize) -> Vec<&Span<S>> {
        self.spans.iter().filter(|s| s.contains(offset)).collect()
    }

    /// Iterate over runs of text that share the same set of styles.
    ///
    /// Unstyled runs are included with no styles; zero-length spans never
    /// produce a run.
    pub fn segments(&self) -> SegmentIterator<'_, S> {
        SegmentIterator::new(self)
    }

    /// Replace every span's style payload.
    pub fn map_styles<T>(self, mut f: impl FnMut(S) -> T) -> StyledText<T> {
        StyledText {
            text: self.text,
            spans: self.spans.into_iter().map(|s| s.map_style(&mut f)).collect(),
            unit: self.unit,
            unmatched: self.unmatched,
        }
    }
}

/// A run of plain text with a constant set of active styles.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<'a, S> {
    pub text: &'a str,
    /// Start offset in the offset unit.
    pub start: usize,
    /// End offset in the offset unit.
    pub end: usize,
    /// Active styles, outermost first.
    pub styles: Vec<&'a S>,
}

/// Iterator over styled segments in StyledText.
pub struct SegmentIterator<'a, S> {
    styled: &'a StyledText<S>,
    /// Spans in document order.
    spans: Vec<&'a Span<S>>,
    /// Sorted, deduplicated segment boundaries.
    boundaries: Vec<usize>,
    pos: usize,
}

impl<'a, S> SegmentIterator<'a, S> {
    fn new(styled: &'a StyledText<S>) -> Self {
        let len = styled.len();
        let spans = styled.sorted_spans();

        let mut boundaries = vec![0, len];
        for span in &spans {
            boundaries.push(span.start.min(len));
            boundaries.push(span.end.min(len));
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        Self {
            styled,
            spans,
            boundaries,
            pos: 0,
        }
    }
}

impl<'a, S> Iterator for SegmentIterator<'a, S> {
    type Item = Segment<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.boundaries.get(self.pos)?;
        let end = *self.boundaries.get(self.pos + 1)?;
        self.pos += 1;

        let styles = self
            .spans
            .iter()
            .filter(|span| span.start <= start && end <= span.end)
            .map(|span| &span.style)
            .collect();

        Some(Segment {
            text: self.styled.slice(start, end),
            start,
            end,
            styles,
        })
    }
}
