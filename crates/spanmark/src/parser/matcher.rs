//! Span matcher for delimiter markup.
//!
//! Consumes the escaper's units in one pass, pairing delimiters with a stack
//! and writing the plain text as it goes, so every offset is already in
//! final-text coordinates.

use smallvec::SmallVec;

use crate::config::{OffsetUnit, ScanOptions};
use crate::grapheme;
use crate::rule::RuleSet;
use crate::span::{Span, Unmatched, UnmatchedKind};
use crate::styled::StyledText;

use super::escaper::{Escaper, Unit};

/// Applies delimiter styles to `input`, reporting offsets in characters.
///
/// This is the main entry point for scanning markup text.
///
/// # Examples
///
/// ```
/// use spanmark::RuleSet;
/// use spanmark::parser::apply_styles;
///
/// let rules = RuleSet::builder().rule("$", "red").build().unwrap();
/// let styled = apply_styles("This is $red$ text.", &rules);
/// assert_eq!(styled.text(), "This is red text.");
/// assert_eq!(styled.spans()[0].range(), 8..11);
/// ```
pub fn apply_styles<S: Clone>(input: &str, rules: &RuleSet<S>) -> StyledText<S> {
    apply_styles_with(input, rules, &ScanOptions::default())
}

/// Applies delimiter styles to `input` with explicit scan options.
pub fn apply_styles_with<S: Clone>(
    input: &str,
    rules: &RuleSet<S>,
    options: &ScanOptions,
) -> StyledText<S> {
    let mut matcher = Matcher::new(rules, options.unit, input.len());
    for unit in Escaper::new(input, rules) {
        matcher.process_unit(unit);
    }
    matcher.finish()
}

/// An opener waiting for its closer.
#[derive(Clone, Copy, Debug)]
struct OpenDelimiter {
    /// Position of the rule in the rule set.
    rule: usize,
    /// Output offset where the styled region starts.
    start: usize,
}

/// The matcher state for one scan.
struct Matcher<'r, S> {
    rules: &'r RuleSet<S>,
    unit: OffsetUnit,
    /// Unit `offset` is counted in while scanning. Grapheme clusters can merge
    /// once a delimiter between them is stripped, so those scans count bytes
    /// and convert in `finish`.
    counting: OffsetUnit,
    /// Unclosed openers, innermost last. A rule appears at most once.
    open_stack: SmallVec<[OpenDelimiter; 8]>,
    /// Output plain text (delimiters stripped, escapes resolved).
    output: String,
    /// Length of `output` in `counting`.
    offset: usize,
    /// Spans in closing order.
    spans: Vec<Span<S>>,
    unmatched: Vec<Unmatched>,
}

impl<'r, S: Clone> Matcher<'r, S> {
    fn new(rules: &'r RuleSet<S>, unit: OffsetUnit, capacity: usize) -> Self {
        Self {
            rules,
            unit,
            counting: match unit {
                OffsetUnit::Grapheme => OffsetUnit::Byte,
                unit => unit,
            },
            open_stack: SmallVec::new(),
            output: String::with_capacity(capacity),
            offset: 0,
            spans: Vec::new(),
            unmatched: Vec::new(),
        }
    }

    /// Process a single unit.
    fn process_unit(&mut self, unit: Unit<'_>) {
        match unit {
            Unit::Escaped(symbol) => self.push_text(symbol),
            Unit::Plain(g) => match self.rules.position(g) {
                Some(rule) => self.process_delimiter(rule),
                None => self.push_text(g),
            },
        }
    }

    fn push_text(&mut self, grapheme: &str) {
        self.output.push_str(grapheme);
        self.offset += grapheme::unit_width(grapheme, self.counting);
    }

    /// Process an active delimiter. It is never written to the output.
    fn process_delimiter(&mut self, rule: usize) {
        match self.open_stack.last().copied() {
            Some(top) if top.rule == rule => {
                self.open_stack.pop();
                self.create_span(rule, top.start);
            }
            _ if self.is_open(rule) => {
                log::trace!(
                    "closer {:?} at {} ignored: {:?} is still open",
                    self.symbol(rule),
                    self.offset,
                    self.open_stack.last().map(|open| self.symbol(open.rule)),
                );
                self.record_unmatched(rule, self.offset, UnmatchedKind::Closer);
            }
            _ => {
                self.open_stack.push(OpenDelimiter {
                    rule,
                    start: self.offset,
                });
            }
        }
    }

    fn is_open(&self, rule: usize) -> bool {
        self.open_stack.iter().any(|open| open.rule == rule)
    }

    fn symbol(&self, rule: usize) -> &str {
        self.rules.get(rule).map(|r| r.symbol()).unwrap_or_default()
    }

    fn create_span(&mut self, rule: usize, start: usize) {
        if let Some(rule) = self.rules.get(rule) {
            self.spans.push(Span::new(
                start,
                self.offset,
                rule.style().clone(),
                rule.symbol(),
            ));
        }
    }

    fn record_unmatched(&mut self, rule: usize, offset: usize, kind: UnmatchedKind) {
        let symbol = self.symbol(rule).to_string();
        self.unmatched.push(Unmatched {
            symbol,
            offset,
            kind,
        });
    }

    /// Drop remaining openers and build the result.
    fn finish(mut self) -> StyledText<S> {
        let open_stack = std::mem::take(&mut self.open_stack);
        for open in open_stack {
            log::trace!(
                "opener {:?} at {} never closed",
                self.symbol(open.rule),
                open.start
            );
            self.record_unmatched(open.rule, open.start, UnmatchedKind::Opener);
        }
        self.unmatched.sort_by_key(|u| u.offset);

        if self.counting != self.unit {
            self.convert_to_grapheme_offsets();
        }

        log::debug!(
            "scanned {} bytes of output: {} spans, {} unmatched delimiters",
            self.output.len(),
            self.spans.len(),
            self.unmatched.len()
        );

        StyledText::new(self.output, self.spans, self.unit).with_unmatched(self.unmatched)
    }

    /// Convert byte offsets into grapheme offsets of the finished output.
    fn convert_to_grapheme_offsets(&mut self) {
        let starts = grapheme::grapheme_starts(&self.output);
        for span in &mut self.spans {
            span.start = grapheme::grapheme_offset(&starts, span.start);
            span.end = grapheme::grapheme_offset(&starts, span.end);
        }
        for unmatched in &mut self.unmatched {
            unmatched.offset = grapheme::grapheme_offset(&starts, unmatched.offset);
        }
    }
}
