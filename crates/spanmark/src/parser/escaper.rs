//! Escaper for delimiter markup.
//!
//! Splits input text into grapheme units, folding each escape + symbol pair
//! into a single literal unit the matcher never treats as a delimiter.

use std::iter::Peekable;

use unicode_segmentation::Graphemes;

use crate::grapheme;
use crate::rule::RuleSet;

/// A unit produced by the escaper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit<'a> {
    /// An ordinary grapheme. It is a delimiter if it equals a rule's symbol.
    Plain(&'a str),
    /// An escaped delimiter symbol, restored literally in the output.
    Escaped(&'a str),
}

impl<'a> Unit<'a> {
    /// The grapheme this unit emits into the plain text.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Unit::Plain(s) | Unit::Escaped(s) => s,
        }
    }
}

/// Escaper for delimiter markup text.
///
/// Escape pairs are recognised left to right without overlap, so in `\\$`
/// the first backslash stays literal and the second escapes the `$`. An
/// escape before anything other than a delimiter symbol is left untouched.
///
/// # Examples
///
/// ```
/// use spanmark::RuleSet;
/// use spanmark::parser::{Escaper, Unit};
///
/// let rules = RuleSet::builder().rule("$", ()).build().unwrap();
/// let units: Vec<_> = Escaper::new(r"a\$", &rules).collect();
/// assert_eq!(units, vec![Unit::Plain("a"), Unit::Escaped("$")]);
/// ```
pub struct Escaper<'a, 'r, S> {
    graphemes: Peekable<Graphemes<'a>>,
    rules: &'r RuleSet<S>,
}

impl<'a, 'r, S> Escaper<'a, 'r, S> {
    /// Create a new escaper for the given input.
    pub fn new(input: &'a str, rules: &'r RuleSet<S>) -> Self {
        Self {
            graphemes: grapheme::graphemes(input).peekable(),
            rules,
        }
    }
}

impl<'a, S> Iterator for Escaper<'a, '_, S> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.graphemes.next()?;

        if grapheme::is_char(current, self.rules.escape()) {
            if let Some(symbol) = self.graphemes.next_if(|next| self.rules.is_symbol(next)) {
                return Some(Unit::Escaped(symbol));
            }
        }

        Some(Unit::Plain(current))
    }
}

/// Escape every delimiter symbol in `text` so it scans back to itself.
///
/// `apply_styles(&escape(text, &rules), &rules)` returns `text` unchanged
/// with no spans.
///
/// # Examples
///
/// ```
/// use spanmark::RuleSet;
/// use spanmark::parser::escape;
///
/// let rules = RuleSet::builder().rule("$", ()).build().unwrap();
/// assert_eq!(escape("costs $5", &rules), r"costs \$5");
/// ```
pub fn escape<S>(text: &str, rules: &RuleSet<S>) -> String {
    let mut output = String::with_capacity(text.len());
    for g in grapheme::graphemes(text) {
        if rules.is_symbol(g) {
            output.push(rules.escape());
        }
        output.push_str(g);
    }
    output
}

/// Return the plain text of `text`: delimiters stripped, escapes resolved.
///
/// Equivalent to the text of a full scan, without building spans.
pub fn strip<S>(text: &str, rules: &RuleSet<S>) -> String {
    Escaper::new(text, rules)
        .filter_map(|unit| match unit {
            Unit::Plain(g) if rules.is_symbol(g) => None,
            unit => Some(unit.as_str()),
        })
        .collect()
}
