//! Delimiter rules and the validated rule set.

use std::collections::HashMap;

use crate::error::{Result, RuleError};
use crate::grapheme;

/// Escape character used when none is configured.
pub const DEFAULT_ESCAPE: char = '\\';

/// A delimiter symbol bound to a style payload.
///
/// The style is opaque: it is cloned into every span the symbol produces and
/// never inspected.
#[derive(Clone, Debug, PartialEq)]
pub struct DelimiterRule<S> {
    symbol: String,
    style: S,
}

impl<S> DelimiterRule<S> {
    /// Create a rule. The symbol is validated when the rule joins a [`RuleSet`].
    pub fn new(symbol: impl Into<String>, style: S) -> Self {
        Self {
            symbol: symbol.into(),
            style,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn into_parts(self) -> (String, S) {
        (self.symbol, self.style)
    }
}

impl<S> From<(&str, S)> for DelimiterRule<S> {
    fn from((symbol, style): (&str, S)) -> Self {
        Self::new(symbol, style)
    }
}

impl<S> From<(char, S)> for DelimiterRule<S> {
    fn from((symbol, style): (char, S)) -> Self {
        Self::new(symbol, style)
    }
}

/// An ordered, validated set of delimiter rules.
///
/// Every symbol is a single grapheme cluster, distinct from the other symbols
/// and from the escape character.
///
/// # Examples
///
/// ```
/// use spanmark::{RuleError, RuleSet};
///
/// let rules = RuleSet::builder().rule("$", "red").rule("#", "blue").build().unwrap();
/// assert_eq!(rules.len(), 2);
///
/// let err = RuleSet::builder().rule("$", "red").rule("$", "blue").build().unwrap_err();
/// assert_eq!(err, RuleError::DuplicateSymbol("$".into()));
/// ```
#[derive(Clone, Debug)]
pub struct RuleSet<S> {
    rules: Vec<DelimiterRule<S>>,
    /// Symbol to position in `rules`.
    index: HashMap<String, usize>,
    escape: char,
}

impl<S> RuleSet<S> {
    /// Validate `rules` with the default escape character.
    pub fn new(rules: impl IntoIterator<Item = DelimiterRule<S>>) -> Result<Self> {
        Self::builder().rules(rules).build()
    }

    /// Validate rules given as `(symbol, style)` pairs.
    pub fn try_from_iter<I, R>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<DelimiterRule<S>>,
    {
        Self::new(iter.into_iter().map(Into::into))
    }

    pub fn builder() -> RuleSetBuilder<S> {
        RuleSetBuilder::new()
    }

    /// A rule set with no delimiters. Scanning with it returns the input
    /// unchanged.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
            escape: DEFAULT_ESCAPE,
        }
    }

    /// The escape character that marks a following symbol as literal.
    pub fn escape(&self) -> char {
        self.escape
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DelimiterRule<S>> {
        self.rules.iter()
    }

    /// Get a rule by position.
    pub fn get(&self, index: usize) -> Option<&DelimiterRule<S>> {
        self.rules.get(index)
    }

    /// Position of the rule whose symbol is `grapheme`, if any.
    pub fn position(&self, grapheme: &str) -> Option<usize> {
        self.index.get(grapheme).copied()
    }

    /// The rule bound to `symbol`, if any.
    pub fn rule_for(&self, symbol: &str) -> Option<&DelimiterRule<S>> {
        self.position(symbol).map(|idx| &self.rules[idx])
    }

    /// Returns true if `grapheme` is one of the delimiter symbols.
    pub fn is_symbol(&self, grapheme: &str) -> bool {
        self.index.contains_key(grapheme)
    }
}

impl<S> Default for RuleSet<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> TryFrom<Vec<DelimiterRule<S>>> for RuleSet<S> {
    type Error = RuleError;

    fn try_from(rules: Vec<DelimiterRule<S>>) -> Result<Self> {
        Self::new(rules)
    }
}

impl<'a, S> IntoIterator for &'a RuleSet<S> {
    type Item = &'a DelimiterRule<S>;
    type IntoIter = std::slice::Iter<'a, DelimiterRule<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Builder for [`RuleSet`].
#[derive(Clone, Debug)]
pub struct RuleSetBuilder<S> {
    rules: Vec<DelimiterRule<S>>,
    escape: char,
}

impl<S> RuleSetBuilder<S> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            escape: DEFAULT_ESCAPE,
        }
    }

    /// Add a rule binding `symbol` to `style`.
    pub fn rule(mut self, symbol: impl Into<String>, style: S) -> Self {
        self.rules.push(DelimiterRule::new(symbol, style));
        self
    }

    /// Add several rules.
    pub fn rules(mut self, rules: impl IntoIterator<Item = DelimiterRule<S>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Use `escape` instead of a backslash to mark literal symbols.
    pub fn escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Validate the rules and build the set.
    pub fn build(self) -> Result<RuleSet<S>> {
        let mut index = HashMap::with_capacity(self.rules.len());

        for (position, rule) in self.rules.iter().enumerate() {
            validate_symbol(&rule.symbol, self.escape)?;
            if index.insert(rule.symbol.clone(), position).is_some() {
                return Err(RuleError::DuplicateSymbol(rule.symbol.clone()));
            }
        }

        log::debug!(
            "built rule set: {} symbols, escape {:?}",
            self.rules.len(),
            self.escape
        );

        Ok(RuleSet {
            rules: self.rules,
            index,
            escape: self.escape,
        })
    }
}

impl<S> Default for RuleSetBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_symbol(symbol: &str, escape: char) -> Result<()> {
    if symbol.is_empty() {
        return Err(RuleError::EmptySymbol);
    }
    if grapheme::grapheme_count(symbol) > 1 {
        return Err(RuleError::MultiGraphemeSymbol(symbol.to_string()));
    }
    if grapheme::is_char(symbol, escape) {
        return Err(RuleError::EscapeSymbol(symbol.to_string()));
    }
    Ok(())
}
