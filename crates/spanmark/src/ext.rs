//! Extension trait for applying styles directly to string slices.

use crate::config::ScanOptions;
use crate::parser;
use crate::rule::RuleSet;
use crate::styled::StyledText;

/// Apply delimiter styles to a string.
///
/// # Examples
///
/// ```
/// use spanmark::{ApplyStyles, RuleSet};
///
/// let rules = RuleSet::builder().rule("$", "red").rule("#", "blue").build().unwrap();
/// let styled = "This is $red$ and this is #blue#.".apply_styles(&rules);
/// assert_eq!(styled.text(), "This is red and this is blue.");
/// assert_eq!(styled.spans().len(), 2);
/// ```
pub trait ApplyStyles {
    /// Scan `self` with character offsets.
    fn apply_styles<S: Clone>(&self, rules: &RuleSet<S>) -> StyledText<S>;

    /// Scan `self` with explicit options.
    fn apply_styles_with<S: Clone>(
        &self,
        rules: &RuleSet<S>,
        options: &ScanOptions,
    ) -> StyledText<S>;
}

impl ApplyStyles for str {
    fn apply_styles<S: Clone>(&self, rules: &RuleSet<S>) -> StyledText<S> {
        parser::apply_styles(self, rules)
    }

    fn apply_styles_with<S: Clone>(
        &self,
        rules: &RuleSet<S>,
        options: &ScanOptions,
    ) -> StyledText<S> {
        parser::apply_styles_with(self, rules, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OffsetUnit;

    #[test]
    fn apply_on_owned_string() {
        let rules = RuleSet::builder().rule("*", 1).build().unwrap();
        let text = String::from("a *b* c");
        let styled = text.apply_styles(&rules);
        assert_eq!(styled.text(), "a b c");
        assert_eq!(styled.spans()[0].range(), 2..3);
    }

    #[test]
    fn apply_with_options() {
        let rules = RuleSet::builder().rule("*", 1).build().unwrap();
        let options = ScanOptions::new().with_unit(OffsetUnit::Grapheme);
        let styled = "👍🏽*ok*".apply_styles_with(&rules, &options);
        assert_eq!(styled.spans()[0].range(), 1..3);
    }
}
