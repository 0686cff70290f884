//! spanmark: turn delimiter markup into plain text and styled spans.
//!
//! This package re-exports the [`spanmark`] crate. See its documentation for
//! the scanning rules.
//!
//! ```
//! use spanmark_rs::prelude::*;
//!
//! let rules = RuleSet::builder().rule("$", "red").build().unwrap();
//! let styled = "This is $red$ text.".apply_styles(&rules);
//! assert_eq!(styled.text(), "This is red text.");
//! ```

pub use spanmark::*;

/// The types needed to define rules and scan text.
pub mod prelude {
    pub use spanmark::{
        ApplyStyles, DelimiterRule, OffsetUnit, RuleError, RuleSet, ScanOptions, Span,
        StyledText, apply_styles, apply_styles_with,
    };
}
