//! Delimiter markup scanner for styled text.
//!
//! This crate turns text like `This is $red$ text.` into plain text plus a
//! list of styled spans, independent of any rendering framework.
//!
//! # Overview
//!
//! Each [`DelimiterRule`] binds a single-grapheme symbol to a style payload.
//! The payload is opaque: it is cloned into the spans the symbol produces and
//! never inspected.
//!
//! - `$text$` - Apply the style bound to `$`
//! - `$a #b# c$` - Nest styles of different symbols
//! - `\$` - Escaped symbol (literal `$`)
//!
//! Delimiters are paired with a stack. A closer only matches the innermost
//! open symbol; a closer for an outer symbol met while another symbol is
//! innermost closes nothing. Unmatched delimiters are stripped without
//! styling anything, so scanning never fails. Only the rule set is
//! validated, see [`RuleError`].
//!
//! # Usage
//!
//! ```
//! use spanmark::{RuleSet, apply_styles};
//!
//! let rules = RuleSet::builder()
//!     .rule("$", "red")
//!     .rule("#", "blue")
//!     .build()
//!     .unwrap();
//!
//! let styled = apply_styles("This is $red$#blue# text.", &rules);
//! assert_eq!(styled.text(), "This is redblue text.");
//!
//! for span in styled.sorted_spans() {
//!     println!("{:?} -> {}", styled.span_text(span), span.style);
//! }
//! ```

pub mod config;
pub mod error;
pub mod ext;
mod grapheme;
pub mod parser;
pub mod rule;
pub mod span;
pub mod styled;

// Re-export main types at crate root
pub use config::{OffsetUnit, ScanOptions};
pub use error::RuleError;
pub use ext::ApplyStyles;
pub use parser::{apply_styles, apply_styles_with, escape, strip};
pub use rule::{DEFAULT_ESCAPE, DelimiterRule, RuleSet, RuleSetBuilder};
pub use span::{Span, Unmatched, UnmatchedKind};
pub use styled::{Segment, SegmentIterator, StyledText};
