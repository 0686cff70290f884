//! Parser for delimiter markup.
//!
//! This module contains the escaper and the span matcher.

mod escaper;
mod matcher;

pub use escaper::{Escaper, Unit, escape, strip};
pub use matcher::{apply_styles, apply_styles_with};
