//! Scan options.

use crate::grapheme;

/// Unit in which span offsets are reported.
///
/// Delimiters are always matched per grapheme cluster; the unit only decides
/// how the final-text positions are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OffsetUnit {
    /// UTF-8 bytes. Offsets can slice the output `String` directly.
    Byte,
    /// Unicode scalar values.
    #[default]
    Char,
    /// Extended grapheme clusters.
    Grapheme,
    /// UTF-16 code units, as used by most platform text APIs.
    Utf16,
}

impl OffsetUnit {
    /// Length of `text` in this unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanmark::OffsetUnit;
    ///
    /// assert_eq!(OffsetUnit::Byte.measure("日本"), 6);
    /// assert_eq!(OffsetUnit::Char.measure("日本"), 2);
    /// ```
    pub fn measure(self, text: &str) -> usize {
        grapheme::measure(text, self)
    }
}

/// Options for a single scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Unit used for span and unmatched-delimiter offsets.
    pub unit: OffsetUnit,
}

impl ScanOptions {
    /// Create options with the defaults (character offsets).
    pub fn new() -> Self {
        Self::default()
    }

    /// Report offsets in `unit`.
    pub fn with_unit(mut self, unit: OffsetUnit) -> Self {
        self.unit = unit;
        self
    }
}
