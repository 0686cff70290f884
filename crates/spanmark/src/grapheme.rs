use unicode_segmentation::UnicodeSegmentation;

use crate::config::OffsetUnit;

pub(crate) fn graphemes(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

pub(crate) fn grapheme_count(text: &str) -> usize {
    graphemes(text).count()
}

/// Returns true if `text` is exactly the single character `c`.
pub(crate) fn is_char(text: &str, c: char) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

/// Width of one grapheme cluster in the given unit.
pub(crate) fn unit_width(grapheme: &str, unit: OffsetUnit) -> usize {
    match unit {
        OffsetUnit::Byte => grapheme.len(),
        OffsetUnit::Char => grapheme.chars().count(),
        OffsetUnit::Grapheme => 1,
        OffsetUnit::Utf16 => grapheme.encode_utf16().count(),
    }
}

/// Length of `text` in the given unit.
pub(crate) fn measure(text: &str, unit: OffsetUnit) -> usize {
    match unit {
        OffsetUnit::Byte => text.len(),
        OffsetUnit::Char => text.chars().count(),
        OffsetUnit::Grapheme => grapheme_count(text),
        OffsetUnit::Utf16 => text.encode_utf16().count(),
    }
}

/// Byte index where each grapheme cluster of `text` starts.
pub(crate) fn grapheme_starts(text: &str) -> Vec<usize> {
    UnicodeSegmentation::grapheme_indices(text, true)
        .map(|(idx, _)| idx)
        .collect()
}

/// Converts a byte index to a grapheme offset, given the cluster starts of the
/// text. A byte index inside a cluster rounds up to the next cluster.
pub(crate) fn grapheme_offset(starts: &[usize], byte: usize) -> usize {
    starts.partition_point(|&start| start < byte)
}

/// Converts an offset in `unit` to a byte index into `text`.
///
/// Offsets past the end clamp to `text.len()`. An offset that falls inside a
/// character rounds up to the next char boundary.
pub(crate) fn byte_index(text: &str, offset: usize, unit: OffsetUnit) -> usize {
    match unit {
        OffsetUnit::Byte => {
            let mut idx = offset.min(text.len());
            while !text.is_char_boundary(idx) {
                idx += 1;
            }
            idx
        }
        OffsetUnit::Char => text
            .char_indices()
            .nth(offset)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len()),
        OffsetUnit::Grapheme => UnicodeSegmentation::grapheme_indices(text, true)
            .nth(offset)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len()),
        OffsetUnit::Utf16 => {
            let mut units = 0;
            for (idx, c) in text.char_indices() {
                if units >= offset {
                    return idx;
                }
                units += c.len_utf16();
            }
            text.len()
        }
    }
}
