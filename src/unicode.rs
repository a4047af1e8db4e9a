//! Grapheme segmentation and display width.
//!
//! A code's length is counted in grapheme clusters, so a composed
//! character occupies exactly one cell no matter how many code points it
//! is made of.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Iterate over extended grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Number of grapheme clusters in a string.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if s.is_ascii() {
        return s.len();
    }
    s.graphemes(true).count()
}

/// The grapheme cluster at `index`, if any.
#[must_use]
pub fn grapheme_at(s: &str, index: usize) -> Option<&str> {
    if s.is_ascii() {
        return s.get(index..=index);
    }
    s.graphemes(true).nth(index)
}

/// Prefix of `s` holding at most `max` grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max: usize) -> &str {
    match s.grapheme_indices(true).nth(max) {
        Some((byte_offset, _)) => &s[..byte_offset],
        None => s,
    }
}

/// `s` without its final grapheme cluster.
#[must_use]
pub fn without_last_grapheme(s: &str) -> &str {
    match s.grapheme_indices(true).next_back() {
        Some((byte_offset, _)) => &s[..byte_offset],
        None => s,
    }
}

/// Display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Display width of a character in terminal columns.
///
/// Control characters have width 0.
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    UnicodeWidthChar::width(c).unwrap_or(0)
}
