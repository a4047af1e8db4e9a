//! Terminal cell type representing a single character position.
//!
//! The widget draws into a grid of cells. Each cell holds one character
//! (or grapheme cluster) along with its colors and attributes. Wide
//! characters occupy two columns; the second column holds a
//! [`CellContent::Continuation`] marker.
//!
//! # Examples
//!
//! ```
//! use pincode_tui::{Cell, Rgba, Style};
//!
//! let cell = Cell::new('7', Style::fg(Rgba::GRAY));
//! assert_eq!(cell.display_width(), 1);
//!
//! let accented = Cell::from_grapheme("e\u{0301}", Style::NONE);
//! assert_eq!(accented.content.to_string(), "e\u{0301}");
//! ```

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use std::fmt;
use std::sync::Arc;

/// Content of a terminal cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CellContent {
    /// Single-codepoint character.
    Char(char),
    /// Multi-codepoint grapheme cluster.
    Grapheme(Arc<str>),
    /// Empty/cleared cell.
    #[default]
    Empty,
    /// Continuation of a wide character from the previous cell.
    Continuation,
}

impl CellContent {
    /// Get the display width of this content.
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Char(c) => crate::unicode::display_width_char(*c),
            Self::Grapheme(s) => crate::unicode::display_width(s),
            Self::Empty => 1,
            Self::Continuation => 0,
        }
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        matches!(self, Self::Continuation)
    }

    /// Check if this is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Get the character if this is a single char.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Grapheme(s) => f.write_str(s),
            Self::Empty => f.write_str(" "),
            Self::Continuation => Ok(()),
        }
    }
}

/// A single terminal cell with content and styling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// The character or grapheme content.
    pub content: CellContent,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Cell {
    /// Create a new cell with a single character.
    #[must_use]
    pub fn new(ch: char, style: Style) -> Self {
        Self {
            content: CellContent::Char(ch),
            fg: style.fg.unwrap_or(Rgba::WHITE),
            bg: style.bg.unwrap_or(Rgba::TRANSPARENT),
            attributes: style.attributes,
        }
    }

    /// Create a cell from a grapheme cluster string.
    ///
    /// Single-codepoint strings become `Char` cells.
    #[must_use]
    pub fn from_grapheme(s: &str, style: Style) -> Self {
        let mut chars = s.chars();
        let content = match (chars.next(), chars.next()) {
            (Some(c), None) => CellContent::Char(c),
            (None, _) => CellContent::Empty,
            _ => CellContent::Grapheme(Arc::from(s)),
        };

        Self {
            content,
            fg: style.fg.unwrap_or(Rgba::WHITE),
            bg: style.bg.unwrap_or(Rgba::TRANSPARENT),
            attributes: style.attributes,
        }
    }

    /// Create a cleared/empty cell with the specified background.
    #[must_use]
    pub fn clear(bg: Rgba) -> Self {
        Self {
            content: CellContent::Empty,
            fg: Rgba::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a continuation cell (placeholder for wide characters).
    #[must_use]
    pub fn continuation(bg: Rgba) -> Self {
        Self {
            content: CellContent::Continuation,
            fg: Rgba::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// Get the display width of this cell.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.display_width()
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    /// Check if this cell is empty/cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Apply a style to this cell.
    pub fn apply_style(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        self.attributes |= style.attributes;
    }
}
