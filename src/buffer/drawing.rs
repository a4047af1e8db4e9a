//! Text and box drawing operations.

use crate::buffer::OptimizedBuffer;
use crate::cell::Cell;
use crate::layout::Rect;
use crate::style::{BorderKind, Style};
use unicode_segmentation::UnicodeSegmentation;

/// Box drawing style with corner and edge characters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub style: Style,
}

impl BoxStyle {
    /// Single-line box drawing characters.
    #[must_use]
    pub fn single(style: Style) -> Self {
        Self::from_chars(['┌', '┐', '└', '┘', '─', '│'], style)
    }

    /// Double-line box drawing characters.
    #[must_use]
    pub fn double(style: Style) -> Self {
        Self::from_chars(['╔', '╗', '╚', '╝', '═', '║'], style)
    }

    /// Rounded corner box drawing characters.
    #[must_use]
    pub fn rounded(style: Style) -> Self {
        Self::from_chars(['╭', '╮', '╰', '╯', '─', '│'], style)
    }

    /// Heavy (bold) box drawing characters.
    #[must_use]
    pub fn heavy(style: Style) -> Self {
        Self::from_chars(['┏', '┓', '┗', '┛', '━', '┃'], style)
    }

    /// ASCII box drawing characters (works in all terminals).
    #[must_use]
    pub fn ascii(style: Style) -> Self {
        Self::from_chars(['+', '+', '+', '+', '-', '|'], style)
    }

    /// Box style for a [`BorderKind`]; `None` for [`BorderKind::Hidden`].
    #[must_use]
    pub fn for_kind(kind: BorderKind, style: Style) -> Option<Self> {
        match kind {
            BorderKind::Hidden => None,
            BorderKind::Single => Some(Self::single(style)),
            BorderKind::Double => Some(Self::double(style)),
            BorderKind::Rounded => Some(Self::rounded(style)),
            BorderKind::Heavy => Some(Self::heavy(style)),
            BorderKind::Ascii => Some(Self::ascii(style)),
        }
    }

    fn from_chars(chars: [char; 6], style: Style) -> Self {
        let [top_left, top_right, bottom_left, bottom_right, horizontal, vertical] = chars;
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
            style,
        }
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::single(Style::NONE)
    }
}

/// Draw text at position, handling grapheme clusters and wide characters.
///
/// Cells keep their existing background when `style.bg` is unset. Returns
/// the number of columns advanced.
pub fn draw_text(buffer: &mut OptimizedBuffer, x: i32, y: i32, text: &str, style: Style) -> u32 {
    let mut col = x;
    for grapheme in text.graphemes(true) {
        let width = crate::unicode::display_width(grapheme);
        if width == 0 {
            continue;
        }

        let bg = style
            .bg
            .or_else(|| buffer.get_signed(col, y).map(|cell| cell.bg));
        let cell_style = Style { bg, ..style };
        buffer.set(col, y, Cell::from_grapheme(grapheme, cell_style));

        for i in 1..width {
            let cont_bg = bg.unwrap_or(crate::color::Rgba::TRANSPARENT);
            buffer.set(col.saturating_add(i as i32), y, Cell::continuation(cont_bg));
        }
        col = col.saturating_add(width as i32);
    }
    col.abs_diff(x)
}

/// Draw a box border around `rect`.
pub fn draw_box(buffer: &mut OptimizedBuffer, rect: Rect, box_style: BoxStyle) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let style = box_style.style;
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);

    // Corners
    buffer.set(x0, y0, Cell::new(box_style.top_left, style));
    buffer.set(x1, y0, Cell::new(box_style.top_right, style));
    buffer.set(x0, y1, Cell::new(box_style.bottom_left, style));
    buffer.set(x1, y1, Cell::new(box_style.bottom_right, style));

    // Horizontal edges
    for col in (x0 + 1)..x1 {
        buffer.set(col, y0, Cell::new(box_style.horizontal, style));
        buffer.set(col, y1, Cell::new(box_style.horizontal, style));
    }

    // Vertical edges
    for row in (y0 + 1)..y1 {
        buffer.set(x0, row, Cell::new(box_style.vertical, style));
        buffer.set(x1, row, Cell::new(box_style.vertical, style));
    }
}
