//! Cell-based frame buffer.
//!
//! [`OptimizedBuffer`] is the drawing surface the widget renders into. It
//! is a 2D grid of cells with a scissor stack that clips drawing to a
//! rectangle. The host copies the buffer to the terminal however it likes.
//!
//! # Examples
//!
//! ```
//! use pincode_tui::{OptimizedBuffer, Rgba, Style};
//! use pincode_tui::layout::Rect;
//!
//! let mut buf = OptimizedBuffer::new(20, 3);
//! buf.clear(Rgba::BLACK);
//! buf.draw_text(1, 1, "PIN", Style::fg(Rgba::WHITE));
//!
//! buf.push_scissor(Rect::new(0, 0, 2, 3));
//! buf.draw_text(0, 0, "clipped", Style::NONE);
//! buf.pop_scissor();
//!
//! assert_eq!(buf.row_text(0), "cl");
//! assert_eq!(buf.row_text(1), " PIN");
//! ```

mod drawing;
mod scissor;

pub use drawing::BoxStyle;
pub use scissor::ScissorStack;

use crate::cell::Cell;
use crate::color::Rgba;
use crate::layout::Rect;
use crate::style::Style;

/// Cell buffer for terminal rendering.
///
/// Coordinates are (x, y) where (0, 0) is the top-left corner. Drawing
/// methods take signed coordinates; anything outside the buffer or the
/// current scissor rectangle is dropped.
#[derive(Clone, Debug)]
pub struct OptimizedBuffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scissor_stack: ScissorStack,
}

impl OptimizedBuffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::clear(Rgba::TRANSPARENT); size],
            scissor_stack: ScissorStack::new(),
        }
    }

    /// Get buffer dimensions.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get buffer width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get buffer height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        row_offset.checked_add(x as usize)
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Get cell at a signed position.
    #[must_use]
    pub fn get_signed(&self, x: i32, y: i32) -> Option<&Cell> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get(x, y)
    }

    /// Get mutable cell at position.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        self.cell_index(x, y).map(|idx| &mut self.cells[idx])
    }

    /// Set cell at position, respecting the scissor stack.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.scissor_stack.contains(x, y) {
            return;
        }
        let (Ok(ux), Ok(uy)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(idx) = self.cell_index(ux, uy) {
            self.cells[idx] = cell;
        }
    }

    /// Clear the entire buffer with a background color.
    pub fn clear(&mut self, bg: Rgba) {
        self.cells.fill(Cell::clear(bg));
    }

    /// Fill a rectangular region with background color.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba) {
        for row in rect.y..rect.bottom() {
            for col in rect.x..rect.right() {
                self.set(col, row, Cell::clear(bg));
            }
        }
    }

    /// Draw text at position. Returns the number of columns advanced.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: Style) -> u32 {
        drawing::draw_text(self, x, y, text, style)
    }

    /// Draw a box border around `rect`.
    pub fn draw_box(&mut self, rect: Rect, style: BoxStyle) {
        drawing::draw_box(self, rect, style);
    }

    /// Push a scissor rectangle.
    pub fn push_scissor(&mut self, rect: Rect) {
        self.scissor_stack.push(rect);
    }

    /// Pop a scissor rectangle.
    pub fn pop_scissor(&mut self) {
        self.scissor_stack.pop();
    }

    /// Get raw cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over cells with positions.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let x = (i as u32) % self.width;
            let y = (i as u32) / self.width;
            (x, y, cell)
        })
    }

    /// Text content of row `y` with trailing blanks removed.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut line = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                line.push_str(&cell.content.to_string());
            }
        }
        line.truncate(line.trim_end().len());
        line
    }

    /// Text content of the whole buffer, one line per row.
    ///
    /// Trailing blank rows are dropped, which keeps snapshots compact.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut rows: Vec<String> = (0..self.height).map(|y| self.row_text(y)).collect();
        while rows.last().is_some_and(String::is_empty) {
            rows.pop();
        }
        rows.join("\n")
    }
}

impl Default for OptimizedBuffer {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
