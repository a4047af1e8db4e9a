//! Geometry for the cell row.
//!
//! Positions are signed so that animation offsets (a shake to the left of
//! column 0, for instance) stay representable; the buffer clips anything
//! that lands outside it.

/// A rectangle in buffer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// An effectively unbounded rectangle anchored at the origin.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0, 0, u32::MAX, u32::MAX)
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    /// Compute intersection with another rectangle.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2.abs_diff(x1), y2.abs_diff(y1)))
        } else {
            None
        }
    }

    /// Check if this rectangle is empty (zero area).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink by `n` on every side, collapsing to an empty rect at the center.
    #[must_use]
    pub fn inset(&self, n: u32) -> Rect {
        let width = self.width.saturating_sub(n.saturating_mul(2));
        let height = self.height.saturating_sub(n.saturating_mul(2));
        Rect::new(
            self.x.saturating_add_unsigned(n.min(self.width / 2)),
            self.y.saturating_add_unsigned(n.min(self.height / 2)),
            width,
            height,
        )
    }

    /// Move by a signed offset.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }
}

/// Width and height in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    /// Five columns by three rows: a one-column border around one content row
    /// with a column of breathing room either side.
    fn default() -> Self {
        Self::new(5, 3)
    }
}

/// Order in which cells are laid out horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Index 0 is leftmost.
    #[default]
    Ltr,
    /// Index 0 is rightmost.
    Rtl,
}

/// Geometry of one cell row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowGeometry {
    pub code_length: usize,
    pub cell_size: Size,
    pub cell_spacing: u32,
    pub padding_x: u32,
    pub padding_y: u32,
    pub direction: LayoutDirection,
}

impl RowGeometry {
    /// Size of the cell row alone: `cell * L + spacing * (L - 1)` wide.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let count = u32::try_from(self.code_length).unwrap_or(u32::MAX);
        let gaps = count.saturating_sub(1);
        let width = self
            .cell_size
            .width
            .saturating_mul(count)
            .saturating_add(self.cell_spacing.saturating_mul(gaps));
        let height = if count == 0 { 0 } else { self.cell_size.height };
        Size::new(width, height)
    }

    /// Size of the whole control including container padding.
    #[must_use]
    pub fn outer_size(&self) -> Size {
        let content = self.content_size();
        Size::new(
            content
                .width
                .saturating_add(self.padding_x.saturating_mul(2)),
            content
                .height
                .saturating_add(self.padding_y.saturating_mul(2)),
        )
    }

    /// Rectangle for cell `index` when the control's top-left is at `origin`.
    ///
    /// Returns `None` for indices past the code length.
    #[must_use]
    pub fn cell_rect(&self, origin: (i32, i32), index: usize) -> Option<Rect> {
        if index >= self.code_length {
            return None;
        }
        let slot = match self.direction {
            LayoutDirection::Ltr => index,
            LayoutDirection::Rtl => self.code_length - 1 - index,
        };
        let stride = self.cell_size.width.saturating_add(self.cell_spacing);
        let slot = u32::try_from(slot).unwrap_or(u32::MAX);
        let x = origin
            .0
            .saturating_add_unsigned(self.padding_x)
            .saturating_add_unsigned(stride.saturating_mul(slot));
        let y = origin.1.saturating_add_unsigned(self.padding_y);
        Some(Rect::new(
            x,
            y,
            self.cell_size.width,
            self.cell_size.height,
        ))
    }

    /// Rectangles for every cell, in index order.
    #[must_use]
    pub fn cell_rects(&self, origin: (i32, i32)) -> Vec<Rect> {
        (0..self.code_length)
            .filter_map(|index| self.cell_rect(origin, index))
            .collect()
    }
}
