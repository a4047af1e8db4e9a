//! Scissor (clipping) rectangle stack.

use crate::layout::Rect;

/// Stack of scissor rectangles with intersection.
///
/// Element content drawn into a cell is clipped to that cell's interior by
/// pushing the interior before drawing and popping afterwards.
#[derive(Clone, Debug)]
pub struct ScissorStack {
    stack: Vec<Rect>,
    current: Rect,
}

impl Default for ScissorStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScissorStack {
    /// Create a new scissor stack with unbounded extent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: Rect::unbounded(),
        }
    }

    /// Push a new scissor rectangle, intersecting with current.
    pub fn push(&mut self, rect: Rect) {
        self.stack.push(self.current);
        self.current = self
            .current
            .intersect(&rect)
            .unwrap_or(Rect::new(0, 0, 0, 0));
    }

    /// Pop the top scissor rectangle.
    pub fn pop(&mut self) {
        if let Some(rect) = self.stack.pop() {
            self.current = rect;
        }
    }

    /// Check if a point is within the current scissor region.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.current.contains(x, y)
    }

    /// Current effective clip rectangle.
    #[must_use]
    pub fn current(&self) -> Rect {
        self.current
    }

    /// Stack depth (0 when nothing is pushed).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
