//! Drawing the cell row into a buffer.

use crate::buffer::{BoxStyle, OptimizedBuffer};
use crate::color::Rgba;
use crate::layout::{Rect, RowGeometry};
use crate::pin::animation::AnimationFrame;
use crate::pin::cells::{CellStyles, CellView};
use crate::style::{CellStyle, ContainerStyle, TextAttributes};
use crate::unicode;

/// Border color at full emphasis.
const EMPHASIS_COLOR: Rgba = Rgba::WHITE;

/// One frame of the control, ready to draw.
#[derive(Clone, Copy, Debug)]
pub struct RowFrame<'a> {
    pub geometry: RowGeometry,
    pub container: ContainerStyle,
    pub styles: CellStyles,
    pub cells: &'a [CellView],
    /// Whole-control animation sample.
    pub control: AnimationFrame,
    /// Focus-cell animation sample.
    pub focused_cell: AnimationFrame,
}

impl RowFrame<'_> {
    /// Render the control with its top-left corner at `(dest_x, dest_y)`.
    pub fn render_to(&self, output: &mut OptimizedBuffer, dest_x: i32, dest_y: i32) {
        if !self.control.visible {
            return;
        }
        let origin = (
            dest_x.saturating_add(self.control.dx),
            dest_y.saturating_add(self.control.dy),
        );

        if let Some(bg) = self.container.background {
            let size = self.geometry.outer_size();
            output.fill_rect(Rect::new(origin.0, origin.1, size.width, size.height), bg);
        }

        for view in self.cells {
            let Some(rect) = self.geometry.cell_rect(origin, view.index) else {
                continue;
            };
            let frame = if view.focused {
                self.focused_cell
            } else {
                AnimationFrame::IDLE
            };
            let emphasis = frame.emphasis.max(self.control.emphasis);
            self.render_cell(
                output,
                view,
                rect.offset(frame.dx, frame.dy),
                emphasis,
                frame.visible,
            );
        }
    }

    fn render_cell(
        &self,
        output: &mut OptimizedBuffer,
        view: &CellView,
        rect: Rect,
        emphasis: f32,
        border_visible: bool,
    ) {
        let style = emphasize(self.styles.cell_style(view), emphasis);
        if let Some(bg) = style.background {
            output.fill_rect(rect, bg);
        }

        let inner = match BoxStyle::for_kind(style.border_kind(), style.border_style()) {
            Some(box_style) => {
                if border_visible {
                    output.draw_box(rect, box_style);
                }
                rect.inset(1)
            }
            None => rect,
        };
        if inner.is_empty() {
            return;
        }

        output.push_scissor(inner);
        if let Some(element) = view.element() {
            element.draw(output, inner);
        } else if let Some(text) = view.text() {
            let width = unicode::display_width(text) as u32;
            let x = inner.x + (inner.width.saturating_sub(width) / 2) as i32;
            let y = inner.y + (inner.height.saturating_sub(1) / 2) as i32;
            output.draw_text(x, y, text, self.styles.text_style(view));
        }
        output.pop_scissor();
    }
}

/// Pull the border toward the emphasis color; bold past the halfway point.
fn emphasize(style: CellStyle, emphasis: f32) -> CellStyle {
    if emphasis <= 0.0 {
        return style;
    }
    let base = style.border_color.unwrap_or(Rgba::GRAY);
    let mut style = style.with_border_color(base.lerp(EMPHASIS_COLOR, emphasis));
    if emphasis >= 0.5 {
        style.border_attributes |= TextAttributes::BOLD;
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutDirection, Size};
    use crate::pin::cells::{CellInputs, derive_cells};
    use crate::pin::options::Content;
    use crate::style::{BorderKind, Style};

    fn geometry(code_length: usize) -> RowGeometry {
        RowGeometry {
            code_length,
            cell_size: Size::new(3, 3),
            cell_spacing: 1,
            padding_x: 0,
            padding_y: 0,
            direction: LayoutDirection::Ltr,
        }
    }

    fn ascii_styles() -> CellStyles {
        CellStyles {
            cell: CellStyle::border(BorderKind::Ascii, Rgba::GRAY),
            ..CellStyles::default()
        }
    }

    fn cells(value: &str, code_length: usize) -> Vec<CellView> {
        let mask = Content::text("*");
        derive_cells(&CellInputs {
            value,
            code_length,
            has_focus: false,
            revealing: false,
            password: false,
            placeholder: None,
            mask: &mask,
        })
    }

    fn frame<'a>(cells: &'a [CellView], code_length: usize) -> RowFrame<'a> {
        RowFrame {
            geometry: geometry(code_length),
            container: ContainerStyle::default(),
            styles: ascii_styles(),
            cells,
            control: AnimationFrame::IDLE,
            focused_cell: AnimationFrame::IDLE,
        }
    }

    #[test]
    fn test_render_row() {
        let views = cells("12", 3);
        let mut buf = OptimizedBuffer::new(12, 3);
        frame(&views, 3).render_to(&mut buf, 0, 0);
        assert_eq!(buf.to_text(), "+-+ +-+ +-+\n|1| |2| | |\n+-+ +-+ +-+");
    }

    #[test]
    fn test_control_offset() {
        let views = cells("", 1);
        let mut buf = OptimizedBuffer::new(5, 3);
        let mut f = frame(&views, 1);
        f.control.dx = 1;
        f.render_to(&mut buf, 0, 0);
        assert_eq!(buf.row_text(0), " +-+");
    }

    #[test]
    fn test_control_hidden() {
        let views = cells("1", 1);
        let mut buf = OptimizedBuffer::new(5, 3);
        let mut f = frame(&views, 1);
        f.control.visible = false;
        f.render_to(&mut buf, 0, 0);
        assert_eq!(buf.to_text(), "");
    }

    #[test]
    fn test_hidden_border_uses_whole_cell() {
        let views = cells("7", 1);
        let mut f = frame(&views, 1);
        f.styles.cell = CellStyle::default().with_border(BorderKind::Hidden);
        let mut buf = OptimizedBuffer::new(3, 3);
        f.render_to(&mut buf, 0, 0);
        assert_eq!(buf.to_text(), "\n 7");
    }

    #[test]
    fn test_text_clipped_to_cell() {
        let mut views = cells("", 1);
        views[0].fill = crate::pin::cells::CellFill::Placeholder(Content::text("wide"));
        let mut buf = OptimizedBuffer::new(5, 3);
        frame(&views, 1).render_to(&mut buf, 0, 0);
        assert_eq!(buf.row_text(1), "|w|");
    }

    #[test]
    fn test_emphasis_brightens_and_bolds() {
        let style = CellStyle::border(BorderKind::Single, Rgba::BLACK);
        assert_eq!(emphasize(style, 0.0), style);
        let strong = emphasize(style, 1.0);
        assert_eq!(strong.border_color, Some(Rgba::WHITE));
        assert!(strong.border_attributes.contains(TextAttributes::BOLD));
        let weak = emphasize(style, 0.25);
        assert!(!weak.border_attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_text_style_applied() {
        let views = cells("5", 1);
        let mut f = frame(&views, 1);
        f.styles.text = Style::fg(Rgba::RED);
        let mut buf = OptimizedBuffer::new(3, 3);
        f.render_to(&mut buf, 0, 0);
        assert_eq!(buf.get(1, 1).unwrap().fg, Rgba::RED);
    }
}
