//! Per-cell view model.
//!
//! Cells are never stored. Each frame they are derived from the current
//! value and flags, which keeps the focus and masking rules in one pure
//! function.

use crate::pin::options::{CellElement, Content};
use crate::style::{CellStyle, Style};
use crate::unicode;
use std::sync::Arc;

/// What a single cell shows.
#[derive(Clone, Debug, PartialEq)]
pub enum CellFill {
    /// The password mask.
    Mask(Content),
    /// Placeholder for an empty cell.
    Placeholder(Content),
    /// The typed grapheme.
    Grapheme(String),
    /// Nothing at all.
    Blank,
}

/// Derived state of one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    pub index: usize,
    pub filled: bool,
    pub focused: bool,
    pub last: bool,
    pub fill: CellFill,
}

impl CellView {
    /// Text drawn in the cell, if the fill is textual.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.fill {
            CellFill::Mask(content) | CellFill::Placeholder(content) => content.as_text(),
            CellFill::Grapheme(g) => Some(g),
            CellFill::Blank => None,
        }
    }

    /// Element drawn in the cell, if the fill is an element.
    #[must_use]
    pub fn element(&self) -> Option<&Arc<dyn CellElement>> {
        match &self.fill {
            CellFill::Mask(Content::Element(e)) | CellFill::Placeholder(Content::Element(e)) => {
                Some(e)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_masked(&self) -> bool {
        matches!(self.fill, CellFill::Mask(_))
    }
}

/// Everything the cell derivation depends on.
#[derive(Clone, Copy, Debug)]
pub struct CellInputs<'a> {
    pub value: &'a str,
    pub code_length: usize,
    pub has_focus: bool,
    pub revealing: bool,
    pub password: bool,
    pub placeholder: Option<&'a Content>,
    pub mask: &'a Content,
}

/// Index of the focused cell: the first empty one, while focused.
#[must_use]
pub fn focused_index(len: usize, code_length: usize, has_focus: bool) -> Option<usize> {
    (has_focus && len < code_length).then_some(len)
}

/// Derive the view of every cell, in index order.
#[must_use]
pub fn derive_cells(inputs: &CellInputs<'_>) -> Vec<CellView> {
    let graphemes: Vec<&str> = unicode::graphemes(inputs.value).collect();
    let len = graphemes.len();
    let focused = focused_index(len, inputs.code_length, inputs.has_focus);

    (0..inputs.code_length)
        .map(|index| {
            let filled = index < len;
            let last = len > 0 && index == len - 1;
            let fill = if filled && inputs.password && (!inputs.revealing || !last) {
                CellFill::Mask(inputs.mask.clone())
            } else if let (false, Some(placeholder)) = (filled, inputs.placeholder) {
                CellFill::Placeholder(placeholder.clone())
            } else if filled {
                CellFill::Grapheme(graphemes[index].to_string())
            } else {
                CellFill::Blank
            };
            CellView {
                index,
                filled,
                focused: focused == Some(index),
                last,
                fill,
            }
        })
        .collect()
}

/// The five configured styles, resolved per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellStyles {
    pub cell: CellStyle,
    pub cell_focused: CellStyle,
    pub cell_filled: CellStyle,
    pub text: Style,
    pub text_focused: Style,
}

impl CellStyles {
    /// Base, then focused, then filled; later wins.
    #[must_use]
    pub fn cell_style(&self, view: &CellView) -> CellStyle {
        let mut style = self.cell;
        if view.focused {
            style = style.merge(self.cell_focused);
        }
        if view.filled {
            style = style.merge(self.cell_filled);
        }
        style
    }

    /// Base, then focused.
    #[must_use]
    pub fn text_style(&self, view: &CellView) -> Style {
        if view.focused {
            self.text.merge(self.text_focused)
        } else {
            self.text
        }
    }
}
