//! Text and cell styling.
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`Style`]: Text style (colors and attributes) for cell content
//! - [`CellStyle`]: Box style for a single code cell (border and fill)
//! - [`ContainerStyle`]: Style for the area that holds all cells
//!
//! Every style type merges the same way: the overlay wins wherever it sets
//! a value, and the base shows through wherever the overlay is unset. The
//! widget layers base, focused, and filled styles in that order.
//!
//! # Examples
//!
//! ```
//! use pincode_tui::{BorderKind, CellStyle, Rgba, Style};
//!
//! let text = Style::fg(Rgba::GRAY).merge(Style::bold());
//! assert_eq!(text.fg, Some(Rgba::GRAY));
//!
//! let cell = CellStyle::border(BorderKind::Single, Rgba::GRAY)
//!     .merge(CellStyle::default().with_border_color(Rgba::WHITE));
//! assert_eq!(cell.border, Some(BorderKind::Single));
//! assert_eq!(cell.border_color, Some(Rgba::WHITE));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

/// Text style: colors and attributes applied to cell content.
///
/// `None` for colors means "inherit" (from the cell fill, or the terminal
/// default).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgba>,
    /// Background color.
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::BOLD,
        }
    }

    /// Create a dim style.
    #[must_use]
    pub const fn dim() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::DIM,
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgba) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgba) -> Self {
        self.style.bg = Some(color);
        self
    }

    /// Add bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add dim attribute.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.style.attributes |= TextAttributes::DIM;
        self
    }

    /// Add underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Add inverse attribute.
    #[must_use]
    pub fn inverse(mut self) -> Self {
        self.style.attributes |= TextAttributes::INVERSE;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

/// Border line set drawn around a code cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// No border; the content area covers the whole cell.
    Hidden,
    /// `┌─┐` single lines.
    #[default]
    Single,
    /// `╔═╗` double lines.
    Double,
    /// `╭─╮` rounded corners.
    Rounded,
    /// `┏━┓` heavy lines.
    Heavy,
    /// `+-+` plain ASCII.
    Ascii,
}

/// Visual style of one code cell.
///
/// All fields are optional so that focused and filled overrides only touch
/// what they set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellStyle {
    /// Border line set.
    pub border: Option<BorderKind>,
    /// Border foreground color.
    pub border_color: Option<Rgba>,
    /// Fill color for the cell interior (and border background).
    pub background: Option<Rgba>,
    /// Attributes applied to the border glyphs.
    pub border_attributes: TextAttributes,
}

impl CellStyle {
    /// Style with a border kind and color.
    #[must_use]
    pub const fn border(kind: BorderKind, color: Rgba) -> Self {
        Self {
            border: Some(kind),
            border_color: Some(color),
            background: None,
            border_attributes: TextAttributes::empty(),
        }
    }

    /// Return a copy with a different border kind.
    #[must_use]
    pub const fn with_border(self, kind: BorderKind) -> Self {
        Self {
            border: Some(kind),
            ..self
        }
    }

    /// Return a copy with a different border color.
    #[must_use]
    pub const fn with_border_color(self, color: Rgba) -> Self {
        Self {
            border_color: Some(color),
            ..self
        }
    }

    /// Return a copy with a fill color.
    #[must_use]
    pub const fn with_background(self, color: Rgba) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    /// Merge two cell styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            border: other.border.or(self.border),
            border_color: other.border_color.or(self.border_color),
            background: other.background.or(self.background),
            border_attributes: self.border_attributes | other.border_attributes,
        }
    }

    /// Resolved border kind (single when unset).
    #[must_use]
    pub fn border_kind(&self) -> BorderKind {
        self.border.unwrap_or_default()
    }

    /// Text style used for the border glyphs.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style {
            fg: self.border_color,
            bg: self.background,
            attributes: self.border_attributes,
        }
    }
}

/// Style of the container that holds every cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerStyle {
    /// Fill color behind the cells.
    pub background: Option<Rgba>,
    /// Columns of padding left and right of the cell row.
    pub padding_x: u32,
    /// Rows of padding above and below the cell row.
    pub padding_y: u32,
}

impl ContainerStyle {
    /// Return a copy with a fill color.
    #[must_use]
    pub const fn with_background(self, color: Rgba) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    /// Return a copy with symmetric padding.
    #[must_use]
    pub const fn with_padding(self, x: u32, y: u32) -> Self {
        Self {
            padding_x: x,
            padding_y: y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::builder()
            .fg(Rgba::RED)
            .bg(Rgba::BLACK)
            .bold()
            .underline()
            .build();

        assert_eq!(style.fg, Some(Rgba::RED));
        assert_eq!(style.bg, Some(Rgba::BLACK));
        assert!(style.attributes.contains(TextAttributes::BOLD));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_style_merge() {
        let base = Style::fg(Rgba::RED).with_bold();
        let overlay = Style::bg(Rgba::BLUE).with_attributes(TextAttributes::ITALIC);

        let merged = base.merge(overlay);

        assert_eq!(merged.fg, Some(Rgba::RED));
        assert_eq!(merged.bg, Some(Rgba::BLUE));
        assert!(merged.attributes.contains(TextAttributes::BOLD));
        assert!(merged.attributes.contains(TextAttributes::ITALIC));
    }

    #[test]
    fn test_style_merge_overlay_wins() {
        let merged = Style::fg(Rgba::GRAY).merge(Style::fg(Rgba::WHITE));
        assert_eq!(merged.fg, Some(Rgba::WHITE));
    }

    #[test]
    fn test_cell_style_layering() {
        let base = CellStyle::border(BorderKind::Single, Rgba::GRAY);
        let focused = CellStyle::border(BorderKind::Heavy, Rgba::WHITE);
        let filled = CellStyle::default().with_background(Rgba::BLUE);

        let merged = base.merge(focused).merge(filled);
        assert_eq!(merged.border, Some(BorderKind::Heavy));
        assert_eq!(merged.border_color, Some(Rgba::WHITE));
        assert_eq!(merged.background, Some(Rgba::BLUE));

        // Filled without focus keeps the base border.
        let merged = base.merge(filled);
        assert_eq!(merged.border, Some(BorderKind::Single));
        assert_eq!(merged.border_color, Some(Rgba::GRAY));
    }

    #[test]
    fn test_cell_style_border_style() {
        let style = CellStyle::border(BorderKind::Double, Rgba::RED).with_background(Rgba::BLACK);
        let text = style.border_style();
        assert_eq!(text.fg, Some(Rgba::RED));
        assert_eq!(text.bg, Some(Rgba::BLACK));
        assert_eq!(CellStyle::default().border_kind(), BorderKind::Single);
    }

    #[test]
    fn test_container_style_builders() {
        let style = ContainerStyle::default()
            .with_background(Rgba::BLACK)
            .with_padding(2, 1);
        assert_eq!(style.background, Some(Rgba::BLACK));
        assert_eq!((style.padding_x, style.padding_y), (2, 1));
    }
}
