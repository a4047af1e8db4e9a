//! Construction-time configuration for [`PinInput`](super::PinInput).

use crate::buffer::OptimizedBuffer;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::layout::{LayoutDirection, Rect, Size};
use crate::pin::animation::Animation;
use crate::style::{BorderKind, CellStyle, ContainerStyle, Style};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default reveal window for a freshly typed character in password mode.
pub const DEFAULT_MASK_DELAY: Duration = Duration::from_millis(200);

/// Default border color of the focused cell.
pub const FOCUS_ACCENT: Rgba = Rgba::rgb(0.35, 0.66, 0.9);

/// Arbitrary visual drawn inside a cell in place of text.
///
/// Elements receive the cell's interior rectangle with a scissor already
/// pushed, so they cannot paint over the border or neighbouring cells.
pub trait CellElement: fmt::Debug {
    fn draw(&self, buffer: &mut OptimizedBuffer, area: Rect);
}

/// A single glyph centered in the cell with its own style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphElement {
    pub glyph: char,
    pub style: Style,
}

impl GlyphElement {
    #[must_use]
    pub const fn new(glyph: char, style: Style) -> Self {
        Self { glyph, style }
    }
}

impl CellElement for GlyphElement {
    fn draw(&self, buffer: &mut OptimizedBuffer, area: Rect) {
        let mut tmp = [0u8; 4];
        let text = self.glyph.encode_utf8(&mut tmp);
        let width = crate::unicode::display_width(text) as u32;
        let x = area.x + (area.width.saturating_sub(width) / 2) as i32;
        let y = area.y + (area.height.saturating_sub(1) / 2) as i32;
        buffer.draw_text(x, y, text, self.style);
    }
}

/// Placeholder or mask content: literal text, or an element drawn as-is.
#[derive(Clone, Debug)]
pub enum Content {
    Text(String),
    Element(Arc<dyn CellElement>),
}

impl Content {
    /// Literal text content.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Element content.
    #[must_use]
    pub fn element(element: impl CellElement + 'static) -> Self {
        Self::Element(Arc::new(element))
    }

    /// The text, if this is text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<char> for Content {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

/// Keyboard hint forwarded to the hidden field.
///
/// Terminals have no soft keyboard; hosts that drive an on-screen keypad
/// read this through [`HiddenField::keyboard_type`](super::HiddenField::keyboard_type).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyboardType {
    Default,
    #[default]
    Numeric,
    NumberPad,
    DecimalPad,
    PhonePad,
    EmailAddress,
}

impl KeyboardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Numeric => "numeric",
            Self::NumberPad => "number-pad",
            Self::DecimalPad => "decimal-pad",
            Self::PhonePad => "phone-pad",
            Self::EmailAddress => "email-address",
        }
    }
}

/// Options passed through verbatim to the hidden field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Field capacity in graphemes; overrides the code length when set.
    pub max_length: Option<usize>,
    /// Select the whole field on focus so the next keystroke replaces it.
    pub select_text_on_focus: bool,
    /// Hint: suppress the host's context menu.
    pub context_menu_hidden: bool,
    /// Hint: allow the host to autocorrect.
    pub auto_correct: bool,
    /// Hint: semantic content type (e.g. `one-time-code`).
    pub text_content_type: Option<String>,
}

impl InputOptions {
    /// Keys accepted by [`InputOptions::set`].
    pub const ACCEPTED_KEYS: &'static [&'static str] = &[
        "max_length",
        "select_text_on_focus",
        "context_menu_hidden",
        "auto_correct",
        "text_content_type",
    ];

    /// Build options from string pairs, rejecting anything the field
    /// does not accept.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Set one option from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max_length" => {
                let parsed = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| invalid(key, "expected a non-negative integer"))?;
                self.max_length = Some(parsed);
            }
            "select_text_on_focus" => self.select_text_on_focus = parse_bool(key, value)?,
            "context_menu_hidden" => self.context_menu_hidden = parse_bool(key, value)?,
            "auto_correct" => self.auto_correct = parse_bool(key, value)?,
            "text_content_type" => self.text_content_type = Some(value.to_string()),
            _ => return Err(invalid(key, "not accepted by the hidden field")),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(key, "expected true or false")),
    }
}

fn invalid(key: &str, reason: &str) -> Error {
    Error::InvalidInputOption {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Who owns the code value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueMode {
    /// The host owns the value and pushes it with `set_value`.
    Controlled,
    /// The widget commits each normalized change itself.
    Uncontrolled,
}

/// Configuration for a [`PinInput`](super::PinInput).
#[derive(Clone, Debug)]
pub struct PinInputOptions {
    /// Initial value; `Some` selects [`ValueMode::Controlled`].
    pub value: Option<String>,
    pub code_length: usize,
    pub cell_size: Size,
    pub cell_spacing: u32,
    /// Content for empty cells; `None` leaves them blank.
    pub placeholder: Option<Content>,
    pub password: bool,
    pub mask: Content,
    pub mask_delay: Duration,
    pub keyboard_type: KeyboardType,
    pub auto_focus: bool,
    pub restrict_to_numbers: bool,
    pub container_style: ContainerStyle,
    pub cell_style: CellStyle,
    pub cell_style_focused: CellStyle,
    pub cell_style_filled: CellStyle,
    pub text_style: Style,
    pub text_style_focused: Style,
    /// Global animation switch; also gates [`PinInput::animate`](super::PinInput::animate).
    pub animated: bool,
    pub animation_focused: Option<Animation>,
    pub editable: bool,
    pub input_options: InputOptions,
    pub disable_fullscreen_ui: bool,
    pub direction: LayoutDirection,
    pub test_id: Option<String>,
}

impl Default for PinInputOptions {
    fn default() -> Self {
        Self {
            value: None,
            code_length: 4,
            cell_size: Size::default(),
            cell_spacing: 1,
            placeholder: Some(Content::Text(String::new())),
            password: false,
            mask: Content::Text("*".to_string()),
            mask_delay: DEFAULT_MASK_DELAY,
            keyboard_type: KeyboardType::Numeric,
            auto_focus: false,
            restrict_to_numbers: false,
            container_style: ContainerStyle::default(),
            cell_style: CellStyle::border(BorderKind::Single, Rgba::GRAY),
            cell_style_focused: CellStyle::border(BorderKind::Heavy, FOCUS_ACCENT),
            cell_style_filled: CellStyle::default(),
            text_style: Style::fg(Rgba::GRAY),
            text_style_focused: Style::fg(Rgba::WHITE).with_bold(),
            animated: true,
            animation_focused: Some(Animation::Pulse),
            editable: true,
            input_options: InputOptions::default(),
            disable_fullscreen_ui: true,
            direction: LayoutDirection::Ltr,
            test_id: None,
        }
    }
}

impl PinInputOptions {
    /// Create a new options builder.
    #[must_use]
    pub fn builder() -> PinInputOptionsBuilder {
        PinInputOptionsBuilder::default()
    }

    /// Value mode implied by these options.
    #[must_use]
    pub fn value_mode(&self) -> ValueMode {
        if self.value.is_some() {
            ValueMode::Controlled
        } else {
            ValueMode::Uncontrolled
        }
    }
}

/// Builder for [`PinInputOptions`].
#[derive(Clone, Debug, Default)]
pub struct PinInputOptionsBuilder {
    options: PinInputOptions,
}

impl PinInputOptionsBuilder {
    /// Controlled initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.options.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn code_length(mut self, code_length: usize) -> Self {
        self.options.code_length = code_length;
        self
    }

    #[must_use]
    pub fn cell_size(mut self, width: u32, height: u32) -> Self {
        self.options.cell_size = Size::new(width, height);
        self
    }

    #[must_use]
    pub fn cell_spacing(mut self, spacing: u32) -> Self {
        self.options.cell_spacing = spacing;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<Content>) -> Self {
        self.options.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn no_placeholder(mut self) -> Self {
        self.options.placeholder = None;
        self
    }

    #[must_use]
    pub fn password(mut self, password: bool) -> Self {
        self.options.password = password;
        self
    }

    #[must_use]
    pub fn mask(mut self, mask: impl Into<Content>) -> Self {
        self.options.mask = mask.into();
        self
    }

    #[must_use]
    pub fn mask_delay(mut self, delay: Duration) -> Self {
        self.options.mask_delay = delay;
        self
    }

    #[must_use]
    pub fn keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.options.keyboard_type = keyboard_type;
        self
    }

    #[must_use]
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.options.auto_focus = auto_focus;
        self
    }

    #[must_use]
    pub fn restrict_to_numbers(mut self, restrict: bool) -> Self {
        self.options.restrict_to_numbers = restrict;
        self
    }

    #[must_use]
    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.options.container_style = style;
        self
    }

    #[must_use]
    pub fn cell_style(mut self, style: CellStyle) -> Self {
        self.options.cell_style = style;
        self
    }

    #[must_use]
    pub fn cell_style_focused(mut self, style: CellStyle) -> Self {
        self.options.cell_style_focused = style;
        self
    }

    #[must_use]
    pub fn cell_style_filled(mut self, style: CellStyle) -> Self {
        self.options.cell_style_filled = style;
        self
    }

    #[must_use]
    pub fn text_style(mut self, style: Style) -> Self {
        self.options.text_style = style;
        self
    }

    #[must_use]
    pub fn text_style_focused(mut self, style: Style) -> Self {
        self.options.text_style_focused = style;
        self
    }

    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.options.animated = animated;
        self
    }

    #[must_use]
    pub fn animation_focused(mut self, animation: Option<Animation>) -> Self {
        self.options.animation_focused = animation;
        self
    }

    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.options.editable = editable;
        self
    }

    #[must_use]
    pub fn input_options(mut self, options: InputOptions) -> Self {
        self.options.input_options = options;
        self
    }

    #[must_use]
    pub fn disable_fullscreen_ui(mut self, disable: bool) -> Self {
        self.options.disable_fullscreen_ui = disable;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.options.direction = direction;
        self
    }

    #[must_use]
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.options.test_id = Some(test_id.into());
        self
    }

    /// Build the final options.
    #[must_use]
    pub fn build(self) -> PinInputOptions {
        self.options
    }
}
