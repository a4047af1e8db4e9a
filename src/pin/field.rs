//! Invisible text field that owns keyboard focus and raw text.
//!
//! The field is the only thing that receives keystrokes. It enforces its
//! own capacity and editability and reports the raw text after each edit;
//! normalization and value ownership live one level up.

use crate::pin::options::{InputOptions, KeyboardType};
use crate::unicode;

/// The hidden input behind the visible cells.
#[derive(Clone, Debug)]
pub struct HiddenField {
    text: String,
    max_length: usize,
    editable: bool,
    focused: bool,
    select_all: bool,
    keyboard_type: KeyboardType,
    disable_fullscreen_ui: bool,
    options: InputOptions,
}

impl HiddenField {
    /// Create a field holding at most `code_length` graphemes, unless
    /// `options.max_length` overrides it.
    #[must_use]
    pub fn new(
        code_length: usize,
        editable: bool,
        keyboard_type: KeyboardType,
        disable_fullscreen_ui: bool,
        options: InputOptions,
    ) -> Self {
        Self {
            text: String::new(),
            max_length: options.max_length.unwrap_or(code_length),
            editable,
            focused: false,
            select_all: false,
            keyboard_type,
            disable_fullscreen_ui,
            options,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Capacity in graphemes.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the whole text is selected and will be replaced by the next edit.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.select_all
    }

    #[must_use]
    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    #[must_use]
    pub fn disable_fullscreen_ui(&self) -> bool {
        self.disable_fullscreen_ui
    }

    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace the text without reporting a change, truncating to capacity.
    pub fn set_text(&mut self, text: &str) {
        let text = unicode::truncate_graphemes(text, self.max_length);
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    /// Empty the field without reporting a change.
    pub fn clear(&mut self) {
        self.text.clear();
        self.select_all = false;
    }

    /// Give the field focus. Returns `false` if it already had it.
    pub fn focus(&mut self) -> bool {
        if self.focused {
            return false;
        }
        self.focused = true;
        self.select_all = self.options.select_text_on_focus && !self.text.is_empty();
        true
    }

    /// Take focus away. Returns `false` if the field was not focused.
    pub fn blur(&mut self) -> bool {
        if !self.focused {
            return false;
        }
        self.focused = false;
        self.select_all = false;
        true
    }

    /// Type one character. Returns the new raw text if it changed.
    pub fn insert_char(&mut self, c: char) -> Option<String> {
        let mut tmp = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut tmp))
    }

    /// Insert text at the end (or over the selection), clipped to capacity.
    ///
    /// Returns the new raw text if it changed.
    pub fn insert_str(&mut self, s: &str) -> Option<String> {
        if !self.editable || s.is_empty() {
            return None;
        }
        let mut next = if self.select_all {
            String::new()
        } else {
            self.text.clone()
        };
        next.push_str(s);
        let next = unicode::truncate_graphemes(&next, self.max_length);
        self.commit(next)
    }

    /// Delete the last grapheme (or the selection).
    ///
    /// Returns the new raw text if it changed; deleting from an empty field
    /// changes nothing.
    pub fn delete_backward(&mut self) -> Option<String> {
        if !self.editable {
            return None;
        }
        let next = if self.select_all {
            ""
        } else {
            unicode::without_last_grapheme(&self.text)
        };
        let next = next.to_string();
        self.commit(&next)
    }

    fn commit(&mut self, next: &str) -> Option<String> {
        self.select_all = false;
        if next == self.text {
            return None;
        }
        self.text = next.to_string();
        Some(self.text.clone())
    }
}
