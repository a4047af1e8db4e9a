//! Change and key-press processing.
//!
//! The controller is pure: it turns the field's raw text into a
//! normalized code and decides which callbacks the widget must fire.

use crate::input::KeyEvent;
use crate::unicode;
use std::borrow::Cow;

/// Normalize raw field text, keeping only ASCII digits when `restrict_to_numbers` is set.
#[must_use]
pub fn normalize(raw: &str, restrict_to_numbers: bool) -> Cow<'_, str> {
    if !restrict_to_numbers || raw.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.chars().filter(char::is_ascii_digit).collect())
}

/// Result of processing one change of the field text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeOutcome {
    /// Normalized code handed to `on_text_change`.
    pub code: String,
    /// Whether `on_text_change` should fire. Every change reports.
    pub text_changed: bool,
    /// The code has exactly `code_length` graphemes.
    pub fulfilled: bool,
    /// Password mode and the code got longer: reveal the newest character.
    pub grew: bool,
}

/// Result of processing one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Backspace pressed while the value was already empty.
    BackspaceOnEmpty,
    Ignored,
}

/// Decides what each change or key press means for the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputController {
    pub code_length: usize,
    pub password: bool,
    pub restrict_to_numbers: bool,
}

impl InputController {
    #[must_use]
    pub const fn new(code_length: usize, password: bool, restrict_to_numbers: bool) -> Self {
        Self {
            code_length,
            password,
            restrict_to_numbers,
        }
    }

    /// Process new raw field text against the previously committed value.
    #[must_use]
    pub fn on_change(&self, raw: &str, previous: &str) -> ChangeOutcome {
        let code = normalize(raw, self.restrict_to_numbers).into_owned();
        let len = unicode::grapheme_count(&code);
        ChangeOutcome {
            fulfilled: len == self.code_length,
            grew: self.password && len > unicode::grapheme_count(previous),
            text_changed: true,
            code,
        }
    }

    /// Process a key press before the field applies it.
    #[must_use]
    pub fn on_key_press(&self, key: &KeyEvent, current: &str) -> KeyOutcome {
        if key.is_deletion() && current.is_empty() {
            KeyOutcome::BackspaceOnEmpty
        } else {
            KeyOutcome::Ignored
        }
    }
}
