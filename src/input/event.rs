//! Widget input event types.

use crate::input::keyboard::KeyEvent;

/// An input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event.
    Key(KeyEvent),
    /// Paste event (bracketed paste mode).
    Paste(PasteEvent),
    /// Input focus moved to the widget.
    FocusGained,
    /// Input focus left the widget.
    FocusLost,
}

impl Event {
    /// Check if this is a key event.
    #[must_use]
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Get the key event if this is one.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Get the paste event if this is one.
    #[must_use]
    pub fn paste(&self) -> Option<&PasteEvent> {
        match self {
            Self::Paste(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this is a focus change.
    #[must_use]
    pub fn is_focus(&self) -> bool {
        matches!(self, Self::FocusGained | Self::FocusLost)
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<PasteEvent> for Event {
    fn from(e: PasteEvent) -> Self {
        Self::Paste(e)
    }
}

/// Paste event from bracketed paste mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasteEvent {
    /// The pasted text content.
    pub content: String,
}

impl PasteEvent {
    /// Create a new paste event.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the pasted content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the paste is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
