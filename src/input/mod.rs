//! Input events delivered to the widget by the host.
//!
//! The host owns the terminal and its byte-level parsing; it converts
//! whatever it reads into these events and hands them to
//! [`PinInput::handle_event`](crate::PinInput::handle_event).

mod event;
mod keyboard;

pub use event::{Event, PasteEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
