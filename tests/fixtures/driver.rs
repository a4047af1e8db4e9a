//! Helpers that drive a widget the way a host loop would.

use pincode_tui::input::{Event, KeyCode, KeyEvent, PasteEvent};
use pincode_tui::pin::CellFill;
use pincode_tui::{OptimizedBuffer, PinInput};
use std::time::Instant;
use tracing::Level;

/// Install a test-scoped tracing subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Type each character of `text` as its own key press.
pub fn type_str(pin: &mut PinInput, text: &str, now: Instant) {
    for c in text.chars() {
        tracing::debug!(%c, "type");
        pin.handle_event(&Event::Key(KeyEvent::char(c)), now);
    }
}

pub fn press_backspace(pin: &mut PinInput, now: Instant) -> bool {
    tracing::debug!("backspace");
    pin.handle_event(&Event::Key(KeyEvent::key(KeyCode::Backspace)), now)
}

pub fn paste(pin: &mut PinInput, text: &str, now: Instant) -> bool {
    tracing::debug!(len = text.len(), "paste");
    pin.handle_event(&Event::Paste(PasteEvent::new(text)), now)
}

/// What each cell shows: text, `<element>`, or empty for blank cells.
pub fn cell_texts(pin: &PinInput) -> Vec<String> {
    pin.cells()
        .iter()
        .map(|view| match &view.fill {
            CellFill::Blank => String::new(),
            _ => view
                .text()
                .map_or_else(|| "<element>".to_string(), str::to_string),
        })
        .collect()
}

/// Index of every focused cell.
pub fn focused_cells(pin: &PinInput) -> Vec<usize> {
    pin.cells()
        .iter()
        .filter(|view| view.focused)
        .map(|view| view.index)
        .collect()
}

/// Render into a fresh buffer sized to the control and dump it as text.
pub fn render_text(pin: &PinInput, now: Instant) -> String {
    let size = pin.size();
    let mut buf = OptimizedBuffer::new(size.width, size.height);
    pin.render_to(&mut buf, 0, 0, now);
    let text = buf.to_text();
    tracing::debug!(%text, "rendered");
    text
}
