//! Callback recorder.

use pincode_tui::PinInput;
use std::cell::RefCell;
use std::rc::Rc;

/// One observed callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    TextChange(String),
    Fulfill(String),
    Backspace,
    Focus,
    Blur,
}

/// Records widget callbacks in the order they fire.
///
/// Clones share the same log, so a recorder can be kept by the test while
/// its callbacks live inside the widget.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every callback on `pin`.
    pub fn attach(&self, pin: PinInput) -> PinInput {
        let text = self.clone();
        let fulfill = self.clone();
        let backspace = self.clone();
        let focus = self.clone();
        let blur = self.clone();
        pin.on_text_change(move |code| text.push(Call::TextChange(code.to_string())))
            .on_fulfill(move |code| fulfill.push(Call::Fulfill(code.to_string())))
            .on_backspace(move || backspace.push(Call::Backspace))
            .on_focus(move || focus.push(Call::Focus))
            .on_blur(move || blur.push(Call::Blur))
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Codes passed to `on_text_change`.
    pub fn text_changes(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::TextChange(code) => Some(code.clone()),
                _ => None,
            })
            .collect()
    }

    /// Codes passed to `on_fulfill`.
    pub fn fulfilled(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Fulfill(code) => Some(code.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn backspaces(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == Call::Backspace)
            .count()
    }
}
