//! Fuzz target for event sequences driven through a PIN input.
//!
//! Generates structured widget configurations and event streams, then
//! checks the invariants that must hold after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pincode_tui::input::{Event, KeyCode, KeyEvent, KeyModifiers, PasteEvent};
use pincode_tui::{OptimizedBuffer, PinInput, PinInputOptions};
use std::time::{Duration, Instant};

/// Widget configuration.
#[derive(Arbitrary, Debug)]
struct Config {
    code_length: u8,
    password: bool,
    restrict_to_numbers: bool,
    editable: bool,
    controlled: bool,
}

#[derive(Arbitrary, Debug)]
enum Step {
    Char { c: char, ctrl: bool },
    Backspace,
    Paste { text: String },
    Focus,
    Blur,
    Clear,
    Shake,
    Advance { millis: u16 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    config: Config,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    let code_length = usize::from(input.config.code_length % 12);
    let mut builder = PinInputOptions::builder()
        .code_length(code_length)
        .password(input.config.password)
        .restrict_to_numbers(input.config.restrict_to_numbers)
        .editable(input.config.editable);
    if input.config.controlled {
        builder = builder.value("");
    }
    let mut pin = PinInput::new(builder.build());

    let mut now = Instant::now();
    pin.mount(now);
    let mut buf = OptimizedBuffer::new(80, 5);

    for step in input.steps.iter().take(256) {
        match step {
            Step::Char { c, ctrl } => {
                let modifiers = if *ctrl {
                    KeyModifiers::CTRL
                } else {
                    KeyModifiers::empty()
                };
                pin.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(*c), modifiers)), now);
            }
            Step::Backspace => {
                pin.handle_event(&Event::Key(KeyEvent::key(KeyCode::Backspace)), now);
            }
            Step::Paste { text } => {
                let text: String = text.chars().take(64).collect();
                pin.handle_event(&Event::Paste(PasteEvent::new(text)), now);
            }
            Step::Focus => {
                pin.handle_event(&Event::FocusGained, now);
            }
            Step::Blur => {
                pin.handle_event(&Event::FocusLost, now);
            }
            Step::Clear => pin.clear(),
            Step::Shake => {
                let _ = pin.shake(now);
            }
            Step::Advance { millis } => {
                now += Duration::from_millis(u64::from(*millis));
                pin.tick(now);
            }
        }

        let cells = pin.cells();
        assert_eq!(cells.len(), code_length);
        assert!(cells.iter().filter(|cell| cell.focused).count() <= 1);
        if input.config.restrict_to_numbers && !input.config.controlled {
            assert!(pin.value().bytes().all(|b| b.is_ascii_digit()));
        }
        pin.render_to(&mut buf, 0, 0, now);
    }

    pin.dispose();
});
