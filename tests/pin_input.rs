//! End-to-end behavior of the PIN input widget.
//!
//! Each test drives the widget through the same path a host loop would:
//! events in, ticks, and cell or buffer inspection out.

mod fixtures;

use fixtures::*;
use pincode_tui::pin::{GlyphElement, InputOptions, ValueMode};
use pincode_tui::{Error, PinInput, PinInputOptions, Style};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_password_reveal_then_mask() {
    init_logging();
    let t0 = Instant::now();
    let options = PinInputOptions::builder()
        .code_length(4)
        .password(true)
        .mask_delay(ms(200))
        .auto_focus(true)
        .build();
    let mut pin = PinInput::new(options);
    pin.mount(t0);

    type_str(&mut pin, "1", t0);
    assert_eq!(cell_texts(&pin), vec!["1", "", "", ""]);

    type_str(&mut pin, "2", t0 + ms(50));
    assert_eq!(cell_texts(&pin), vec!["*", "2", "", ""]);

    // The second keystroke re-armed the deadline.
    pin.tick(t0 + ms(200));
    assert!(pin.is_revealing());
    assert_eq!(cell_texts(&pin), vec!["*", "2", "", ""]);

    assert!(pin.tick(t0 + ms(250)));
    assert_eq!(cell_texts(&pin), vec!["*", "*", "", ""]);
    assert_eq!(pin.next_deadline(), None);
}

#[test]
fn test_restrict_to_numbers_paste() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let options = PinInputOptions::builder()
        .code_length(6)
        .restrict_to_numbers(true)
        .build();
    let mut pin = recorder.attach(PinInput::new(options));
    pin.focus();

    assert!(paste(&mut pin, "a1b2c3", now));
    assert_eq!(pin.value(), "123");
    assert_eq!(recorder.text_changes(), vec!["123"]);
    assert!(recorder.fulfilled().is_empty());
}

#[test]
fn test_restrict_to_numbers_typing() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let options = PinInputOptions::builder()
        .code_length(6)
        .restrict_to_numbers(true)
        .build();
    let mut pin = recorder.attach(PinInput::new(options));
    pin.focus();

    type_str(&mut pin, "a1b2c3", now);
    assert_eq!(pin.value(), "123");
    assert_eq!(
        recorder.text_changes(),
        vec!["", "1", "1", "12", "12", "123"]
    );
}

#[test]
fn test_fulfill_on_every_full_change() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let mut pin = recorder.attach(PinInput::new(PinInputOptions::default()));
    pin.focus();

    type_str(&mut pin, "1234", now);
    assert_eq!(recorder.fulfilled(), vec!["1234"]);

    // A full field rejects more input, so nothing new is reported.
    type_str(&mut pin, "5", now);
    assert_eq!(recorder.fulfilled(), vec!["1234"]);

    press_backspace(&mut pin, now);
    type_str(&mut pin, "9", now);
    assert_eq!(recorder.fulfilled(), vec!["1234", "1239"]);
}

#[test]
fn test_backspace_only_when_empty() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let mut pin = recorder.attach(PinInput::new(PinInputOptions::default()));
    pin.focus();

    type_str(&mut pin, "12", now);
    press_backspace(&mut pin, now);
    press_backspace(&mut pin, now);
    assert_eq!(recorder.backspaces(), 0);
    assert_eq!(pin.value(), "");

    press_backspace(&mut pin, now);
    assert_eq!(recorder.backspaces(), 1);
}

#[test]
fn test_callback_order_for_one_keystroke() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let options = PinInputOptions::builder().code_length(1).build();
    let mut pin = recorder.attach(PinInput::new(options));
    pin.focus();
    type_str(&mut pin, "7", now);
    pin.blur();

    assert_eq!(
        recorder.calls(),
        vec![
            Call::Focus,
            Call::TextChange("7".to_string()),
            Call::Fulfill("7".to_string()),
            Call::Blur,
        ]
    );
}

#[test]
fn test_controlled_value_follows_host() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let options = PinInputOptions::builder().value("").build();
    let mut pin = recorder.attach(PinInput::new(options));
    assert_eq!(pin.mode(), ValueMode::Controlled);
    pin.focus();

    // The host echoes every change back, upper-casing along the way.
    for c in "ab".chars() {
        type_str(&mut pin, &c.to_string(), now);
        let next = recorder.text_changes().last().cloned().unwrap_or_default();
        pin.set_value(next.to_uppercase());
    }
    assert_eq!(pin.value(), "AB");
    assert_eq!(cell_texts(&pin), vec!["A", "B", "", ""]);
    assert_eq!(focused_cells(&pin), vec![2]);
}

#[test]
fn test_controlled_value_ignored_changes_revert() {
    let now = Instant::now();
    let mut pin = PinInput::new(PinInputOptions::builder().value("1").build());
    pin.focus();
    type_str(&mut pin, "2", now);
    assert_eq!(pin.value(), "1");
    assert_eq!(pin.field().text(), "1");
}

#[test]
fn test_focus_moves_with_value() {
    let now = Instant::now();
    let mut pin = PinInput::new(PinInputOptions::default());
    assert!(focused_cells(&pin).is_empty());

    pin.focus();
    assert_eq!(focused_cells(&pin), vec![0]);
    type_str(&mut pin, "12", now);
    assert_eq!(focused_cells(&pin), vec![2]);
    type_str(&mut pin, "34", now);
    assert!(focused_cells(&pin).is_empty());

    pin.blur();
    press_backspace(&mut pin, now);
    assert!(focused_cells(&pin).is_empty());
}

#[test]
fn test_dispose_before_deadline() {
    let t0 = Instant::now();
    let recorder = Recorder::new();
    let options = PinInputOptions::builder().password(true).build();
    let mut pin = recorder.attach(PinInput::new(options));
    pin.focus();
    type_str(&mut pin, "1", t0);
    assert!(pin.next_deadline().is_some());
    recorder.clear();

    pin.dispose();
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_clear_does_not_report_change() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let mut pin = recorder.attach(PinInput::new(PinInputOptions::default()));
    pin.focus();
    type_str(&mut pin, "12", now);
    recorder.clear();

    pin.clear();
    assert_eq!(pin.value(), "");
    assert!(recorder.calls().is_empty());
    assert_eq!(focused_cells(&pin), vec![0]);
}

#[test]
fn test_animate_rejected_when_disabled() {
    let now = Instant::now();
    let mut pin = PinInput::new(PinInputOptions::builder().animated(false).build());
    let err = pin.shake(now).unwrap_err();
    assert_eq!(err, Error::AnimationsDisabled);
    assert_eq!(err.to_string(), "animations are disabled");

    pin.set_animated(true);
    let ticket = pin.shake(now).unwrap();
    assert!(pin.is_animating(now + ms(600)));
    assert!(ticket.is_finished(now + ms(650)));
}

#[test]
fn test_animate_by_name() {
    let now = Instant::now();
    let mut pin = PinInput::new(PinInputOptions::default());
    let ticket = pin.animate_named("bounce", ms(300), now).unwrap();
    assert_eq!(ticket.ends_at(), now + ms(300));
    assert!(matches!(
        pin.animate_named("spin", ms(300), now),
        Err(Error::UnknownAnimation(name)) if name == "spin"
    ));
}

#[test]
fn test_not_editable_still_focuses() {
    let now = Instant::now();
    let recorder = Recorder::new();
    let options = PinInputOptions::builder().editable(false).build();
    let mut pin = recorder.attach(PinInput::new(options));
    pin.focus();
    type_str(&mut pin, "12", now);
    press_backspace(&mut pin, now);
    assert_eq!(recorder.calls(), vec![Call::Focus]);

    pin.set_editable(true);
    type_str(&mut pin, "1", now);
    assert_eq!(pin.value(), "1");
}

#[test]
fn test_select_text_on_focus_replaces_code() {
    let now = Instant::now();
    let input_options = InputOptions::from_pairs([("select_text_on_focus", "true")]).unwrap();
    let options = PinInputOptions::builder()
        .input_options(input_options)
        .build();
    let mut pin = PinInput::new(options);
    pin.focus();
    type_str(&mut pin, "12", now);
    pin.blur();
    pin.focus();
    type_str(&mut pin, "9", now);
    assert_eq!(pin.value(), "9");
}

#[test]
fn test_element_mask() {
    let now = Instant::now();
    let options = PinInputOptions::builder()
        .password(true)
        .mask_delay(Duration::ZERO)
        .mask(pincode_tui::Content::element(GlyphElement::new('●', Style::NONE)))
        .build();
    let mut pin = PinInput::new(options);
    pin.focus();
    type_str(&mut pin, "12", now);
    pin.tick(now);
    assert_eq!(cell_texts(&pin), vec!["<element>", "<element>", "", ""]);
}

#[test]
fn test_grapheme_clusters_fill_one_cell() {
    let now = Instant::now();
    let mut pin = PinInput::new(PinInputOptions::builder().code_length(3).build());
    pin.focus();
    paste(&mut pin, "e\u{301}👍🏽x", now);
    assert_eq!(cell_texts(&pin), vec!["e\u{301}", "👍🏽", "x"]);
    assert!(focused_cells(&pin).is_empty());
}

#[test]
fn test_zero_length_renders_nothing() {
    let now = Instant::now();
    let mut pin = PinInput::new(PinInputOptions::builder().code_length(0).build());
    pin.focus();
    assert!(pin.cells().is_empty());
    assert_eq!(pin.size().width, 0);
    assert_eq!(render_text(&pin, now), "");
}
