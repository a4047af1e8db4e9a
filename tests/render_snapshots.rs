//! Snapshot tests for rendered PIN inputs.
//!
//! Borders use the ASCII set so that snapshots stay readable in any
//! terminal; the focused cell switches to the double set.

mod fixtures;

use fixtures::*;
use pincode_tui::pin::{Animation, PinInputOptionsBuilder};
use pincode_tui::{
    BorderKind, CellStyle, ContainerStyle, LayoutDirection, OptimizedBuffer, PinInput,
    PinInputOptions, Rgba, TextAttributes,
};
use serde::Serialize;
use std::time::{Duration, Instant};

fn ascii_options() -> PinInputOptionsBuilder {
    PinInputOptions::builder()
        .cell_style(CellStyle::border(BorderKind::Ascii, Rgba::GRAY))
        .cell_style_focused(CellStyle::default().with_border(BorderKind::Double))
        .animation_focused(None)
}

#[test]
fn test_snapshot_plain_code() {
    init_logging();
    let now = Instant::now();
    let mut pin = PinInput::new(ascii_options().build());
    type_str(&mut pin, "12", now);

    insta::assert_snapshot!(render_text(&pin, now), @r"
+---+ +---+ +---+ +---+
| 1 | | 2 | |   | |   |
+---+ +---+ +---+ +---+
");
}

#[test]
fn test_snapshot_password_with_focus() {
    let now = Instant::now();
    let mut pin = PinInput::new(ascii_options().password(true).build());
    pin.focus();
    type_str(&mut pin, "12", now);

    insta::assert_snapshot!(render_text(&pin, now), @r"
+---+ +---+ ╔═══╗ +---+
| * | | 2 | ║   ║ |   |
+---+ +---+ ╚═══╝ +---+
");
}

#[test]
fn test_snapshot_rtl_placeholder() {
    let now = Instant::now();
    let options = ascii_options()
        .code_length(3)
        .cell_size(3, 3)
        .placeholder('_')
        .direction(LayoutDirection::Rtl)
        .build();
    let mut pin = PinInput::new(options);
    type_str(&mut pin, "1", now);

    insta::assert_snapshot!(render_text(&pin, now), @r"
+-+ +-+ +-+
|_| |_| |1|
+-+ +-+ +-+
");
}

#[test]
fn test_container_padding_and_background() {
    let now = Instant::now();
    let options = ascii_options()
        .code_length(2)
        .cell_size(3, 3)
        .container_style(ContainerStyle::default().with_background(Rgba::BLUE).with_padding(1, 1))
        .build();
    let mut pin = PinInput::new(options);
    type_str(&mut pin, "1", now);

    assert_eq!(pin.size().width, 9);
    assert_eq!(pin.size().height, 5);

    let mut buf = OptimizedBuffer::new(9, 5);
    pin.render_to(&mut buf, 0, 0, now);
    assert_eq!(buf.to_text(), "\n +-+ +-+\n |1| | |\n +-+ +-+");
    assert_eq!(buf.get(0, 0).unwrap().bg, Rgba::BLUE);
    assert_eq!(buf.get(4, 2).unwrap().bg, Rgba::BLUE);
}

#[test]
fn test_shake_offsets_whole_control() {
    let t0 = Instant::now();
    let options = ascii_options().code_length(1).cell_size(3, 3).build();
    let mut pin = PinInput::new(options);
    pin.shake(t0).unwrap();

    let mut buf = OptimizedBuffer::new(6, 3);
    pin.render_to(&mut buf, 1, 0, t0 + Duration::from_millis(100));
    assert_eq!(buf.row_text(0), "+-+");

    let mut buf = OptimizedBuffer::new(6, 3);
    pin.render_to(&mut buf, 1, 0, t0 + Duration::from_millis(700));
    assert_eq!(buf.row_text(0), " +-+");
}

#[test]
fn test_focus_pulse_bolds_border_at_peak() {
    let t0 = Instant::now();
    let options = ascii_options()
        .code_length(2)
        .cell_size(3, 3)
        .animation_focused(Some(Animation::Pulse))
        .build();
    let mut pin = PinInput::new(options);
    pin.focus();
    pin.tick(t0);

    let mut buf = OptimizedBuffer::new(7, 3);
    pin.render_to(&mut buf, 0, 0, t0 + Duration::from_millis(250));
    let corner = buf.get(0, 0).unwrap();
    assert!(corner.attributes.contains(TextAttributes::BOLD));
    assert_ne!(corner.fg, Rgba::GRAY);

    let other = buf.get(4, 0).unwrap();
    assert!(!other.attributes.contains(TextAttributes::BOLD));
}

#[test]
fn test_focus_flash_hides_border() {
    let t0 = Instant::now();
    let options = ascii_options()
        .code_length(1)
        .cell_size(3, 3)
        .animation_focused(Some(Animation::Flash))
        .build();
    let mut pin = PinInput::new(options);
    pin.focus();
    pin.tick(t0);

    let mut buf = OptimizedBuffer::new(3, 3);
    pin.render_to(&mut buf, 0, 0, t0 + Duration::from_millis(125));
    assert_eq!(buf.to_text(), "");

    let mut buf = OptimizedBuffer::new(3, 3);
    pin.render_to(&mut buf, 0, 0, t0 + Duration::from_millis(250));
    assert_eq!(buf.row_text(0), "╔═╗");
}

#[test]
fn test_animations_off_keeps_focus_static() {
    let t0 = Instant::now();
    let options = ascii_options()
        .code_length(1)
        .cell_size(3, 3)
        .animated(false)
        .animation_focused(Some(Animation::Flash))
        .build();
    let mut pin = PinInput::new(options);
    pin.focus();

    let mut buf = OptimizedBuffer::new(3, 3);
    pin.render_to(&mut buf, 0, 0, t0 + Duration::from_millis(125));
    assert_eq!(buf.row_text(0), "╔═╗");
}

#[derive(Serialize)]
struct CellSummary {
    index: usize,
    filled: bool,
    focused: bool,
    shows: String,
}

#[test]
fn test_cell_summary_json() {
    let now = Instant::now();
    let mut pin = PinInput::new(ascii_options().code_length(3).password(true).build());
    pin.focus();
    type_str(&mut pin, "12", now);

    let texts = cell_texts(&pin);
    let summary: Vec<CellSummary> = pin
        .cells()
        .iter()
        .zip(texts)
        .map(|(view, shows)| CellSummary {
            index: view.index,
            filled: view.filled,
            focused: view.focused,
            shows,
        })
        .collect();

    insta::assert_json_snapshot!(summary, @r#"
[
  {
    "index": 0,
    "filled": true,
    "focused": false,
    "shows": "*"
  },
  {
    "index": 1,
    "filled": true,
    "focused": false,
    "shows": "2"
  },
  {
    "index": 2,
    "filled": false,
    "focused": true,
    "shows": ""
  }
]
"#);
}
