//! PIN / one-time-code input widget.
//!
//! [`PinInput`] renders a fixed row of cells, one per expected character,
//! backed by an invisible [`HiddenField`] that receives the keystrokes.
//! The widget is driven cooperatively: the host feeds it [`Event`]s,
//! calls [`PinInput::tick`] from its loop, and asks it to draw into an
//! [`OptimizedBuffer`].
//!
//! # Examples
//!
//! ```
//! use pincode_tui::{Event, KeyEvent, OptimizedBuffer, PinInput, PinInputOptions};
//! use std::time::Instant;
//!
//! let options = PinInputOptions::builder().code_length(4).auto_focus(true).build();
//! let mut pin = PinInput::new(options).on_fulfill(|code| println!("done: {code}"));
//!
//! let now = Instant::now();
//! pin.mount(now);
//! for c in "1234".chars() {
//!     pin.handle_event(&Event::Key(KeyEvent::char(c)), now);
//! }
//! assert_eq!(pin.value(), "1234");
//!
//! let mut buf = OptimizedBuffer::new(40, 5);
//! pin.render_to(&mut buf, 0, 0, now);
//! ```

pub mod animation;
pub mod cells;
pub mod controller;
pub mod field;
pub mod mask;
pub mod options;
pub mod render;

pub use animation::{Animation, AnimationFrame, AnimationTicket, AnimationTrack, Iterations};
pub use cells::{CellFill, CellInputs, CellStyles, CellView, derive_cells};
pub use controller::{ChangeOutcome, InputController, KeyOutcome, normalize};
pub use field::HiddenField;
pub use mask::MaskTimer;
pub use options::{
    CellElement, Content, GlyphElement, InputOptions, KeyboardType, PinInputOptions,
    PinInputOptionsBuilder, ValueMode,
};
pub use render::RowFrame;

use crate::buffer::OptimizedBuffer;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log, names};
use crate::input::{Event, KeyEvent};
use crate::layout::{RowGeometry, Size};
use crate::unicode;
use std::fmt;
use std::time::{Duration, Instant};

type TextCallback = Box<dyn FnMut(&str)>;
type NotifyCallback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    on_text_change: Option<TextCallback>,
    on_fulfill: Option<TextCallback>,
    on_backspace: Option<NotifyCallback>,
    on_focus: Option<NotifyCallback>,
    on_blur: Option<NotifyCallback>,
}

/// A row of code cells over a hidden text field.
pub struct PinInput {
    options: PinInputOptions,
    mode: ValueMode,
    value: String,
    field: HiddenField,
    controller: InputController,
    mask_timer: MaskTimer,
    control_track: Option<AnimationTrack>,
    /// Focused index and the instant its focus animation started.
    focus_anchor: Option<(usize, Instant)>,
    callbacks: Callbacks,
}

impl PinInput {
    /// Create a widget from options.
    ///
    /// `options.value` selects controlled mode and seeds the value; it is
    /// moved out of the stored options.
    #[must_use]
    pub fn new(mut options: PinInputOptions) -> Self {
        let mode = options.value_mode();
        let value = options.value.take().unwrap_or_default();
        let mut field = HiddenField::new(
            options.code_length,
            options.editable,
            options.keyboard_type,
            options.disable_fullscreen_ui,
            options.input_options.clone(),
        );
        field.set_text(&value);
        let controller = InputController::new(
            options.code_length,
            options.password,
            options.restrict_to_numbers,
        );
        Self {
            options,
            mode,
            value,
            field,
            controller,
            mask_timer: MaskTimer::new(),
            control_track: None,
            focus_anchor: None,
            callbacks: Callbacks::default(),
        }
    }

    /// Called with the normalized code after every change.
    #[must_use]
    pub fn on_text_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_text_change = Some(Box::new(callback));
        self
    }

    /// Called whenever a change leaves exactly `code_length` characters.
    #[must_use]
    pub fn on_fulfill(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_fulfill = Some(Box::new(callback));
        self
    }

    /// Called when Backspace is pressed on an empty code.
    #[must_use]
    pub fn on_backspace(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_backspace = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_focus(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_focus = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_blur = Some(Box::new(callback));
        self
    }

    /// Attach the widget to the host loop, applying `auto_focus`.
    pub fn mount(&mut self, now: Instant) -> bool {
        let focused = self.options.auto_focus && self.focus();
        self.sync_focus_anchor(now);
        focused
    }

    /// Current code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// Stored options. `value` is always `None` here; see [`PinInput::value`].
    #[must_use]
    pub fn options(&self) -> &PinInputOptions {
        &self.options
    }

    #[must_use]
    pub fn field(&self) -> &HiddenField {
        &self.field
    }

    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.options.test_id.as_deref()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.field.is_focused()
    }

    /// Whether the newest character is currently shown unmasked.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.mask_timer.is_revealing()
    }

    /// Push a new value from the host.
    ///
    /// No callbacks fire and the mask timer is untouched.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.field.set_text(&self.value);
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.options.editable = editable;
        self.field.set_editable(editable);
    }

    /// Turn animations on or off. Turning them off stops any running one.
    pub fn set_animated(&mut self, animated: bool) {
        self.options.animated = animated;
        if !animated {
            self.control_track = None;
        }
    }

    /// Give the hidden field focus. Returns `false` if it already had it.
    pub fn focus(&mut self) -> bool {
        if !self.field.focus() {
            return false;
        }
        self.focus_anchor = None;
        if let Some(callback) = self.callbacks.on_focus.as_mut() {
            callback();
        }
        emit_event(names::FOCUS, self.options.test_id.as_deref().unwrap_or(""));
        true
    }

    /// Take focus away. Returns `false` if the field was not focused.
    pub fn blur(&mut self) -> bool {
        if !self.field.blur() {
            return false;
        }
        self.focus_anchor = None;
        if let Some(callback) = self.callbacks.on_blur.as_mut() {
            callback();
        }
        emit_event(names::BLUR, self.options.test_id.as_deref().unwrap_or(""));
        true
    }

    /// Clear the hidden field without reporting a change.
    ///
    /// In uncontrolled mode the value is cleared as well.
    pub fn clear(&mut self) {
        self.field.clear();
        if self.mode == ValueMode::Uncontrolled {
            self.value.clear();
        }
    }

    /// Shake the whole control.
    pub fn shake(&mut self, now: Instant) -> Result<AnimationTicket> {
        self.animate(Animation::Shake, animation::SHAKE_DURATION, now)
    }

    /// Play a one-shot animation on the whole control.
    ///
    /// Replaces any animation already running.
    pub fn animate(
        &mut self,
        animation: Animation,
        duration: Duration,
        now: Instant,
    ) -> Result<AnimationTicket> {
        if !self.options.animated {
            emit_log(
                LogLevel::Warn,
                &format!("pin input: {animation} rejected, animations are disabled"),
            );
            return Err(Error::AnimationsDisabled);
        }
        self.control_track = Some(AnimationTrack::once(animation, now, duration));
        Ok(AnimationTicket::new(animation, now + duration))
    }

    /// [`PinInput::animate`] by name.
    pub fn animate_named(
        &mut self,
        name: &str,
        duration: Duration,
        now: Instant,
    ) -> Result<AnimationTicket> {
        let animation = name.parse::<Animation>()?;
        self.animate(animation, duration, now)
    }

    /// Whether a whole-control animation is still playing.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.control_track
            .is_some_and(|track| !track.is_finished(now))
    }

    /// Feed one input event. Returns `true` if the control needs a redraw.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        let dirty = match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Paste(paste) => self.handle_paste(paste.content(), now),
            Event::FocusGained => self.focus(),
            Event::FocusLost => self.blur(),
        };
        self.sync_focus_anchor(now);
        dirty
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        if !self.field.is_editable() {
            return false;
        }
        if self.controller.on_key_press(key, &self.value) == KeyOutcome::BackspaceOnEmpty {
            if let Some(callback) = self.callbacks.on_backspace.as_mut() {
                callback();
            }
            emit_event(names::BACKSPACE, self.options.test_id.as_deref().unwrap_or(""));
        }

        let raw = if key.is_deletion() {
            self.field.delete_backward()
        } else {
            key.text_input().and_then(|c| self.field.insert_char(c))
        };
        raw.is_some_and(|raw| {
            self.apply_change(&raw, now);
            true
        })
    }

    fn handle_paste(&mut self, text: &str, now: Instant) -> bool {
        if !self.field.is_editable() {
            return false;
        }
        self.field.insert_str(text).is_some_and(|raw| {
            self.apply_change(&raw, now);
            true
        })
    }

    fn apply_change(&mut self, raw: &str, now: Instant) {
        let outcome = self.controller.on_change(raw, &self.value);

        if outcome.text_changed {
            if let Some(callback) = self.callbacks.on_text_change.as_mut() {
                callback(&outcome.code);
            }
        }
        if outcome.fulfilled {
            if let Some(callback) = self.callbacks.on_fulfill.as_mut() {
                callback(&outcome.code);
            }
            let length = unicode::grapheme_count(&outcome.code);
            emit_event(names::FULFILL, &format!("{{\"length\":{length}}}"));
        }

        if outcome.grew {
            self.mask_timer.arm(now, self.options.mask_delay);
            emit_log(LogLevel::Debug, "pin input: mask reveal armed");
        } else {
            self.mask_timer.reset();
        }

        if self.mode == ValueMode::Uncontrolled {
            self.value = unicode::truncate_graphemes(&outcome.code, self.options.code_length)
                .to_string();
        }
        self.field.set_text(&self.value);
    }

    /// Advance timers. Returns `true` if the control needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut dirty = false;
        if self.mask_timer.poll(now) {
            emit_log(LogLevel::Debug, "pin input: mask reveal cleared");
            dirty = true;
        }
        if self.control_track.is_some_and(|track| track.is_finished(now)) {
            self.control_track = None;
            dirty = true;
        }
        self.sync_focus_anchor(now);
        dirty || self.control_track.is_some() || self.focus_animation().is_some()
    }

    /// Earliest instant at which [`PinInput::tick`] will change state.
    ///
    /// Focus animations loop forever and are not included; hosts that
    /// animate them redraw at their own frame rate.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let mask = self.mask_timer.next_deadline();
        let control = self.control_track.and_then(|track| track.ends_at());
        match (mask, control) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Row geometry for the current options.
    #[must_use]
    pub fn geometry(&self) -> RowGeometry {
        RowGeometry {
            code_length: self.options.code_length,
            cell_size: self.options.cell_size,
            cell_spacing: self.options.cell_spacing,
            padding_x: self.options.container_style.padding_x,
            padding_y: self.options.container_style.padding_y,
            direction: self.options.direction,
        }
    }

    /// Size of the whole control in cells.
    #[must_use]
    pub fn size(&self) -> Size {
        self.geometry().outer_size()
    }

    fn focused_index(&self) -> Option<usize> {
        cells::focused_index(
            unicode::grapheme_count(&self.value),
            self.options.code_length,
            self.field.is_focused(),
        )
    }

    /// Derived view of every cell.
    #[must_use]
    pub fn cells(&self) -> Vec<CellView> {
        derive_cells(&CellInputs {
            value: &self.value,
            code_length: self.options.code_length,
            has_focus: self.field.is_focused(),
            revealing: self.mask_timer.is_revealing(),
            password: self.options.password,
            placeholder: self.options.placeholder.as_ref(),
            mask: &self.options.mask,
        })
    }

    fn sync_focus_anchor(&mut self, now: Instant) {
        match self.focused_index() {
            Some(index) if self.focus_anchor.is_none_or(|(anchored, _)| anchored != index) => {
                self.focus_anchor = Some((index, now));
            }
            Some(_) => {}
            None => self.focus_anchor = None,
        }
    }

    fn focus_animation(&self) -> Option<Animation> {
        if !self.options.animated {
            return None;
        }
        self.focused_index()?;
        self.options.animation_focused
    }

    fn focus_frame(&self, now: Instant) -> AnimationFrame {
        let (Some(animation), Some(index)) = (self.focus_animation(), self.focused_index()) else {
            return AnimationFrame::IDLE;
        };
        let started = match self.focus_anchor {
            Some((anchored, at)) if anchored == index => at,
            _ => now,
        };
        AnimationTrack::looping(animation, started, animation::FOCUS_PERIOD).frame(now)
    }

    /// Render the control with its top-left corner at `(dest_x, dest_y)`.
    pub fn render_to(&self, output: &mut OptimizedBuffer, dest_x: i32, dest_y: i32, now: Instant) {
        let cells = self.cells();
        let frame = RowFrame {
            geometry: self.geometry(),
            container: self.options.container_style,
            styles: CellStyles {
                cell: self.options.cell_style,
                cell_focused: self.options.cell_style_focused,
                cell_filled: self.options.cell_style_filled,
                text: self.options.text_style,
                text_focused: self.options.text_style_focused,
            },
            cells: &cells,
            control: self
                .control_track
                .map_or(AnimationFrame::IDLE, |track| track.frame(now)),
            focused_cell: self.focus_frame(now),
        };
        frame.render_to(output, dest_x, dest_y);
    }

    /// Tear the widget down, cancelling any pending mask deadline.
    pub fn dispose(mut self) {
        self.mask_timer.cancel();
        self.control_track = None;
        emit_log(LogLevel::Debug, "pin input: disposed");
    }
}

impl fmt::Debug for PinInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.options.password {
            "<masked>"
        } else {
            self.value.as_str()
        };
        f.debug_struct("PinInput")
            .field("mode", &self.mode)
            .field("value", &shown)
            .field("focused", &self.field.is_focused())
            .field("mask_timer", &self.mask_timer)
            .field("control_track", &self.control_track)
            .finish_non_exhaustive()
    }
}
