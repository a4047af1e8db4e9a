//! `pincode_tui` - Segmented PIN / one-time-code entry for terminal UIs
//!
//! A single [`PinInput`] widget that draws a row of code cells into a
//! cell-based [`OptimizedBuffer`], with password masking, a delayed reveal
//! of the newest character, digit filtering and small cell animations.
//!
//! The host owns the terminal. It converts whatever it reads into
//! [`Event`]s, calls [`PinInput::tick`] from its loop, and copies the
//! buffer to the screen.

// Crate-level lint configuration
#![warn(unsafe_code)] // No unsafe is expected; flag it if it appears
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color and animation math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow pin::PinInputOptions etc
#![allow(clippy::struct_excessive_bools)] // Widget options need multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod buffer;
pub mod cell;
pub mod color;
pub mod error;
pub mod event;
pub mod input;
pub mod layout;
pub mod pin;
pub mod style;
pub mod unicode;

// Re-export core types at crate root
pub use cell::{Cell, CellContent};
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use style::{BorderKind, CellStyle, ContainerStyle, Style, TextAttributes};

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, PasteEvent};

// Re-export commonly used types
pub use buffer::OptimizedBuffer;
pub use layout::{LayoutDirection, Rect, Size};
pub use pin::{
    Animation, AnimationTicket, CellElement, Content, InputOptions, KeyboardType, PinInput,
    PinInputOptions, ValueMode,
};
