//! # tintlog-formatter
//!
//! A log-line formatter: one structured event in, one formatted, optionally
//! colorized, newline-terminated line out.
//!
//! ## Overview
//!
//! The crate is a pure rendering core. It does not collect events, filter
//! by level, or manage output streams; that is the hosting logger's job
//! (see the `tintlog-logger` crate for a `log`-facade backend built on top
//! of this one). What it does do:
//!
//! - render the timestamp through a configurable chrono layout
//! - paint the message with a per-severity style
//! - lay fields out at a fixed column with a `|` separator, in the order
//!   the caller attached them
//! - dispatch fields with registered names to custom render hooks
//!
//! ## Color handling
//!
//! Styles are configured on the [`Formatter`] but only *requested* there.
//! Each render call takes the destination's interactive-ness as an
//! argument and resolves effective colorization per call: escape sequences
//! are emitted only when `use_color` is set *and* the destination is an
//! interactive terminal. Piped output stays clean automatically, and
//! escape sequences never participate in column alignment.
//!
//! ## Quick start
//!
//! ```rust
//! use tintlog_formatter::{Formatter, HookRegistry, Level, LogEvent};
//!
//! let formatter = Formatter::new();
//! let registry = HookRegistry::new();
//!
//! let event = LogEvent::new(Level::Info, "Mounted volume")
//!     .with_field("device", "/dev/sda1")
//!     .with_field("read_only", false);
//!
//! // `false`: the destination is not an interactive terminal
//! let line = formatter.render(&event, &registry, false);
//! assert!(line.ends_with('\n'));
//! ```
//!
//! ## Command hooks
//!
//! Two hooks ship pre-registered and render a command execution as a
//! matched pair of log calls. The renderer keeps no state between the two
//! calls; the pairing lives entirely in the rendered text:
//!
//! ```rust
//! use tintlog_formatter::{COMMAND_RESULT, COMMAND_START, Formatter, HookRegistry, Level, LogEvent};
//!
//! let mut formatter = Formatter::new();
//! formatter.time_format = String::new();
//! let registry = HookRegistry::new();
//!
//! let started = LogEvent::new(Level::Info, "").with_field(COMMAND_START, "ls -al /");
//! assert_eq!(formatter.render(&started, &registry, false), "Running ls -al /\n");
//!
//! let finished = LogEvent::new(Level::Info, "").with_field(COMMAND_RESULT, 0);
//! assert_eq!(formatter.render(&finished, &registry, false), " ==> OK\n");
//! ```
//!
//! Hooks are ordinary [`HookRegistry`] entries: delete them to fall back to
//! plain `key=value` rendering, or register your own for any field name
//! (see [`FieldHook`]).

pub mod event;
pub mod formatter;
pub mod hooks;

pub(crate) mod palette;

// re-export the public surface at the crate root
pub use event::{FieldValue, Level, LogEvent, Quoted};
pub use formatter::{
    ColorMode, DEFAULT_FIELDS_COLUMN, DEFAULT_TIME_FORMAT, Formatter, Painted,
};
pub use hooks::{COMMAND_RESULT, COMMAND_START, FieldHook, HookRegistry, command_result, command_start};
