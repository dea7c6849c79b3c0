//! # tintlog-logger
//!
//! A small backend for the [`log`] facade that renders every record through
//! [`tintlog_formatter`]: level filtering, destination management, and
//! per-call terminal detection live here; everything about how a line
//! *looks* lives in the formatter.
//!
//! Structured fields attach through `log`'s key-value syntax and flow into
//! the formatter's field rendering, including the command hooks:
//!
//! ```rust,no_run
//! use log::{LevelFilter, error, info};
//! use tintlog_logger::TintLogger;
//!
//! TintLogger::new(LevelFilter::Info).init().unwrap();
//!
//! info!("Deploy starting");
//! info!(COMMAND_START = "systemctl restart app"; "");
//! error!(COMMAND_RESULT = 1; "");
//! ```
//!
//! The default target is stderr; whether a record is colorized is decided
//! per log call from the formatter's `use_color` flag and whether the
//! target is an interactive terminal at that moment. Pipes and in-memory
//! sinks never get escape sequences.

mod fields;
mod logger;

pub use logger::{Target, TintLogger};
