//! Showcase: render every severity, plain fields, and the command hooks.
//!
//! Colors show up when stdout is a terminal; pipe the output to see the
//! plain rendition.
//!
//! Run with: cargo run --example showcase

use anyhow::Result;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use tintlog_formatter::{COMMAND_RESULT, COMMAND_START, Formatter, HookRegistry, Level, LogEvent};

fn main() -> Result<()> {
    let formatter = Formatter::new();
    let registry = HookRegistry::new();

    let mut stdout = io::stdout();
    let interactive = stdout.is_tty();

    let events = vec![
        LogEvent::new(Level::Trace, "Something very low level."),
        LogEvent::new(Level::Debug, "Useful debugging information."),
        LogEvent::new(Level::Info, "Something noteworthy happened!"),
        LogEvent::new(Level::Warn, "You should probably take a look at this."),
        LogEvent::new(Level::Error, "Something failed but I'm not quitting."),
        LogEvent::new(Level::Info, "Example with fields")
            .with_field("event", "event")
            .with_field("topic", "topic"),
        LogEvent::new(Level::Debug, "Example of a failing command."),
        LogEvent::new(Level::Info, "").with_field(COMMAND_START, "ls -al /bogus"),
        LogEvent::new(Level::Error, "").with_field(COMMAND_RESULT, 2),
        LogEvent::new(Level::Debug, "Example of a successful command."),
        LogEvent::new(Level::Info, "").with_field(COMMAND_START, "ls -al /"),
        LogEvent::new(Level::Info, "").with_field(COMMAND_RESULT, 0),
    ];

    for event in &events {
        formatter.render_to(&mut stdout, event, &registry, interactive)?;
    }
    stdout.flush()?;

    Ok(())
}
