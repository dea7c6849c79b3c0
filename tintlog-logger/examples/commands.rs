//! Demo: drive the formatter through the `log` facade.
//!
//! Trace/debug lines are suppressed by the Info filter; the command pair
//! renders through the built-in hooks.
//!
//! Run with: cargo run --example commands

use anyhow::Result;
use log::{LevelFilter, debug, error, info, trace, warn};
use tintlog_logger::{Target, TintLogger};

fn main() -> Result<()> {
    TintLogger::new(LevelFilter::Info)
        .with_target(Target::Stdout)
        .init()?;

    trace!("Something very low level.");
    debug!("Useful debugging information.");
    info!("Something noteworthy happened!");
    warn!("You should probably take a look at this.");
    error!("Something failed but I'm not quitting.");

    info!(event = "deploy", topic = "release"; "Example with fields");

    info!(COMMAND_START = "ls -al /"; "");
    info!(COMMAND_RESULT = 0; "");

    info!(COMMAND_START = "ls -al /bogus"; "");
    error!(COMMAND_RESULT = 2; "");

    log::logger().flush();
    Ok(())
}
