use crate::fields::collect_fields;
use crossterm::tty::IsTty;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tintlog_formatter::{Formatter, HookRegistry, Level, LogEvent};

/// output destination for rendered lines
pub enum Target {
    Stdout,
    Stderr,
    /// arbitrary sink, e.g. a file or an in-memory buffer; never treated as
    /// interactive, so piped output carries no escape sequences
    Pipe(Mutex<Box<dyn Write + Send>>),
}

impl Target {
    pub fn pipe(sink: impl Write + Send + 'static) -> Self {
        Target::Pipe(Mutex::new(Box::new(sink)))
    }

    // queried per log call, not cached: the answer is only knowable at
    // write time
    fn is_interactive(&self) -> bool {
        match self {
            Target::Stdout => io::stdout().is_tty(),
            Target::Stderr => io::stderr().is_tty(),
            Target::Pipe(_) => false,
        }
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Target::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            Target::Stderr => io::stderr().lock().write_all(line.as_bytes()),
            Target::Pipe(sink) => match sink.lock() {
                Ok(mut sink) => sink.write_all(line.as_bytes()),
                Err(_) => Ok(()),
            },
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            Target::Stdout => io::stdout().flush(),
            Target::Stderr => io::stderr().flush(),
            Target::Pipe(sink) => match sink.lock() {
                Ok(mut sink) => sink.flush(),
                Err(_) => Ok(()),
            },
        }
    }
}

/// `log::Log` implementation owning one formatter/registry pair per
/// destination.
///
/// Records above the configured level are dropped before rendering, so the
/// default `Info` filter suppresses `trace!` and `debug!` end to end.
/// Structured key-values on a record become formatter fields in visit
/// order. `log::Log::log` has no error channel, so a failed sink write is
/// dropped here; callers who need write-error propagation should use
/// [`Formatter::render_to`] directly.
pub struct TintLogger {
    level: LevelFilter,
    formatter: Formatter,
    hooks: Arc<HookRegistry>,
    target: Target,
}

impl TintLogger {
    /// logger with the default formatter and hook set, writing to stderr
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            formatter: Formatter::new(),
            hooks: Arc::new(HookRegistry::new()),
            target: Target::Stderr,
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Shared handle to the hook registry.
    ///
    /// Clone this out before [`init`](Self::init) to add or delete hooks
    /// while the logger is installed.
    pub fn hooks(&self) -> Arc<HookRegistry> {
        Arc::clone(&self.hooks)
    }

    /// install as the global `log` backend
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }
}

fn convert_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

impl log::Log for TintLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut event = LogEvent::new(convert_level(record.level()), record.args().to_string());
        event.fields = collect_fields(record.key_values());

        let line = self
            .formatter
            .render(&event, &self.hooks, self.target.is_interactive());
        let _ = self.target.write_line(&line);
    }

    fn flush(&self) {
        let _ = self.target.flush();
    }
}
