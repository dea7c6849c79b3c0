use crate::event::{Level, LogEvent};
use crate::hooks::HookRegistry;
use crate::palette;
use crossterm::style::ContentStyle;
use std::fmt::{self, Write as _};
use std::io;
use unicode_width::UnicodeWidthStr;

/// default strftime layout, `2025-01-15 10:30:00` style
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// default column at which field rendering starts
pub const DEFAULT_FIELDS_COLUMN: usize = 70;

/// Per-render color capability, resolved once per [`Formatter::render`]
/// call from the color-enabled flag and the destination's terminal-ness.
///
/// Hooks receive a `ColorMode` and paint through it so their output follows
/// the same suppression rules as the rest of the line.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode {
    enabled: bool,
}

impl ColorMode {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// wrap `content` in `style` when color is on, pass it through untouched
    /// when off
    pub fn paint<D: fmt::Display>(self, style: ContentStyle, content: D) -> Painted<D> {
        Painted {
            style: self.enabled.then_some(style),
            content,
        }
    }
}

/// display adapter returned by [`ColorMode::paint`]
pub struct Painted<D> {
    style: Option<ContentStyle>,
    content: D,
}

impl<D: fmt::Display> fmt::Display for Painted<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Some(style) => style.apply(&self.content).fmt(f),
            None => self.content.fmt(f),
        }
    }
}

/// Formatter configuration: one instance per output destination.
///
/// All knobs are public and can be updated after construction. Colors are
/// only requested here; whether a render actually carries escape sequences
/// is decided per call from `use_color` and the destination's
/// interactive-ness.
#[derive(Debug, Clone)]
pub struct Formatter {
    /// chrono strftime layout for the timestamp; an empty layout suppresses
    /// the timestamp (see [`Formatter::render`] for the column-count caveat)
    pub time_format: String,
    /// column at which field rendering starts when the message is shorter;
    /// 0 disables alignment entirely
    pub fields_column: usize,
    /// caller-level color switch; the destination must also be interactive
    pub use_color: bool,

    pub time_style: ContentStyle,
    pub panic_style: ContentStyle,
    pub fatal_style: ContentStyle,
    pub error_style: ContentStyle,
    pub warn_style: ContentStyle,
    pub info_style: ContentStyle,
    pub debug_style: ContentStyle,
    pub trace_style: ContentStyle,
    pub key_style: ContentStyle,
    pub value_style: ContentStyle,
    pub command_header_style: ContentStyle,
    pub command_style: ContentStyle,
    pub command_success_style: ContentStyle,
    pub command_fail_style: ContentStyle,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// a formatter with the default palette and layout
    pub fn new() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            fields_column: DEFAULT_FIELDS_COLUMN,
            use_color: true,
            time_style: palette::time(),
            panic_style: palette::panic(),
            fatal_style: palette::fatal(),
            error_style: palette::error(),
            warn_style: palette::warn(),
            info_style: palette::info(),
            debug_style: palette::debug(),
            trace_style: palette::trace(),
            key_style: palette::key(),
            value_style: palette::value(),
            command_header_style: palette::command_header(),
            command_style: palette::command(),
            command_success_style: palette::command_success(),
            command_fail_style: palette::command_fail(),
        }
    }

    /// style configured for the given severity
    pub fn level_style(&self, level: Level) -> ContentStyle {
        match level {
            Level::Panic => self.panic_style,
            Level::Fatal => self.fatal_style,
            Level::Error => self.error_style,
            Level::Warn => self.warn_style,
            Level::Info => self.info_style,
            Level::Debug => self.debug_style,
            Level::Trace => self.trace_style,
        }
    }

    /// Render one event into a newline-terminated line.
    ///
    /// The line starts with the timestamp (when `time_format` is non-empty),
    /// then the message painted with the severity's style. Fields follow,
    /// starting at `fields_column` when the message is short enough, with a
    /// `|` separator between message and fields. A field whose name has a
    /// hook registered in `registry` is rendered by that hook; every other
    /// field renders as `key=value` with the value in its quoted scalar
    /// form. Escape sequences never count toward column alignment.
    ///
    /// `interactive` is the destination's terminal-ness; together with
    /// `use_color` it decides, per call, whether any escape sequences are
    /// emitted at all.
    ///
    /// Caveat kept from the original implementation: the running column
    /// count advances by the byte length of the *layout string*, not the
    /// rendered timestamp, so layouts whose output width differs from the
    /// layout text shift where fields start.
    pub fn render(&self, event: &LogEvent, registry: &HookRegistry, interactive: bool) -> String {
        let colors = ColorMode::new(self.use_color && interactive);
        let mut line = String::new();
        let mut column = 0usize;

        let _ = write!(
            line,
            "{}",
            colors.paint(self.time_style, event.timestamp.format(&self.time_format))
        );
        column += self.time_format.len();
        if column > 0 {
            line.push(' ');
            column += 1;
        }

        let level_style = self.level_style(event.level);
        let _ = write!(line, "{}", colors.paint(level_style, &event.message));
        column += event.message.width();

        for (i, (name, value)) in event.fields.iter().enumerate() {
            if i == 0 && column < self.fields_column && !event.message.is_empty() {
                line.push_str(&" ".repeat(self.fields_column - column));
                line.push('|');
            }
            if i > 0 || !event.message.is_empty() {
                line.push(' ');
            }

            match registry.lookup(name) {
                Some(hook) => hook.render(self, &mut line, value, colors),
                None => {
                    let _ = write!(
                        line,
                        "{}={}",
                        colors.paint(self.key_style, name),
                        colors.paint(self.value_style, value.quoted())
                    );
                }
            }
        }

        line.push('\n');
        line
    }

    /// Render one event and write it to `out` as a single write.
    ///
    /// The line is accumulated in memory first, so `out` sees exactly one
    /// `write_all`; any sink error is returned unmodified.
    pub fn render_to<W: io::Write>(
        &self,
        out: &mut W,
        event: &LogEvent,
        registry: &HookRegistry,
        interactive: bool,
    ) -> io::Result<()> {
        out.write_all(self.render(event, registry, interactive).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{COMMAND_RESULT, COMMAND_START, command_start};
    use chrono::TimeZone;

    // formatter matching the reference test setup: no timestamp, column 30
    fn plain_formatter() -> Formatter {
        let mut f = Formatter::new();
        f.time_format = String::new();
        f.fields_column = 30;
        f
    }

    fn render_line(f: &Formatter, registry: &HookRegistry, event: &LogEvent) -> String {
        let line = f.render(event, registry, false);
        line.strip_suffix('\n').expect("line not terminated").to_string()
    }

    // drop CSI sequences, keep everything printable
    fn strip_ansi(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                if chars.peek() == Some(&'[') {
                    chars.next();
                    while let Some(&ch) = chars.peek() {
                        chars.next();
                        if ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                continue;
            }
            result.push(c);
        }
        result
    }

    #[test]
    fn test_message_only() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "Message");
        assert_eq!(render_line(&f, &registry, &event), "Message");
    }

    #[test]
    fn test_field_aligned_after_message() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Error, "Some log").with_field("f1", "v1");
        let want = format!(r#"Some log{}| f1="v1""#, " ".repeat(22));
        assert_eq!(render_line(&f, &registry, &event), want);
    }

    #[test]
    fn test_field_starts_line_when_message_empty() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "").with_field("f1", "v1");
        assert_eq!(render_line(&f, &registry, &event), r#"f1="v1""#);
    }

    #[test]
    fn test_multiple_fields_space_separated() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "msg")
            .with_field("f1", "v1")
            .with_field("f2", 2);
        let want = format!(r#"msg{}| f1="v1" f2=2"#, " ".repeat(27));
        assert_eq!(render_line(&f, &registry, &event), want);
    }

    #[test]
    fn test_message_past_column_gets_no_separator() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let message = "a message that runs well past column thirty";
        let event = LogEvent::new(Level::Info, message).with_field("f1", "v1");
        assert_eq!(
            render_line(&f, &registry, &event),
            format!(r#"{} f1="v1""#, message)
        );
    }

    #[test]
    fn test_zero_column_disables_alignment() {
        let mut f = plain_formatter();
        f.fields_column = 0;
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "Some log").with_field("f1", "v1");
        assert_eq!(render_line(&f, &registry, &event), r#"Some log f1="v1""#);
    }

    #[test]
    fn test_command_start_with_empty_message() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "").with_field(COMMAND_START, "ls -al /");
        assert_eq!(render_line(&f, &registry, &event), "Running ls -al /");
    }

    #[test]
    fn test_command_start_after_message() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "Message").with_field(COMMAND_START, "ls");
        let want = format!("Message{}| Running ls", " ".repeat(23));
        assert_eq!(render_line(&f, &registry, &event), want);
    }

    #[test]
    fn test_command_result_ok() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "").with_field(COMMAND_RESULT, 0);
        assert_eq!(render_line(&f, &registry, &event), " ==> OK");
    }

    #[test]
    fn test_command_result_failed() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Error, "").with_field(COMMAND_RESULT, 1);
        assert_eq!(render_line(&f, &registry, &event), " ==> Failed (exit code 1)");
    }

    #[test]
    fn test_deleted_hook_falls_back_to_default_rendering() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        registry.delete_hook(COMMAND_START);
        let event = LogEvent::new(Level::Info, "").with_field(COMMAND_START, "ls");
        assert_eq!(render_line(&f, &registry, &event), r#"COMMAND_START="ls""#);
    }

    #[test]
    fn test_readding_hook_is_idempotent() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "").with_field(COMMAND_START, "ls");
        let once = render_line(&f, &registry, &event);
        registry.add_hook(COMMAND_START, command_start);
        registry.add_hook(COMMAND_START, command_start);
        assert_eq!(render_line(&f, &registry, &event), once);
    }

    #[test]
    fn test_layout_length_drives_column_math() {
        // "%Y" renders four digits but counts as its two layout bytes, so
        // the separator lands two columns earlier than the rendered text
        // would suggest
        let mut f = plain_formatter();
        f.time_format = "%Y".to_string();
        let registry = HookRegistry::new();
        let timestamp = chrono::Local.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let event = LogEvent::new(Level::Info, "ab")
            .with_timestamp(timestamp)
            .with_field("f1", "v1");
        // counted width: 2 (layout) + 1 (space) + 2 (message) = 5
        let want = format!(r#"2025 ab{}| f1="v1""#, " ".repeat(25));
        assert_eq!(render_line(&f, &registry, &event), want);
    }

    #[test]
    fn test_default_time_format_renders_timestamp() {
        let mut f = Formatter::new();
        f.fields_column = 30;
        let registry = HookRegistry::new();
        let timestamp = chrono::Local.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let event = LogEvent::new(Level::Info, "Message").with_timestamp(timestamp);
        assert_eq!(
            render_line(&f, &registry, &event),
            "2025-01-15 10:30:00 Message"
        );
    }

    #[test]
    fn test_no_escapes_for_non_interactive_destination() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Error, "Message").with_field("f1", "v1");
        let line = f.render(&event, &registry, false);
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_no_escapes_when_color_disabled() {
        let mut f = plain_formatter();
        f.use_color = false;
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Error, "Message");
        let line = f.render(&event, &registry, true);
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_escapes_for_interactive_destination() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Error, "Message");
        let line = f.render(&event, &registry, true);
        assert!(line.contains("\x1b["));
    }

    #[test]
    fn test_escapes_do_not_shift_alignment() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Error, "Some log").with_field("f1", "v1");
        let colored = f.render(&event, &registry, true);
        let plain = f.render(&event, &registry, false);
        assert_eq!(strip_ansi(&colored), plain);
    }

    #[test]
    fn test_level_style_table() {
        let f = Formatter::new();
        let cases = [
            (Level::Panic, f.panic_style),
            (Level::Fatal, f.fatal_style),
            (Level::Error, f.error_style),
            (Level::Warn, f.warn_style),
            (Level::Info, f.info_style),
            (Level::Debug, f.debug_style),
            (Level::Trace, f.trace_style),
        ];
        for (level, want) in cases {
            assert_eq!(f.level_style(level), want, "style for {:?}", level);
        }
    }

    #[test]
    fn test_render_to_writes_single_terminated_line() {
        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "Message");
        let mut out = Vec::new();
        f.render_to(&mut out, &event, &registry, false).unwrap();
        assert_eq!(out, b"Message\n");
    }

    #[test]
    fn test_render_to_propagates_sink_error() {
        struct FailingSink;

        impl io::Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let f = plain_formatter();
        let registry = HookRegistry::new();
        let event = LogEvent::new(Level::Info, "Message");
        let err = f
            .render_to(&mut FailingSink, &event, &registry, false)
            .unwrap_err();
        assert_eq!(err.to_string(), "sink closed");
    }
}
