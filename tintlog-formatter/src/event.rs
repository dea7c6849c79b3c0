use chrono::{DateTime, Local};
use std::fmt;

/// severity of a log event, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

/// a scalar value attached to a log event field
///
/// Values come in two textual forms. The [`Display`](fmt::Display) impl is
/// the raw form used by hooks (`Text` is unquoted). [`FieldValue::quoted`]
/// is the form used by default `key=value` rendering, where text is
/// double-quoted and escaped while other scalars keep their natural literal
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// anything else, pre-rendered by the caller
    Other(String),
}

impl FieldValue {
    /// quoted/escaped representation for `key=value` rendering
    pub fn quoted(&self) -> Quoted<'_> {
        Quoted(self)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Other(s) => f.write_str(s),
        }
    }
}

/// display adapter returned by [`FieldValue::quoted`]
pub struct Quoted<'a>(&'a FieldValue);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Other(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Integer(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Integer(i as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Other(b.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Other(v.to_string())
    }
}

/// represents a single log event to be rendered into one line
///
/// Fields keep the order the caller attached them in; names are not
/// deduplicated or sorted. This also means field order is deterministic
/// here, a side effect of the `Vec` container rather than a designed
/// guarantee.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, FieldValue)>,
}

impl LogEvent {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
