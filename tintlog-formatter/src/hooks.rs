use crate::event::FieldValue;
use crate::formatter::{ColorMode, Formatter};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

/// field name of the built-in command-start hook
pub const COMMAND_START: &str = "COMMAND_START";

/// field name of the built-in command-result hook
pub const COMMAND_RESULT: &str = "COMMAND_RESULT";

/// Rendering override for one field name.
///
/// A hook owns everything it writes for its field: the renderer emits the
/// field-position spacing, then hands over the line buffer. Hooks may write
/// zero or more bytes and must paint through the supplied [`ColorMode`] so
/// color suppression stays consistent across the line. Hooks are trusted
/// collaborators: the renderer does not catch a panicking hook.
///
/// The trait is blanket-implemented for matching `Fn` closures, so a plain
/// function or closure registers directly via [`HookRegistry::add_hook`].
pub trait FieldHook: Send + Sync {
    fn render(&self, formatter: &Formatter, out: &mut String, value: &FieldValue, colors: ColorMode);
}

impl<F> FieldHook for F
where
    F: Fn(&Formatter, &mut String, &FieldValue, ColorMode) + Send + Sync,
{
    fn render(&self, formatter: &Formatter, out: &mut String, value: &FieldValue, colors: ColorMode) {
        self(formatter, out, value, colors)
    }
}

/// Built-in hook for [`COMMAND_START`]: `Running <command>`.
///
/// Exposed so it can be re-registered after deletion or reused under
/// another field name.
pub fn command_start(formatter: &Formatter, out: &mut String, value: &FieldValue, colors: ColorMode) {
    let _ = write!(out, "{}", colors.paint(formatter.command_header_style, "Running"));
    out.push(' ');
    let _ = write!(out, "{}", colors.paint(formatter.command_style, value));
}

/// Built-in hook for [`COMMAND_RESULT`]: ` ==> OK` for exit code zero,
/// ` ==> Failed (exit code N)` otherwise.
///
/// Only an integer zero counts as success; any other value, including a
/// textual `"0"`, renders as a failure with the value echoed as-is.
pub fn command_result(formatter: &Formatter, out: &mut String, value: &FieldValue, colors: ColorMode) {
    out.push(' ');
    let _ = write!(out, "{}", colors.paint(formatter.command_header_style, "==>"));
    out.push(' ');
    if matches!(value, FieldValue::Integer(0)) {
        let _ = write!(out, "{}", colors.paint(formatter.command_success_style, "OK"));
    } else {
        let _ = write!(out, "{}", colors.paint(formatter.command_fail_style, "Failed"));
        out.push(' ');
        let _ = write!(
            out,
            "{}",
            colors.paint(
                formatter.command_header_style,
                format!("(exit code {})", value)
            )
        );
    }
}

/// Mapping from field name to rendering hook, safe for concurrent use.
///
/// At most one hook per field name; adding replaces, deleting an absent
/// entry is a no-op. The mutex guards only the individual map operation:
/// [`HookRegistry::lookup`] clones the `Arc` out and releases the lock
/// before the hook runs, so hook bodies never execute under the lock and a
/// hook may itself add or delete entries without deadlocking.
pub struct HookRegistry {
    hooks: Mutex<HashMap<String, Arc<dyn FieldHook>>>,
}

impl HookRegistry {
    /// a registry pre-loaded with the two command hooks
    pub fn new() -> Self {
        let registry = Self {
            hooks: Mutex::new(HashMap::new()),
        };
        registry.add_hook(COMMAND_START, command_start);
        registry.add_hook(COMMAND_RESULT, command_result);
        registry
    }

    /// add or replace the hook for `field`
    pub fn add_hook(&self, field: impl Into<String>, hook: impl FieldHook + 'static) {
        if let Ok(mut hooks) = self.hooks.lock() {
            hooks.insert(field.into(), Arc::new(hook));
        }
    }

    /// remove the hook for `field`, if any
    pub fn delete_hook(&self, field: &str) {
        if let Ok(mut hooks) = self.hooks.lock() {
            hooks.remove(field);
        }
    }

    /// the hook registered for `field`, if any
    pub fn lookup(&self, field: &str) -> Option<Arc<dyn FieldHook>> {
        self.hooks
            .lock()
            .ok()
            .and_then(|hooks| hooks.get(field).cloned())
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
