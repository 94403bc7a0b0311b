//! Error log entries and the sinks that make them visible.
//!
//! The engine records every failure as an [`ErrorEntry`]. When debugging is
//! enabled the log is handed once to a [`DiagnosticSink`]: by default a
//! [`TracingSink`], or an [`HtmlOverlay`] for pages rendered on the fly.

use std::fmt;
use std::io::Write;

use crate::api::AutoColorError;

/// One recorded failure, with the call that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEntry {
    /// Engine method that detected the error (e.g. `set_color_type`)
    pub operation: &'static str,
    /// Arguments of that call, rendered as strings
    pub arguments: Vec<String>,
    /// The error itself
    pub error: AutoColorError,
}

impl ErrorEntry {
    pub fn new(operation: &'static str, arguments: Vec<String>, error: AutoColorError) -> Self {
        Self {
            operation,
            arguments,
            error,
        }
    }

    /// `operation('arg', 'arg')`
    pub fn call_site(&self) -> String {
        let arguments = self
            .arguments
            .iter()
            .map(|arg| format!("'{arg}'"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.operation, arguments)
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.call_site(), self.error)
    }
}

/// How often the error log is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayScope {
    /// Once per engine.
    #[default]
    Instance,
    /// Once per process, across all engines (see [`registry`]).
    Process,
}

/// Destination for the error log of a poisoned engine.
pub trait DiagnosticSink: Send {
    /// Called at most once per engine (or per process, depending on
    /// [`OverlayScope`]) with the full log.
    fn render(&mut self, entries: &[ErrorEntry]);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&[ErrorEntry]) + Send,
{
    fn render(&mut self, entries: &[ErrorEntry]) {
        self(entries)
    }
}

/// Emits one `tracing` error event per entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn render(&mut self, entries: &[ErrorEntry]) {
        for entry in entries {
            tracing::error!(
                operation = entry.operation,
                call = %entry.call_site(),
                error = %entry.error,
                "auto color error"
            );
        }
    }
}

const OVERLAY_CSS: &str = "\
#auto-color { background-color: rgba(196,0,0,0.92); position: fixed; \
left: 0; top: 0; right: 0; bottom: 0; margin: auto; width: 400px; height: 250px; \
overflow: auto; z-index: 999; padding: 1em; outline: 5px solid rgba(255,255,255,0.92) } \
#auto-color p, #auto-color b { color: #fff; font-size: 16px; font-family: cambria, arial } \
#auto-color b { font-size: 20px } \
#auto-color span { font-weight: bold; margin-right: .5em }";

/// Closes an open `style="...` or `style='...` attribute and its tag, so an
/// overlay emitted from inside a color interpolation still renders.
const ATTRIBUTE_BREAK_OUT: &str = "'>\">";

/// Render the error log as an inline HTML fragment with its own styles.
pub fn render_overlay(entries: &[ErrorEntry], break_out_of_attribute: bool) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<p><span>{}</span>{}</p>",
                html_escape(&entry.call_site()),
                html_escape(&entry.error.to_string())
            )
        })
        .collect();

    format!(
        "{}<style>{}</style><div id='auto-color'><b>AutoColor - ERRORS DETECTED</b>{}</div>",
        if break_out_of_attribute { ATTRIBUTE_BREAK_OUT } else { "" },
        OVERLAY_CSS,
        items
    )
}

/// Writes [`render_overlay`] output to a writer.
pub struct HtmlOverlay<W> {
    writer: W,
    break_out_of_attribute: bool,
}

impl<W: Write + Send> HtmlOverlay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            break_out_of_attribute: false,
        }
    }

    /// Prefix the fragment with `'>">` to escape an enclosing attribute.
    pub fn break_out_of_attribute(mut self, enabled: bool) -> Self {
        self.break_out_of_attribute = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> DiagnosticSink for HtmlOverlay<W> {
    fn render(&mut self, entries: &[ErrorEntry]) {
        let html = render_overlay(entries, self.break_out_of_attribute);
        if let Err(e) = self
            .writer
            .write_all(html.as_bytes())
            .and_then(|_| self.writer.flush())
        {
            tracing::warn!(%e, "Failed to write error overlay");
        }
    }
}

/// Simple HTML escape for error messages
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Process-wide "diagnostics already shown" guard used by
/// [`OverlayScope::Process`].
///
/// The flag starts cleared and is set by the first engine that renders. It
/// is never cleared automatically; tests that exercise process scope call
/// [`reset`](registry::reset) first.
pub mod registry {
    use std::sync::atomic::{AtomicBool, Ordering};

    static SHOWN: AtomicBool = AtomicBool::new(false);

    /// Set the flag. Returns true only for the caller that set it.
    pub fn claim() -> bool {
        SHOWN
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether some engine has already rendered in this process.
    pub fn is_shown() -> bool {
        SHOWN.load(Ordering::Acquire)
    }

    /// Clear the flag.
    pub fn reset() {
        SHOWN.store(false, Ordering::Release);
    }
}
