//! Destinations for diagnostic lines.
//!
//! Diagnostics are streamed as each field is processed, never batched.
//! [`StreamSink`] writes them to an output/error stream pair; a plain
//! `Vec<Diagnostic>` collects them for inspection.

use std::io::Write;

use mo_protocol::Diagnostic;
use tracing::warn;

/// Receives diagnostic lines as they are produced.
pub trait DiagnosticSink {
    /// Handles one diagnostic line.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Writes field lines to `out` and platform warnings to `err`.
///
/// # Examples
///
/// ```
/// use mo_engine::{DiagnosticSink, StreamSink};
/// use mo_protocol::{Diagnostic, Field};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut sink = StreamSink::new(&mut out, &mut err);
/// sink.emit(Diagnostic::Set { field: Field::WindowLines, value: 29 });
/// sink.emit(Diagnostic::Platform("no console handle attached".to_string()));
///
/// assert_eq!(String::from_utf8(out).unwrap(), "win lin set 29\n");
/// assert_eq!(
///     String::from_utf8(err).unwrap(),
///     "platform warning: no console handle attached\n"
/// );
/// ```
#[derive(Debug)]
pub struct StreamSink<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> StreamSink<O, E> {
    /// Creates a sink over an output and an error stream.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> DiagnosticSink for StreamSink<O, E> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let stream: &mut dyn Write = if diagnostic.is_warning() {
            &mut self.err
        } else {
            &mut self.out
        };
        if let Err(err) = writeln!(stream, "{diagnostic}").and_then(|()| stream.flush()) {
            warn!(%err, line = %diagnostic, "failed to write diagnostic");
        }
    }
}
