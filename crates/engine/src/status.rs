//! The status block shown when no arguments are given.

use std::fmt;

use mo_config::FallbackGeometry;
use mo_console::{ModeFlags, ModeState, TerminalControlSurface};
use mo_protocol::Diagnostic;
use tracing::debug;

use crate::sink::DiagnosticSink;

/// Current geometry and edit modes of a surface.
///
/// Nothing is written to the surface while building a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub window_lines: u16,
    pub window_columns: u16,
    pub buffer_lines: u16,
    pub buffer_columns: u16,
    pub quick_edit: ModeState,
    pub insert: ModeState,
}

impl StatusReport {
    /// Reads the current state of `surface`.
    ///
    /// Geometry that cannot be read is taken from `fallback`. If the input
    /// mode cannot be read both toggles report [`ModeState::Unknown`] and a
    /// platform warning goes to `sink`.
    pub fn query<S, K>(surface: &S, fallback: &FallbackGeometry, sink: &mut K) -> Self
    where
        S: TerminalControlSurface + ?Sized,
        K: DiagnosticSink + ?Sized,
    {
        let read = |what: &str, value: mo_console::Result<u16>, default: u16| {
            value.unwrap_or_else(|err| {
                debug!(%err, what, default, "using fallback");
                default
            })
        };

        let (quick_edit, insert) = match surface.input_mode() {
            Ok(mode) => (
                mode.state_of(ModeFlags::QUICK_EDIT),
                mode.state_of(ModeFlags::INSERT),
            ),
            Err(err) => {
                sink.emit(Diagnostic::Platform(err.to_string()));
                (ModeState::Unknown, ModeState::Unknown)
            }
        };

        Self {
            window_lines: read("window lines", surface.window_height(), fallback.window_lines),
            window_columns: read("window columns", surface.window_width(), fallback.window_columns),
            buffer_lines: read("buffer lines", surface.buffer_height(), fallback.buffer_lines),
            buffer_columns: read("buffer columns", surface.buffer_width(), fallback.buffer_columns),
            quick_edit,
            insert,
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Console Status:")?;
        writeln!(f, "---------------")?;
        writeln!(
            f,
            "\tWindow Size        = Lines: {:>4}, Columns: {:>4}",
            self.window_lines, self.window_columns
        )?;
        writeln!(
            f,
            "\tScreen Buffer Size = Lines: {:>4}, Columns: {:>4}",
            self.buffer_lines, self.buffer_columns
        )?;
        writeln!(f)?;
        writeln!(f, "Edit Options:")?;
        writeln!(f, "-------------")?;
        write!(
            f,
            "\tQuickEdit Mode: {:>3}, Insert Mode: {:>3}",
            self.quick_edit, self.insert
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_console::{RecordingSurface, Size};

    #[test]
    fn live_console() {
        let surface = RecordingSurface::console(Size::new(120, 40), Size::new(120, 9001));
        let mut warnings: Vec<Diagnostic> = Vec::new();
        let report = StatusReport::query(&surface, &FallbackGeometry::default(), &mut warnings);

        assert!(warnings.is_empty());
        insta::assert_snapshot!(report.to_string().replace('\t', "    "), @r"
        Console Status:
        ---------------
            Window Size        = Lines:   40, Columns:  120
            Screen Buffer Size = Lines: 9001, Columns:  120

        Edit Options:
        -------------
            QuickEdit Mode: True, Insert Mode: True
        ");
    }

    #[test]
    fn detached_uses_fallbacks() {
        let mut warnings: Vec<Diagnostic> = Vec::new();
        let report = StatusReport::query(
            &RecordingSurface::detached(),
            &FallbackGeometry::default(),
            &mut warnings,
        );

        assert_eq!(
            report,
            StatusReport {
                window_lines: 50,
                window_columns: 100,
                buffer_lines: 500,
                buffer_columns: 100,
                quick_edit: ModeState::Unknown,
                insert: ModeState::Unknown,
            }
        );
        assert_eq!(
            warnings,
            vec![Diagnostic::Platform("no console handle attached".to_string())]
        );
        assert!(report.to_string().ends_with("QuickEdit Mode: Unknown, Insert Mode: Unknown"));
    }

    #[test]
    fn mode_bits_are_tri_state() {
        let surface = RecordingSurface::console(Size::new(80, 25), Size::new(80, 300))
            .with_mode(ModeFlags::from_bits_retain(0x00a7));
        let report = StatusReport::query(&surface, &FallbackGeometry::default(), &mut Vec::<Diagnostic>::new());
        assert_eq!(report.quick_edit, ModeState::Disabled);
        assert_eq!(report.insert, ModeState::Enabled);
        assert!(report.to_string().contains("QuickEdit Mode: False, Insert Mode: True"));
    }
}
