//! Diagnostic lines emitted while applying a setting.
//!
//! Every processed field produces one line on the output stream, plus one
//! more if a deferred buffer columns retry fails. Platform failures on the
//! input mode add a warning on the error stream.

use std::fmt;

use crate::setting::Field;

/// A single diagnostic line.
///
/// # Examples
///
/// ```
/// use mo_protocol::{Diagnostic, Field};
///
/// let line = Diagnostic::Set { field: Field::BufferLines, value: 600 };
/// assert_eq!(line.to_string(), "buf lin set 600");
///
/// let line = Diagnostic::Maximum { field: Field::WindowColumns, bound: 245 };
/// assert_eq!(line.to_string(), "err: maximum win col 245");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A size field was applied, or the environment has no surface to apply
    /// it to.
    Set { field: Field, value: i32 },

    /// A size below the field's tier-0 bound.
    Minimum { field: Field, bound: i32 },

    /// A size above the field's tier-3 bound.
    Maximum { field: Field, bound: i32 },

    /// Buffer columns narrower than the current window width.
    MinimumEqualWindow { width: i32 },

    /// The deferred buffer columns write failed again.
    DeferredFailed { value: i32 },

    /// The surface refused an in-range value.
    Rejected { field: Field, value: i32 },

    /// A toggle was processed; reports the requested state.
    Toggle { field: Field, enabled: bool },

    /// The surface could not read or write the input mode.
    Platform(String),
}

impl Diagnostic {
    /// Returns whether the line belongs on the error stream.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Platform(_))
    }

    /// Returns whether the line reports a field that was not applied.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Minimum { .. }
                | Self::Maximum { .. }
                | Self::MinimumEqualWindow { .. }
                | Self::DeferredFailed { .. }
                | Self::Rejected { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { field, value } => write!(f, "{field} set {value}"),
            Self::Minimum { field, bound } => write!(f, "err: minimum {field} {bound}"),
            Self::Maximum { field, bound } => write!(f, "err: maximum {field} {bound}"),
            Self::MinimumEqualWindow { width } => {
                write!(f, "err: minimum buf col equal to win col {width}")
            }
            Self::DeferredFailed { value } => write!(f, "err: setting deferred buf col {value}"),
            Self::Rejected { field, value } => write!(f, "err: setting {field} {value}"),
            Self::Toggle { field, enabled } => {
                let state = if *enabled { "True" } else { "False" };
                write!(f, "{field} set {state}")
            }
            Self::Platform(message) => write!(f, "platform warning: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_lines() {
        let cases = [
            (
                Diagnostic::Set { field: Field::WindowLines, value: 29 },
                "win lin set 29",
            ),
            (
                Diagnostic::Minimum { field: Field::BufferColumns, bound: 78 },
                "err: minimum buf col 78",
            ),
            (
                Diagnostic::MinimumEqualWindow { width: 120 },
                "err: minimum buf col equal to win col 120",
            ),
            (
                Diagnostic::DeferredFailed { value: 90 },
                "err: setting deferred buf col 90",
            ),
            (
                Diagnostic::Rejected { field: Field::WindowLines, value: 50 },
                "err: setting win lin 50",
            ),
        ];
        for (diagnostic, expected) in cases {
            assert_eq!(diagnostic.to_string(), expected);
        }
    }

    #[test]
    fn toggle_lines() {
        let on = Diagnostic::Toggle { field: Field::QuickEdit, enabled: true };
        let off = Diagnostic::Toggle { field: Field::Insert, enabled: false };
        assert_eq!(on.to_string(), "quick edit set True");
        assert_eq!(off.to_string(), "insert set False");
    }

    #[test]
    fn stream_classification() {
        let warning = Diagnostic::Platform("no console input handle".to_string());
        assert!(warning.is_warning());
        assert!(!warning.is_error());
        assert_eq!(warning.to_string(), "platform warning: no console input handle");

        let error = Diagnostic::Maximum { field: Field::WindowColumns, bound: 245 };
        assert!(error.is_error());
        assert!(!error.is_warning());
    }
}
