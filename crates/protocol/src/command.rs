//! The command table: `prefix=value` arguments and the fields they set.

use std::fmt;

use crate::policy::ColumnPolicy;
use crate::setting::Field;

/// A `prefix=value` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `W=`: window lines and columns.
    Window,
    /// `B=`: buffer lines and columns.
    Buffer,
    /// `C=`: buffer and window columns.
    Columns,
    /// `WC=`
    WindowColumns,
    /// `BC=`
    BufferColumns,
    /// `WL=`
    WindowLines,
    /// `BL=`
    BufferLines,
    /// `QE=`
    QuickEdit,
    /// `IN=`
    Insert,
}

impl Command {
    /// Every command, in matching order.
    pub const ALL: [Command; 9] = [
        Command::Window,
        Command::Buffer,
        Command::Columns,
        Command::WindowColumns,
        Command::BufferColumns,
        Command::WindowLines,
        Command::BufferLines,
        Command::QuickEdit,
        Command::Insert,
    ];

    /// Returns the argument prefix, including the `=`.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Window => "W=",
            Self::Buffer => "B=",
            Self::Columns => "C=",
            Self::WindowColumns => "WC=",
            Self::BufferColumns => "BC=",
            Self::WindowLines => "WL=",
            Self::BufferLines => "BL=",
            Self::QuickEdit => "QE=",
            Self::Insert => "IN=",
        }
    }

    /// Returns the fields this command assigns.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Window => &[Field::WindowColumns, Field::WindowLines],
            Self::Buffer => &[Field::BufferColumns, Field::BufferLines],
            Self::Columns => &[Field::BufferColumns, Field::WindowColumns],
            Self::WindowColumns => &[Field::WindowColumns],
            Self::BufferColumns => &[Field::BufferColumns],
            Self::WindowLines => &[Field::WindowLines],
            Self::BufferLines => &[Field::BufferLines],
            Self::QuickEdit => &[Field::QuickEdit],
            Self::Insert => &[Field::Insert],
        }
    }

    /// Returns whether the value of this command is a true/false toggle.
    #[must_use]
    pub fn takes_toggle(self) -> bool {
        matches!(self, Self::QuickEdit | Self::Insert)
    }

    /// Returns whether this command is recognized under `policy`.
    #[must_use]
    pub fn is_available(self, policy: ColumnPolicy) -> bool {
        self != Self::Columns || policy.is_constrained()
    }

    /// Splits `arg` into the first matching command and its value string.
    ///
    /// Prefixes are compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_protocol::{ColumnPolicy, Command};
    ///
    /// let policy = ColumnPolicy::Constrained;
    /// assert_eq!(Command::match_prefix("wc=100", policy), Some((Command::WindowColumns, "100")));
    /// assert_eq!(Command::match_prefix("C=2", ColumnPolicy::Basic), None);
    /// assert_eq!(Command::match_prefix("X=1", policy), None);
    /// ```
    #[must_use]
    pub fn match_prefix(arg: &str, policy: ColumnPolicy) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .filter(|command| command.is_available(policy))
            .find_map(|command| {
                let prefix = command.prefix();
                let head = arg.get(..prefix.len())?;
                head.eq_ignore_ascii_case(prefix)
                    .then(|| (command, &arg[prefix.len()..]))
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Parses a toggle value: `true`/`t` or `false`/`f`, case-insensitively.
///
/// Returns `Some(true)` or `Some(false)`, `None` for anything else.
///
/// # Examples
///
/// ```
/// use mo_protocol::command::parse_toggle;
///
/// assert_eq!(parse_toggle("TRUE"), Some(true));
/// assert_eq!(parse_toggle("f"), Some(false));
/// assert_eq!(parse_toggle("yes"), None);
/// ```
#[must_use]
pub fn parse_toggle(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("t") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("f") {
        Some(false)
    } else {
        None
    }
}
