//! Buffer/window column ordering policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How buffer columns are validated against window columns.
///
/// # Examples
///
/// ```
/// use mo_protocol::ColumnPolicy;
///
/// let policy: ColumnPolicy = "basic".parse().unwrap();
/// assert_eq!(policy, ColumnPolicy::Basic);
/// assert_eq!(ColumnPolicy::default(), ColumnPolicy::Constrained);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnPolicy {
    /// Buffer columns are bounded by their own tiers only.
    Basic,
    /// Buffer columns may not be narrower than the smallest window, writes
    /// narrower than the current window are deferred until the window has
    /// been resized, and the `C=` command is available.
    #[default]
    Constrained,
}

impl ColumnPolicy {
    /// Returns whether strict buffer/window column ordering is enabled.
    #[must_use]
    pub fn is_constrained(self) -> bool {
        self == Self::Constrained
    }
}

impl fmt::Display for ColumnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Constrained => f.write_str("constrained"),
        }
    }
}

/// Error returned when parsing an unknown [`ColumnPolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column policy: {0} (expected `basic` or `constrained`)")]
pub struct UnknownColumnPolicy(pub String);

impl FromStr for ColumnPolicy {
    type Err = UnknownColumnPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "constrained" => Ok(Self::Constrained),
            _ => Err(UnknownColumnPolicy(s.to_string())),
        }
    }
}
