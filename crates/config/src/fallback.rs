//! Static geometry used when the terminal cannot report its own.
//!
//! Redirected or non-interactive processes have no console to query. The
//! values here stand in for the largest window size (which drives the
//! preset tiers) and for the current window and buffer sizes shown in the
//! status block.

use serde::{Deserialize, Serialize};

use mo_protocol::preset::{FALLBACK_LARGEST_HEIGHT, FALLBACK_LARGEST_WIDTH};

use crate::error::{ConfigError, Result};

/// Default window height in lines.
pub const DEFAULT_WINDOW_LINES: u16 = 50;

/// Default window width in columns.
pub const DEFAULT_WINDOW_COLUMNS: u16 = 100;

/// Default screen buffer height in lines.
pub const DEFAULT_BUFFER_LINES: u16 = 500;

/// Default screen buffer width in columns.
pub const DEFAULT_BUFFER_COLUMNS: u16 = 100;

/// Fallback geometry.
///
/// # Examples
///
/// ```
/// use mo_config::FallbackGeometry;
///
/// let fallback = FallbackGeometry::default();
/// assert_eq!((fallback.largest_width, fallback.largest_height), (250, 100));
/// assert_eq!((fallback.window_lines, fallback.window_columns), (50, 100));
/// assert_eq!((fallback.buffer_lines, fallback.buffer_columns), (500, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackGeometry {
    /// Largest window width, drives the column tiers.
    pub largest_width: u16,
    /// Largest window height, drives the window line tiers.
    pub largest_height: u16,
    /// Reported window height.
    pub window_lines: u16,
    /// Reported window width.
    pub window_columns: u16,
    /// Reported screen buffer height.
    pub buffer_lines: u16,
    /// Reported screen buffer width.
    pub buffer_columns: u16,
}

impl Default for FallbackGeometry {
    fn default() -> Self {
        Self {
            largest_width: FALLBACK_LARGEST_WIDTH,
            largest_height: FALLBACK_LARGEST_HEIGHT,
            window_lines: DEFAULT_WINDOW_LINES,
            window_columns: DEFAULT_WINDOW_COLUMNS,
            buffer_lines: DEFAULT_BUFFER_LINES,
            buffer_columns: DEFAULT_BUFFER_COLUMNS,
        }
    }
}

impl FallbackGeometry {
    /// Validates that every dimension is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFallback`] naming the first zero field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("largest_width", self.largest_width),
            ("largest_height", self.largest_height),
            ("window_lines", self.window_lines),
            ("window_columns", self.window_columns),
            ("buffer_lines", self.buffer_lines),
            ("buffer_columns", self.buffer_columns),
        ];
        match fields.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigError::InvalidFallback { field }),
            None => Ok(()),
        }
    }
}
