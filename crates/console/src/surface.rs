//! The terminal control surface contract.
//!
//! [`TerminalControlSurface`] is the narrow capability the engine reads
//! geometry and input modes from and writes changes to. Implementations
//! exist per platform, plus [`RecordingSurface`](crate::RecordingSurface)
//! for tests.

use std::fmt;
use std::io;

use bitflags::bitflags;

/// A width/height pair in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Columns.
    pub width: u16,
    /// Lines.
    pub height: u16,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

bitflags! {
    /// Input mode bits of the console input handle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModeFlags: u32 {
        /// Insert mode.
        const INSERT = 0x0020;
        /// QuickEdit mode.
        const QUICK_EDIT = 0x0040;
        /// Required alongside any change to `INSERT` or `QUICK_EDIT`.
        const EXTENDED_FLAGS = 0x0080;
    }
}

impl ModeFlags {
    /// Returns the state of `flag` within this mode value.
    ///
    /// Modes below `INSERT` carry no editing bits at all (for example a
    /// mode reported by a POSIX shell) and read as unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_console::{ModeFlags, ModeState};
    ///
    /// let mode = ModeFlags::from_bits_retain(0x01f7);
    /// assert_eq!(mode.state_of(ModeFlags::QUICK_EDIT), ModeState::Enabled);
    ///
    /// let mode = ModeFlags::from_bits_retain(0x00a7);
    /// assert_eq!(mode.state_of(ModeFlags::QUICK_EDIT), ModeState::Disabled);
    ///
    /// let mode = ModeFlags::from_bits_retain(0x0003);
    /// assert_eq!(mode.state_of(ModeFlags::INSERT), ModeState::Unknown);
    /// ```
    #[must_use]
    pub fn state_of(self, flag: ModeFlags) -> ModeState {
        if self.bits() < Self::INSERT.bits() {
            ModeState::Unknown
        } else if self.contains(flag) {
            ModeState::Enabled
        } else {
            ModeState::Disabled
        }
    }
}

/// Tri-state reading of an input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    Enabled,
    Disabled,
    /// The surface cannot tell.
    Unknown,
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Enabled => "True",
            Self::Disabled => "False",
            Self::Unknown => "Unknown",
        };
        // `pad` so width specifiers in status templates apply.
        f.pad(text)
    }
}

/// Errors reported by a terminal control surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// No interactive console handle is attached to the process.
    #[error("no console handle attached")]
    NoHandle,

    /// The platform has no such capability.
    #[error("{0} is not supported on this terminal")]
    Unsupported(&'static str),

    /// The surface refused a value.
    #[error("console rejected {what} {value}")]
    Rejected {
        /// The quantity being set.
        what: &'static str,
        /// The refused value.
        value: u16,
    },

    /// An I/O error, typically from redirected standard streams.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl SurfaceError {
    /// Returns whether the request is simply not actionable in this
    /// environment, as opposed to refused by a real console.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// A specialized Result type for surface operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Read/write access to console geometry and input modes.
///
/// Getters fail when no interactive terminal is attached; callers fall
/// back to static defaults. Setters fail either because the environment
/// has nothing to set ([`SurfaceError::is_unavailable`]) or because the
/// console refused the value.
pub trait TerminalControlSurface {
    /// Returns the largest window size the terminal supports.
    fn largest_window_size(&self) -> Result<Size>;

    /// Returns the visible window height in lines.
    fn window_height(&self) -> Result<u16>;

    /// Returns the visible window width in columns.
    fn window_width(&self) -> Result<u16>;

    /// Returns the screen buffer height in lines.
    fn buffer_height(&self) -> Result<u16>;

    /// Returns the screen buffer width in columns.
    fn buffer_width(&self) -> Result<u16>;

    fn set_window_height(&mut self, lines: u16) -> Result<()>;

    fn set_window_width(&mut self, columns: u16) -> Result<()>;

    fn set_buffer_height(&mut self, lines: u16) -> Result<()>;

    fn set_buffer_width(&mut self, columns: u16) -> Result<()>;

    /// Clears the screen and scrolls the window back to the buffer origin.
    fn clear_to_origin(&mut self) -> Result<()>;

    /// Returns the mode bits of the input handle.
    fn input_mode(&self) -> Result<ModeFlags>;

    /// Replaces the mode bits of the input handle.
    fn set_input_mode(&mut self, mode: ModeFlags) -> Result<()>;
}

impl<T: TerminalControlSurface + ?Sized> TerminalControlSurface for &mut T {
    fn largest_window_size(&self) -> Result<Size> {
        (**self).largest_window_size()
    }

    fn window_height(&self) -> Result<u16> {
        (**self).window_height()
    }

    fn window_width(&self) -> Result<u16> {
        (**self).window_width()
    }

    fn buffer_height(&self) -> Result<u16> {
        (**self).buffer_height()
    }

    fn buffer_width(&self) -> Result<u16> {
        (**self).buffer_width()
    }

    fn set_window_height(&mut self, lines: u16) -> Result<()> {
        (**self).set_window_height(lines)
    }

    fn set_window_width(&mut self, columns: u16) -> Result<()> {
        (**self).set_window_width(columns)
    }

    fn set_buffer_height(&mut self, lines: u16) -> Result<()> {
        (**self).set_buffer_height(lines)
    }

    fn set_buffer_width(&mut self, columns: u16) -> Result<()> {
        (**self).set_buffer_width(columns)
    }

    fn clear_to_origin(&mut self) -> Result<()> {
        (**self).clear_to_origin()
    }

    fn input_mode(&self) -> Result<ModeFlags> {
        (**self).input_mode()
    }

    fn set_input_mode(&mut self, mode: ModeFlags) -> Result<()> {
        (**self).set_input_mode(mode)
    }
}
