//! Terminal surface for Unix-like systems, backed by crossterm.
//!
//! Terminal emulators expose the visible window size and accept xterm
//! resize requests, but have no separately sized screen buffer and no
//! console input mode. Those capabilities report
//! [`SurfaceError::Unsupported`] or [`SurfaceError::NoHandle`], which the
//! engine treats as not actionable in this environment.

use std::io::{self, IsTerminal};

use crossterm::{execute, terminal};
use tracing::debug;

use crate::surface::{ModeFlags, Result, Size, SurfaceError, TerminalControlSurface};

/// A [`TerminalControlSurface`] over the process's controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    _private: (),
}

impl TerminalSurface {
    /// Creates a surface for the current process.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn size(&self) -> Result<Size> {
        let (width, height) = terminal::size()?;
        Ok(Size::new(width, height))
    }

    fn resize(&mut self, target: impl FnOnce(Size) -> Size) -> Result<()> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(SurfaceError::NoHandle);
        }
        let size = target(self.size()?);
        debug!(columns = size.width, lines = size.height, "requesting terminal resize");
        execute!(stdout, terminal::SetSize(size.width, size.height))?;
        Ok(())
    }
}

impl TerminalControlSurface for TerminalSurface {
    fn largest_window_size(&self) -> Result<Size> {
        Err(SurfaceError::Unsupported("largest window size"))
    }

    fn window_height(&self) -> Result<u16> {
        self.size().map(|size| size.height)
    }

    fn window_width(&self) -> Result<u16> {
        self.size().map(|size| size.width)
    }

    fn buffer_height(&self) -> Result<u16> {
        Err(SurfaceError::Unsupported("screen buffer size"))
    }

    fn buffer_width(&self) -> Result<u16> {
        Err(SurfaceError::Unsupported("screen buffer size"))
    }

    fn set_window_height(&mut self, lines: u16) -> Result<()> {
        self.resize(|size| Size::new(size.width, lines))
    }

    fn set_window_width(&mut self, columns: u16) -> Result<()> {
        self.resize(|size| Size::new(columns, size.height))
    }

    fn set_buffer_height(&mut self, _lines: u16) -> Result<()> {
        Err(SurfaceError::Unsupported("screen buffer size"))
    }

    fn set_buffer_width(&mut self, _columns: u16) -> Result<()> {
        Err(SurfaceError::Unsupported("screen buffer size"))
    }

    fn clear_to_origin(&mut self) -> Result<()> {
        // Scrollback is not resizable on this surface.
        Err(SurfaceError::Unsupported("screen buffer size"))
    }

    fn input_mode(&self) -> Result<ModeFlags> {
        Err(SurfaceError::NoHandle)
    }

    fn set_input_mode(&mut self, _mode: ModeFlags) -> Result<()> {
        Err(SurfaceError::NoHandle)
    }
}
