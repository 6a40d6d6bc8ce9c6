//! An in-memory surface that records every write.
//!
//! [`RecordingSurface`] behaves like a console with the usual ordering
//! rules (the screen buffer always covers the window, the window never
//! exceeds the largest size) or, when detached, like a process without any
//! console at all.

use crate::surface::{ModeFlags, Result, Size, SurfaceError, TerminalControlSurface};

/// Default mode of a fresh console input handle.
pub const DEFAULT_CONSOLE_MODE: u32 = 0x01f7;

/// A write or clear performed against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCall {
    SetWindowHeight(u16),
    SetWindowWidth(u16),
    SetBufferHeight(u16),
    SetBufferWidth(u16),
    ClearToOrigin,
    SetInputMode(ModeFlags),
}

/// A test double for [`TerminalControlSurface`].
///
/// # Examples
///
/// ```
/// use mo_console::{RecordingSurface, Size, SurfaceCall, TerminalControlSurface};
///
/// let mut surface = RecordingSurface::console(Size::new(120, 30), Size::new(120, 3000));
/// surface.set_window_height(40).unwrap();
/// assert!(surface.set_buffer_width(100).is_err());
///
/// assert_eq!(surface.window(), Some(Size::new(120, 40)));
/// assert_eq!(
///     surface.calls(),
///     &[SurfaceCall::SetWindowHeight(40), SurfaceCall::SetBufferWidth(100)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    largest: Option<Size>,
    window: Option<Size>,
    buffer: Option<Size>,
    mode: Option<ModeFlags>,
    reject_mode_writes: bool,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Creates a surface with no console attached: every query and write
    /// fails with [`SurfaceError::NoHandle`].
    #[must_use]
    pub fn detached() -> Self {
        Self {
            largest: None,
            window: None,
            buffer: None,
            mode: None,
            reject_mode_writes: false,
            calls: Vec::new(),
        }
    }

    /// Creates an interactive console with the given window and buffer
    /// sizes, a 250x100 largest window and the default input mode.
    #[must_use]
    pub fn console(window: Size, buffer: Size) -> Self {
        Self {
            largest: Some(Size::new(250, 100)),
            window: Some(window),
            buffer: Some(buffer),
            mode: Some(ModeFlags::from_bits_retain(DEFAULT_CONSOLE_MODE)),
            reject_mode_writes: false,
            calls: Vec::new(),
        }
    }

    /// Sets the largest window size the console reports.
    #[must_use]
    pub fn with_largest(mut self, largest: Size) -> Self {
        self.largest = Some(largest);
        self
    }

    /// Sets the current input mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ModeFlags) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Removes the input handle while keeping the geometry.
    #[must_use]
    pub fn without_input_handle(mut self) -> Self {
        self.mode = None;
        self
    }

    /// Makes every input mode write fail.
    #[must_use]
    pub fn rejecting_mode_writes(mut self) -> Self {
        self.reject_mode_writes = true;
        self
    }

    /// Returns the current window size.
    #[must_use]
    pub fn window(&self) -> Option<Size> {
        self.window
    }

    /// Returns the current buffer size.
    #[must_use]
    pub fn buffer(&self) -> Option<Size> {
        self.buffer
    }

    /// Returns the current input mode.
    #[must_use]
    pub fn mode(&self) -> Option<ModeFlags> {
        self.mode
    }

    /// Returns every write attempted so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    fn geometry(&self) -> Result<(Size, Size, Size)> {
        match (self.largest, self.window, self.buffer) {
            (Some(largest), Some(window), Some(buffer)) => Ok((largest, window, buffer)),
            _ => Err(SurfaceError::NoHandle),
        }
    }
}

impl TerminalControlSurface for RecordingSurface {
    fn largest_window_size(&self) -> Result<Size> {
        self.largest.ok_or(SurfaceError::NoHandle)
    }

    fn window_height(&self) -> Result<u16> {
        self.window.map(|w| w.height).ok_or(SurfaceError::NoHandle)
    }

    fn window_width(&self) -> Result<u16> {
        self.window.map(|w| w.width).ok_or(SurfaceError::NoHandle)
    }

    fn buffer_height(&self) -> Result<u16> {
        self.buffer.map(|b| b.height).ok_or(SurfaceError::NoHandle)
    }

    fn buffer_width(&self) -> Result<u16> {
        self.buffer.map(|b| b.width).ok_or(SurfaceError::NoHandle)
    }

    fn set_window_height(&mut self, lines: u16) -> Result<()> {
        self.calls.push(SurfaceCall::SetWindowHeight(lines));
        let (largest, window, buffer) = self.geometry()?;
        if lines == 0 || lines > largest.height || lines > buffer.height {
            return Err(SurfaceError::Rejected {
                what: "window height",
                value: lines,
            });
        }
        self.window = Some(Size::new(window.width, lines));
        Ok(())
    }

    fn set_window_width(&mut self, columns: u16) -> Result<()> {
        self.calls.push(SurfaceCall::SetWindowWidth(columns));
        let (largest, window, buffer) = self.geometry()?;
        if columns == 0 || columns > largest.width || columns > buffer.width {
            return Err(SurfaceError::Rejected {
                what: "window width",
                value: columns,
            });
        }
        self.window = Some(Size::new(columns, window.height));
        Ok(())
    }

    fn set_buffer_height(&mut self, lines: u16) -> Result<()> {
        self.calls.push(SurfaceCall::SetBufferHeight(lines));
        let (_, window, buffer) = self.geometry()?;
        if lines < window.height {
            return Err(SurfaceError::Rejected {
                what: "buffer height",
                value: lines,
            });
        }
        self.buffer = Some(Size::new(buffer.width, lines));
        Ok(())
    }

    fn set_buffer_width(&mut self, columns: u16) -> Result<()> {
        self.calls.push(SurfaceCall::SetBufferWidth(columns));
        let (_, window, buffer) = self.geometry()?;
        if columns < window.width {
            return Err(SurfaceError::Rejected {
                what: "buffer width",
                value: columns,
            });
        }
        self.buffer = Some(Size::new(columns, buffer.height));
        Ok(())
    }

    fn clear_to_origin(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::ClearToOrigin);
        self.geometry().map(|_| ())
    }

    fn input_mode(&self) -> Result<ModeFlags> {
        self.mode.ok_or(SurfaceError::NoHandle)
    }

    fn set_input_mode(&mut self, mode: ModeFlags) -> Result<()> {
        self.calls.push(SurfaceCall::SetInputMode(mode));
        if self.mode.is_none() {
            return Err(SurfaceError::NoHandle);
        }
        if self.reject_mode_writes {
            return Err(SurfaceError::Io(std::io::Error::other(
                "SetConsoleMode failed",
            )));
        }
        self.mode = Some(mode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> RecordingSurface {
        RecordingSurface::console(Size::new(100, 30), Size::new(100, 500))
    }

    #[test]
    fn detached_surface_fails_everything() {
        let mut surface = RecordingSurface::detached();
        assert!(matches!(surface.window_width(), Err(SurfaceError::NoHandle)));
        assert!(matches!(surface.input_mode(), Err(SurfaceError::NoHandle)));
        assert!(surface.set_buffer_height(600).unwrap_err().is_unavailable());
        assert_eq!(surface.calls(), &[SurfaceCall::SetBufferHeight(600)]);
    }

    #[test]
    fn buffer_must_cover_window() {
        let mut surface = console();
        assert!(matches!(
            surface.set_buffer_width(90),
            Err(SurfaceError::Rejected { .. })
        ));
        surface.set_window_width(90).unwrap();
        surface.set_buffer_width(90).unwrap();
        assert_eq!(surface.buffer(), Some(Size::new(90, 500)));
    }

    #[test]
    fn window_bounded_by_largest_and_buffer() {
        let mut surface = console();
        assert!(surface.set_window_height(101).is_err());
        assert!(surface.set_window_width(120).is_err());
        surface.set_buffer_width(200).unwrap();
        surface.set_window_width(120).unwrap();
        assert_eq!(surface.window(), Some(Size::new(120, 30)));
    }

    #[test]
    fn mode_writes() {
        let mut surface = console();
        surface.set_input_mode(ModeFlags::EXTENDED_FLAGS).unwrap();
        assert_eq!(surface.mode(), Some(ModeFlags::EXTENDED_FLAGS));

        let mut surface = console().rejecting_mode_writes();
        assert!(surface.set_input_mode(ModeFlags::INSERT).is_err());
        assert_eq!(
            surface.mode(),
            Some(ModeFlags::from_bits_retain(DEFAULT_CONSOLE_MODE))
        );

        let mut surface = console().without_input_handle();
        assert!(matches!(
            surface.set_input_mode(ModeFlags::INSERT),
            Err(SurfaceError::NoHandle)
        ));
    }
}
