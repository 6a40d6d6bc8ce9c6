//! Win32 console surface.
//!
//! Geometry is read and written on the standard output screen buffer,
//! input modes on the standard input handle.

use std::io;
use std::mem;

use crossterm::{cursor, execute, terminal};
use tracing::debug;
use windows_sys::Win32::Foundation::{ERROR_INVALID_PARAMETER, HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{
    CONSOLE_MODE, CONSOLE_SCREEN_BUFFER_INFO, COORD, GetConsoleMode, GetConsoleScreenBufferInfo,
    GetLargestConsoleWindowSize, GetStdHandle, SMALL_RECT, STD_HANDLE, STD_INPUT_HANDLE,
    STD_OUTPUT_HANDLE, SetConsoleMode, SetConsoleScreenBufferSize, SetConsoleWindowInfo,
};

use crate::surface::{ModeFlags, Result, Size, SurfaceError, TerminalControlSurface};

/// A [`TerminalControlSurface`] over the attached Win32 console.
#[derive(Debug, Default)]
pub struct WindowsConsole {
    _private: (),
}

impl WindowsConsole {
    /// Creates a surface for the console attached to this process.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(kind: STD_HANDLE) -> Result<HANDLE> {
        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { GetStdHandle(kind) };
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(SurfaceError::NoHandle);
        }
        Ok(handle)
    }

    fn screen_info(&self) -> Result<CONSOLE_SCREEN_BUFFER_INFO> {
        let handle = Self::handle(STD_OUTPUT_HANDLE)?;
        // SAFETY: plain-data struct, fully written by the call on success.
        let mut info: CONSOLE_SCREEN_BUFFER_INFO = unsafe { mem::zeroed() };
        // SAFETY: `info` is a valid, writable CONSOLE_SCREEN_BUFFER_INFO.
        if unsafe { GetConsoleScreenBufferInfo(handle, &mut info) } == 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(info)
    }

    fn set_window(&mut self, what: &'static str, value: u16, rect: SMALL_RECT) -> Result<()> {
        let handle = Self::handle(STD_OUTPUT_HANDLE)?;
        debug!(what, value, "setting console window");
        // SAFETY: `rect` outlives the call.
        let ok = unsafe { SetConsoleWindowInfo(handle, 1, &rect) };
        check(ok, what, value)
    }

    fn set_buffer(&mut self, what: &'static str, value: u16, size: COORD) -> Result<()> {
        let handle = Self::handle(STD_OUTPUT_HANDLE)?;
        debug!(what, value, "setting console screen buffer");
        // SAFETY: the handle was validated above.
        let ok = unsafe { SetConsoleScreenBufferSize(handle, size) };
        check(ok, what, value)
    }
}

/// Maps a Win32 `BOOL` result, reporting refused parameters as rejections.
fn check(ok: i32, what: &'static str, value: u16) -> Result<()> {
    if ok != 0 {
        return Ok(());
    }
    let error = io::Error::last_os_error();
    if error.raw_os_error() == Some(ERROR_INVALID_PARAMETER as i32) {
        Err(SurfaceError::Rejected { what, value })
    } else {
        Err(error.into())
    }
}

fn window_size(info: &CONSOLE_SCREEN_BUFFER_INFO) -> Size {
    let window = info.srWindow;
    Size::new(
        (window.Right - window.Left + 1) as u16,
        (window.Bottom - window.Top + 1) as u16,
    )
}

impl TerminalControlSurface for WindowsConsole {
    fn largest_window_size(&self) -> Result<Size> {
        let handle = Self::handle(STD_OUTPUT_HANDLE)?;
        // SAFETY: the handle was validated above.
        let largest = unsafe { GetLargestConsoleWindowSize(handle) };
        if largest.X <= 0 || largest.Y <= 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(Size::new(largest.X as u16, largest.Y as u16))
    }

    fn window_height(&self) -> Result<u16> {
        self.screen_info().map(|info| window_size(&info).height)
    }

    fn window_width(&self) -> Result<u16> {
        self.screen_info().map(|info| window_size(&info).width)
    }

    fn buffer_height(&self) -> Result<u16> {
        self.screen_info().map(|info| info.dwSize.Y as u16)
    }

    fn buffer_width(&self) -> Result<u16> {
        self.screen_info().map(|info| info.dwSize.X as u16)
    }

    fn set_window_height(&mut self, lines: u16) -> Result<()> {
        let window = self.screen_info()?.srWindow;
        let rect = SMALL_RECT {
            Bottom: window.Top + lines as i16 - 1,
            ..window
        };
        self.set_window("window height", lines, rect)
    }

    fn set_window_width(&mut self, columns: u16) -> Result<()> {
        let window = self.screen_info()?.srWindow;
        let rect = SMALL_RECT {
            Right: window.Left + columns as i16 - 1,
            ..window
        };
        self.set_window("window width", columns, rect)
    }

    fn set_buffer_height(&mut self, lines: u16) -> Result<()> {
        let size = self.screen_info()?.dwSize;
        let size = COORD {
            X: size.X,
            Y: lines as i16,
        };
        self.set_buffer("buffer height", lines, size)
    }

    fn set_buffer_width(&mut self, columns: u16) -> Result<()> {
        let size = self.screen_info()?.dwSize;
        let size = COORD {
            X: columns as i16,
            Y: size.Y,
        };
        self.set_buffer("buffer width", columns, size)
    }

    fn clear_to_origin(&mut self) -> Result<()> {
        Self::handle(STD_OUTPUT_HANDLE)?;
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn input_mode(&self) -> Result<ModeFlags> {
        let handle = Self::handle(STD_INPUT_HANDLE)?;
        let mut mode: CONSOLE_MODE = 0;
        // SAFETY: `mode` is a valid, writable CONSOLE_MODE.
        if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(ModeFlags::from_bits_retain(mode))
    }

    fn set_input_mode(&mut self, mode: ModeFlags) -> Result<()> {
        let handle = Self::handle(STD_INPUT_HANDLE)?;
        debug!(mode = mode.bits(), "setting console input mode");
        // SAFETY: the handle was validated above.
        if unsafe { SetConsoleMode(handle, mode.bits()) } == 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(())
    }
}
