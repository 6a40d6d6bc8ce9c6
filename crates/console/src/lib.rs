//! Terminal control surface for the mo application.
//!
//! This crate abstracts the console capabilities mo needs (window and
//! screen buffer geometry, clear-to-origin, input mode bits) behind the
//! [`TerminalControlSurface`] trait.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`surface`]: The trait, error type, sizes and input mode flags
//! - [`recording`]: An in-memory surface that records writes, for tests
//! - `terminal`: crossterm-backed surface for Unix-like terminals
//! - `windows`: Win32 console surface
//!
//! # Example
//!
//! ```no_run
//! use mo_console::{TerminalControlSurface, platform_surface};
//!
//! let surface = platform_surface();
//! match surface.window_width() {
//!     Ok(columns) => println!("{columns} columns"),
//!     Err(err) => eprintln!("no terminal: {err}"),
//! }
//! ```

pub mod recording;
pub mod surface;

#[cfg(not(windows))]
mod terminal;
#[cfg(windows)]
mod windows;

// Re-export primary types at crate root for convenience
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::{ModeFlags, ModeState, Result, Size, SurfaceError, TerminalControlSurface};
#[cfg(not(windows))]
pub use terminal::TerminalSurface;
#[cfg(windows)]
pub use windows::WindowsConsole;

/// The production surface of the current target platform.
#[cfg(not(windows))]
pub type PlatformSurface = TerminalSurface;

/// The production surface of the current target platform.
#[cfg(windows)]
pub type PlatformSurface = WindowsConsole;

/// Returns the production surface of the current target platform.
#[must_use]
pub fn platform_surface() -> PlatformSurface {
    PlatformSurface::new()
}
