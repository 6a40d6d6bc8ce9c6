//! Argument interpretation and ordered application engine for mo.
//!
//! This crate turns a command line into a [`SettingRecord`](mo_protocol::SettingRecord)
//! and applies it to a [`TerminalControlSurface`](mo_console::TerminalControlSurface),
//! or reports the surface's current state when there are no arguments.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`presets`]: Tier table resolution against a surface
//! - [`parser`]: Argument grammar
//! - [`applier`]: Ordered, error-tolerant application with per-field diagnostics
//! - [`status`]: The status block
//! - [`sink`]: Where diagnostic lines go
//! - [`app`]: One full invocation
//!
//! # Examples
//!
//! ```
//! use mo_console::{RecordingSurface, Size};
//! use mo_engine::App;
//!
//! let mut surface = RecordingSurface::console(Size::new(100, 30), Size::new(100, 500));
//! let mut out = Vec::new();
//! let outcome = App::default()
//!     .run(["1", "qe=false"], &mut surface, &mut out, std::io::sink())
//!     .unwrap();
//!
//! assert!(outcome.is_success());
//! assert_eq!(surface.window(), Some(Size::new(120, 46)));
//! assert!(String::from_utf8(out).unwrap().ends_with("quick edit set False\ninsert set True\n"));
//! ```

pub mod app;
pub mod applier;
pub mod parser;
pub mod presets;
pub mod sink;
pub mod status;

// Re-export primary types at crate root for convenience
pub use app::{App, RunOutcome};
pub use applier::{ApplySummary, ConsoleApplier, FieldOutcome};
pub use parser::ArgumentParser;
pub use presets::resolve_presets;
pub use sink::{DiagnosticSink, StreamSink};
pub use status::StatusReport;
