//! Configuration management for the mo application.
//!
//! This crate handles loading and validating the tool's own behaviour
//! settings. It never stores terminal settings between runs.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct, loading and environment overrides
//! - [`fallback`]: Static geometry for terminals that cannot report their own
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`MO_COLUMN_POLICY`)
//! 2. Local config (`./mo.json5` or `./mo.json`)
//! 3. User config (`~/.config/mo/config.json5` or `~/.config/mo/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   // "constrained" (default) or "basic"
//!   column_policy: "constrained",
//!   fallback: {
//!     largest_width: 250,
//!     largest_height: 100,
//!     window_lines: 50,
//!     window_columns: 100,
//!     buffer_lines: 500,
//!     buffer_columns: 100,
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use mo_config::Config;
//!
//! # fn example() -> mo_config::Result<()> {
//! let config = Config::load()?;
//! println!("Column policy: {}", config.column_policy);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use fallback::FallbackGeometry;
