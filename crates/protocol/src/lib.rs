//! Shared protocol types for the mo application.
//!
//! This crate defines the core types used across all mo components: the
//! preset tier table, the setting record built from arguments, the command
//! table, diagnostic lines and argument errors.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`preset`]: Size tiers derived from the terminal's largest size
//! - [`setting`]: Fields, tagged field values and the `SettingRecord`
//! - [`command`]: The `prefix=value` command table
//! - [`policy`]: Buffer/window column ordering policy
//! - [`diagnostic`]: Lines emitted while applying a setting
//! - [`usage`]: Usage text rendering
//! - [`error`]: Argument grammar errors
//!
//! # Examples
//!
//! Building a setting from a preset and a command:
//!
//! ```
//! use mo_protocol::{ColumnPolicy, Command, Field, PresetTable, SettingRecord, Tier};
//!
//! let tiers = PresetTable::from_largest(250, 100);
//! let mut record = SettingRecord::new();
//! record.assign_preset(Tier::Small);
//!
//! let (command, value) = Command::match_prefix("wc=100", ColumnPolicy::Constrained).unwrap();
//! for &field in command.fields() {
//!     record.assign(field, value.parse().unwrap());
//! }
//!
//! assert_eq!(record.encode(Field::WindowColumns, &tiers), 100);
//! assert_eq!(record.encode(Field::BufferColumns, &tiers), 166);
//! ```

pub mod command;
pub mod diagnostic;
pub mod error;
pub mod policy;
pub mod preset;
pub mod setting;
pub mod usage;

// Re-export primary types at crate root for convenience
pub use command::Command;
pub use diagnostic::Diagnostic;
pub use error::{ArgumentError, Result};
pub use policy::ColumnPolicy;
pub use preset::{BUFFER_LIMIT, Dimension, PresetTable, Tier};
pub use setting::{Field, SettingRecord, SettingValue, TOGGLE_DISABLED, TOGGLE_ENABLED};
