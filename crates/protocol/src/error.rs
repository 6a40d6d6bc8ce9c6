//! Error types for the mo-protocol crate.
//!
//! This module defines the argument grammar errors. Any of them aborts the
//! run before a single field is applied and makes the caller print usage.

use thiserror::Error;

/// Errors that can occur while interpreting command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// An integer argument outside the preset range `0..=3`.
    #[error("unknown argument `{0}`, use 0-3")]
    UnknownArgument(String),

    /// An argument that is neither an integer nor a known command.
    #[error("unknown argument option `{0}`, see usage")]
    UnknownArgumentOption(String),

    /// A command whose value is empty, unparsable or negative.
    #[error("unknown argument value in `{0}`, see usage")]
    InvalidArgumentValue(String),

    /// No argument requested a preset or a command.
    #[error("no preset or command requested")]
    NothingRequested,

    /// The resulting setting holds a negative value.
    #[error("setting contains an invalid value")]
    InvalidSetting,
}

/// A specialized Result type for argument interpretation.
pub type Result<T> = std::result::Result<T, ArgumentError>;
