//! Error types for the rover pipeline.

use crate::command::normalize_symbol;
use crate::telemetry::Plateau;
use glam::I64Vec2;
use thiserror::Error;

/// Errors raised while configuring the plateau, parsing commands, or driving the rover.
///
/// Every failure is synchronous and terminates the call that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    /// A required text input was empty.
    #[error("{field} must not be empty")]
    NullOrEmptyInput {
        /// Name of the offending argument (`plateau` or `input`).
        field: &'static str,
    },

    /// The plateau text does not have the `<width>x<height>` shape.
    #[error("plateau '{input}' does not match the <width>x<height> format")]
    FormatMismatch {
        /// The rejected text.
        input: String,
    },

    /// A plateau dimension is below 1 or cannot be represented.
    #[error("plateau dimensions {width}x{height} are invalid, both must be at least 1")]
    InvalidDimension {
        /// Requested width, exactly as written in the plateau text.
        width: String,
        /// Requested height, exactly as written in the plateau text.
        height: String,
    },

    /// A command character has no registered meaning.
    #[error("The command '{symbol}' is not supported")]
    UnsupportedCommand {
        /// The offending character, uppercased.
        symbol: char,
    },

    /// The command text is longer than the transmitter buffer.
    #[error("command text of length {length} exceeds capacity {capacity}")]
    CapacityExceeded {
        /// Buffer capacity in commands.
        capacity: usize,
        /// Length of the rejected text in characters.
        length: usize,
    },

    /// A move would leave the plateau.
    #[error("target ({}, {}) is outside the plateau {}", .target.x, .target.y, describe(.plateau))]
    OutOfBounds {
        /// Position the move would have produced.
        target: I64Vec2,
        /// Bounds in force when the move was attempted.
        plateau: Option<Plateau>,
    },

    /// Commands were executed before any plateau was set.
    #[error("plateau has not been initialized yet")]
    NotInitialized,
}

fn describe(plateau: &Option<Plateau>) -> String {
    match plateau {
        Some(p) => format!("{}x{}", p.width(), p.height()),
        None => "(unset)".to_string(),
    }
}

impl RoverError {
    /// Creates an empty-input error for the named argument.
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self::NullOrEmptyInput { field }
    }

    /// Creates a format mismatch error.
    #[must_use]
    pub fn format_mismatch(input: impl Into<String>) -> Self {
        Self::FormatMismatch {
            input: input.into(),
        }
    }

    /// Creates an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(width: impl ToString, height: impl ToString) -> Self {
        Self::InvalidDimension {
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    /// Creates an unsupported command error, uppercasing the symbol.
    #[must_use]
    pub fn unsupported_command(symbol: char) -> Self {
        Self::UnsupportedCommand {
            symbol: normalize_symbol(symbol),
        }
    }

    /// Creates a capacity exceeded error.
    #[must_use]
    pub const fn capacity_exceeded(capacity: usize, length: usize) -> Self {
        Self::CapacityExceeded { capacity, length }
    }

    /// Creates an out of bounds error.
    #[must_use]
    pub const fn out_of_bounds(target: I64Vec2, plateau: Option<Plateau>) -> Self {
        Self::OutOfBounds { target, plateau }
    }
}

/// Result type for rover operations.
pub type Result<T> = std::result::Result<T, RoverError>;
