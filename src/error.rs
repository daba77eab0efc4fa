//! Error types for Smart City.

use thiserror::Error;

/// Errors raised by the building collection.
///
/// All of these are recoverable: the controller prints the message and
/// returns to the menu.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CityError {
    /// The city already holds the maximum number of buildings.
    #[error("City is full! Cannot add more buildings (max {max}).")]
    Full { max: usize },

    /// A 1-based building number outside `[1, len]`.
    #[error("Invalid building number! ({number} is not in 1-{len})")]
    InvalidSelection { number: i64, len: usize },

    /// The operation needs at least one building.
    #[error("No buildings available!")]
    Empty,
}

/// Errors raised while reading console input.
///
/// These are fatal for the run and propagate out of the controller loop.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Input ended before a value was supplied.
    #[error("input ended while reading {field}")]
    UnexpectedEof { field: String },

    /// Expected a whole number.
    #[error("invalid integer for {field}: '{value}'")]
    InvalidInteger { field: String, value: String },

    /// Expected a real number.
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Expected `true` or `false`.
    #[error("invalid boolean for {field}: '{value}' (expected true/false)")]
    InvalidBoolean { field: String, value: String },

    /// JSON output could not be produced.
    #[error(transparent)]
    Export {
        #[from]
        source: ExportError,
    },
}

/// Errors that can occur when rendering JSON output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write the rendered data.
    #[error("failed to write data: {message}")]
    WriteError { message: String },
}
