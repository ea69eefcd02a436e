//! Error types for the dice class system.
//!
//! Classification itself never fails. These errors cover the fallible
//! edges around it: parsing die expressions and decoding profile input.

use thiserror::Error;

/// Result type alias for dice class operations.
pub type Result<T> = std::result::Result<T, DiceClassError>;

#[derive(Error, Debug)]
pub enum DiceClassError {
    /// A die expression that is not one of the ten known classes.
    #[error("Unknown dice class notation: '{0}'")]
    UnknownNotation(String),

    /// Profile input could not be decoded as JSON.
    #[error("Invalid creature profile: {0}")]
    InvalidProfile(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiceClassError {
    /// Create an unknown notation error.
    pub fn unknown_notation(notation: impl Into<String>) -> Self {
        Self::UnknownNotation(notation.into())
    }
}
