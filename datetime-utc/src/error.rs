//! Conversion errors

use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// The single error kind raised when a value cannot cross the storage boundary.
///
/// Conversions are deterministic, so retrying with the same input will fail the same
/// way. Absent input never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The application handed over a value this type does not store
    #[error(
        "Could not convert value of type `{value_type}` to storage with type `{type_name}`. \
         Expected one of: {}",
        .expected.join(", ")
    )]
    UnsupportedToStorage {
        /// Type name of the rejected value
        value_type: String,
        /// Name of the column type doing the conversion
        type_name: &'static str,
        /// Type names the column type accepts
        expected: Vec<&'static str>,
    },

    /// Storage handed back something that is neither a string nor a datetime
    #[error("Could not convert stored value of type `{value_type}` with type `{type_name}`")]
    UnsupportedFromStorage {
        /// Type name of the rejected value
        value_type: String,
        /// Name of the column type doing the conversion
        type_name: &'static str,
    },

    /// A stored string does not match the storage format
    #[error(
        "Could not convert stored value {value:?} with type `{type_name}`. \
         Expected format: {expected_format}"
    )]
    InvalidFormat {
        /// The rejected string, verbatim
        value: String,
        /// Name of the column type doing the conversion
        type_name: &'static str,
        /// The format the string had to match
        expected_format: &'static str,
    },
}

/// Machine-readable cause of a [`ConversionError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ConversionReason {
    /// The value's concrete type is not accepted
    InvalidType,
    /// The string does not match the storage format
    InvalidFormat,
}

/// Which way a value was crossing the boundary when it failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Application to storage
    ToStorage,
    /// Storage to application
    FromStorage,
}

impl ConversionError {
    /// The reason code of this error.
    pub fn reason(&self) -> ConversionReason {
        match self {
            ConversionError::UnsupportedToStorage { .. }
            | ConversionError::UnsupportedFromStorage { .. } => ConversionReason::InvalidType,
            ConversionError::InvalidFormat { .. } => ConversionReason::InvalidFormat,
        }
    }

    /// The direction the failed conversion was going.
    pub fn direction(&self) -> Direction {
        match self {
            ConversionError::UnsupportedToStorage { .. } => Direction::ToStorage,
            ConversionError::UnsupportedFromStorage { .. }
            | ConversionError::InvalidFormat { .. } => Direction::FromStorage,
        }
    }

    /// Name of the column type that raised the error.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConversionError::UnsupportedToStorage { type_name, .. }
            | ConversionError::UnsupportedFromStorage { type_name, .. }
            | ConversionError::InvalidFormat { type_name, .. } => *type_name,
        }
    }
}
