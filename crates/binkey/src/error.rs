//! Error types for key operations

use thiserror::Error;

/// Errors returned by the checked key operations
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum KeyError {
    /// View is shorter than the operation requires
    #[error("Key too short: need {needed} bytes, have {actual}")]
    InsufficientLength {
        /// Bytes required by the operation
        needed: usize,
        /// Bytes present in the view
        actual: usize,
    },

    /// Byte length does not match the fixed key width
    #[error("Invalid key width: expected {expected}, got {actual}")]
    InvalidWidth {
        /// Width of the integer type in bytes
        expected: usize,
        /// Length of the provided bytes
        actual: usize,
    },

    /// Hex string could not be decoded
    #[error("Invalid hex key: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Fixed-width key was default-constructed and holds no value
    #[error("Key has no encoded value")]
    Unset,
}

/// Result alias for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
