//! Error types for address decoding and validation
//!
//! Every error is raised while constructing a value and indicates malformed
//! input. None of them are transient, so callers should not retry.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AddressError>;

#[derive(Error, Debug)]
pub enum AddressError {
    // ========================================================================
    // Input Errors
    // ========================================================================

    #[error("Unsupported input type: found {found}")]
    UnsupportedInputType { found: &'static str },

    #[error("Unsupported format: expected '{marker}' multibase prefix")]
    UnsupportedFormat { marker: char },

    #[error("Invalid hex string: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid base64url string: {0}")]
    Base64(#[from] base64::DecodeError),

    // ========================================================================
    // Algorithm Errors
    // ========================================================================

    #[error("Unknown algorithm for universal address (leading bytes 0x{prefix})")]
    UnknownAlgorithm { prefix: String },

    #[error("Invalid {algorithm} address length: expected {expected} bytes, got {actual}")]
    AlgorithmLengthMismatch {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    // ========================================================================
    // Wire Errors
    // ========================================================================

    #[error("Invalid SCALE encoding: {0}")]
    Scale(#[from] codec::Error),

    #[error("Length prefix declares {declared} bytes, but {available} are available")]
    FramingMismatch { declared: usize, available: usize },

    #[error("Unexpected trailing bytes: {remaining} left after decoding")]
    TrailingBytes { remaining: usize },

    #[error("Unknown multi-address variant index: {index}")]
    UnknownVariantIndex { index: u8 },

    #[error("Unknown multi-address variant: {name}")]
    UnknownVariant { name: String },
}

impl AddressError {
    /// Build an `UnknownAlgorithm` error from the rejected bytes.
    ///
    /// Only the leading bytes are kept, enough to show which multicodec
    /// prefix was presented.
    pub(crate) fn unknown_algorithm(bytes: &[u8]) -> Self {
        let shown = bytes.len().min(4);
        AddressError::UnknownAlgorithm {
            prefix: hex::encode(&bytes[..shown]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_truncates_prefix() {
        let err = AddressError::unknown_algorithm(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        match err {
            AddressError::UnknownAlgorithm { prefix } => assert_eq!(prefix, "deadbeef"),
            other => panic!("unexpected error: {other}"),
        }

        let err = AddressError::unknown_algorithm(&[0x01]);
        assert_eq!(
            err.to_string(),
            "Unknown algorithm for universal address (leading bytes 0x01)"
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = AddressError::AlgorithmLengthMismatch {
            algorithm: "ed25519",
            expected: 34,
            actual: 33,
        };
        assert_eq!(
            err.to_string(),
            "Invalid ed25519 address length: expected 34 bytes, got 33"
        );
    }
}
