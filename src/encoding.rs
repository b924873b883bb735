//! Byte/string primitives shared by the codecs
//!
//! - hex detection and decoding (`0x`-prefixed)
//! - base64url encoding and decoding (RFC 4648 URL-safe alphabet, no padding on output)
//! - SCALE compact length framing used by the wire form

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use codec::{Compact, Decode, Encode};

use crate::error::{AddressError, Result};

/// URL-safe base64 engine: never pads when encoding, accepts either form when decoding.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ============================================================================
// Hex
// ============================================================================

/// Check whether a string is `0x`-prefixed hex with an even number of digits.
///
/// Digits are case-insensitive. A bare `"0x"` counts as hex (the empty byte string).
pub fn is_hex(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(digits) => digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Decode a `0x`-prefixed hex string to bytes
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(digits)?)
}

// ============================================================================
// Base64url
// ============================================================================

/// Encode bytes as unpadded base64url
pub fn bytes_to_base64url(bytes: &[u8]) -> String {
    BASE64URL.encode(bytes)
}

/// Decode a base64url string, padded or not
pub fn base64url_to_bytes(value: &str) -> Result<Vec<u8>> {
    Ok(BASE64URL.decode(value)?)
}

// ============================================================================
// Compact Length Framing
// ============================================================================

/// Prepend the SCALE compact-encoded byte count to `payload`.
///
/// The length header uses the smallest compact mode that fits.
pub fn compact_add_length(payload: &[u8]) -> Vec<u8> {
    payload.encode()
}

/// Split a compact length header off `input`.
///
/// Returns the framed payload and whatever follows it.
pub fn compact_split_length(input: &[u8]) -> Result<(&[u8], &[u8])> {
    let mut cursor = input;
    let Compact(declared) = Compact::<u32>::decode(&mut cursor)?;
    let declared = declared as usize;

    if cursor.len() < declared {
        return Err(AddressError::FramingMismatch {
            declared,
            available: cursor.len(),
        });
    }

    Ok(cursor.split_at(declared))
}

/// Strip the compact length header from `framed`, which must hold exactly one frame
pub fn compact_strip_length(framed: &[u8]) -> Result<&[u8]> {
    let (payload, rest) = compact_split_length(framed)?;
    if !rest.is_empty() {
        return Err(AddressError::TrailingBytes {
            remaining: rest.len(),
        });
    }
    Ok(payload)
}
