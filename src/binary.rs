//! Raw byte wrapper
//!
//! [`decode_binary`] normalises any accepted input encoding into the payload
//! bytes. [`Binary`] wraps those bytes and renders them as base64url.

use std::fmt;
use std::str::FromStr;

use crate::address_codec::AddressCodec;
use crate::encoding::{
    base64url_to_bytes, bytes_to_base64url, compact_add_length, compact_strip_length, hex_to_bytes,
    is_hex,
};
use crate::error::{AddressError, Result};
use crate::input::Input;

/// Decode an input into its payload bytes.
///
/// - bytes are copied as-is
/// - absent input and the empty string give an empty payload
/// - `0x`-prefixed hex is hex-decoded
/// - any other string is base64url-decoded
///
/// The payload never carries the compact length header; that belongs to the
/// wire form only.
pub fn decode_binary(input: Input<'_>) -> Result<Vec<u8>> {
    if input.is_absent() {
        return Ok(Vec::new());
    }

    match input {
        Input::Bytes(bytes) => Ok(bytes.into_owned()),
        Input::Text(text) if is_hex(text) => hex_to_bytes(text),
        Input::Text(text) => base64url_to_bytes(text),
        other => {
            let found = other.type_name();
            tracing::debug!(input_type = found, "Rejected binary input");
            Err(AddressError::UnsupportedInputType { found })
        }
    }
}

/// An arbitrary byte string with a base64url human form
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary(Vec<u8>);

impl Binary {
    /// Decode from any accepted input, see [`decode_binary`]
    pub fn new<'a>(input: impl Into<Input<'a>>) -> Result<Self> {
        decode_binary(input.into()).map(Binary)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Binary(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base64url of the payload, without the length header.
    ///
    /// Parsing does not always invert this: an encoding that happens to read
    /// as `0x` hex (bytes `d3 1d 34` render as `"0x00"`) is decoded as hex.
    /// `FromStr` and human-readable serde formats such as JSON inherit this;
    /// the wire form, SCALE and binary serde formats round-trip exactly.
    pub fn to_human(&self) -> String {
        bytes_to_base64url(&self.0)
    }
}

impl AddressCodec for Binary {
    const TYPE_NAME: &'static str = "Binary";

    fn from_input(input: Input<'_>) -> Result<Self> {
        decode_binary(input).map(Binary)
    }

    fn from_wire(bytes: &[u8]) -> Result<Self> {
        compact_strip_length(bytes).map(|payload| Binary(payload.to_vec()))
    }

    fn to_wire(&self) -> Vec<u8> {
        compact_add_length(&self.0)
    }

    fn to_human(&self) -> String {
        Binary::to_human(self)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human())
    }
}

impl FromStr for Binary {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Binary::new(s)
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Binary(bytes)
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
