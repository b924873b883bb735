//! Universal Address
//!
//! A universal address is a byte string tagged with the multicodec of the
//! algorithm that produced it (see [`crate::algorithm`]). It is either empty,
//! meaning "no address", or exactly the algorithm's length and starts with its
//! prefix.
//!
//! ## Textual Form
//!
//! The human form is multibase base64url: a literal `u` followed by the
//! unpadded base64url of the raw bytes.
//!
//! ```text
//! u5wECOvHh76TR4a1cueOWfpjpAdr803xEzwv7bCFpl_XuUd8
//! ^ multibase marker
//! ```
//!
//! ## Accepted Inputs
//!
//! - raw bytes
//! - `0x`-prefixed hex
//! - `u`-prefixed base64url
//! - absent or empty, giving the empty address

use std::fmt;
use std::str::FromStr;

use crate::address_codec::AddressCodec;
use crate::algorithm::{find_by_prefix, Algorithm};
use crate::binary::decode_binary;
use crate::encoding::{
    base64url_to_bytes, bytes_to_base64url, compact_add_length, compact_strip_length, is_hex,
};
use crate::error::{AddressError, Result};
use crate::input::Input;

/// Multibase marker for unpadded base64url
pub const MULTIBASE_BASE64URL: char = 'u';

/// Reported by [`UniversalAddress::kind`] when no algorithm matches
pub const UNKNOWN_KIND: &str = "unknown";

/// An algorithm-tagged account address
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniversalAddress {
    bytes: Vec<u8>,
}

impl UniversalAddress {
    /// Decode and validate an address from any accepted input
    pub fn new<'a>(input: impl Into<Input<'a>>) -> Result<Self> {
        let bytes = decode_address_bytes(input.into())?;
        Self::from_bytes(bytes)
    }

    /// Validate raw bytes as an address
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let algorithm = Self::check(&bytes)?;
        tracing::trace!(
            algorithm = algorithm.map_or(UNKNOWN_KIND, |a| a.name),
            len = bytes.len(),
            "Decoded universal address"
        );
        Ok(Self { bytes })
    }

    /// Build an address from an algorithm and its key material
    pub fn from_key(algorithm: &Algorithm, key: &[u8]) -> Result<Self> {
        let mut bytes = Vec::with_capacity(algorithm.multicodec.len() + key.len());
        bytes.extend_from_slice(algorithm.multicodec);
        bytes.extend_from_slice(key);
        Self::from_bytes(bytes)
    }

    /// Wrap bytes without validation
    #[cfg(test)]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    // ============================================================================
    // Validation
    // ============================================================================

    /// Check that `bytes` form a valid address.
    ///
    /// Returns the matching algorithm, or `None` for the empty address. The
    /// first algorithm whose prefix matches decides the required length,
    /// which must be met exactly.
    pub fn check(bytes: &[u8]) -> Result<Option<&'static Algorithm>> {
        if bytes.is_empty() {
            return Ok(None);
        }

        let Some(algorithm) = find_by_prefix(bytes) else {
            tracing::debug!(len = bytes.len(), "No algorithm matches address prefix");
            return Err(AddressError::unknown_algorithm(bytes));
        };

        if bytes.len() != algorithm.len {
            tracing::debug!(
                algorithm = algorithm.name,
                expected = algorithm.len,
                actual = bytes.len(),
                "Address length does not match algorithm"
            );
            return Err(AddressError::AlgorithmLengthMismatch {
                algorithm: algorithm.name,
                expected: algorithm.len,
                actual: bytes.len(),
            });
        }

        Ok(Some(algorithm))
    }

    /// Check whether `bytes` form a valid address
    pub fn validate(bytes: &[u8]) -> bool {
        Self::check(bytes).is_ok()
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// The algorithm the address is tagged with
    pub fn algorithm(&self) -> Option<&'static Algorithm> {
        find_by_prefix(&self.bytes)
    }

    /// Name of the tagged algorithm, or [`UNKNOWN_KIND`]
    pub fn kind(&self) -> &'static str {
        self.algorithm().map_or(UNKNOWN_KIND, |a| a.name)
    }

    /// Key material after the multicodec prefix
    pub fn key(&self) -> &[u8] {
        match self.algorithm() {
            Some(algorithm) => &self.bytes[algorithm.multicodec.len()..],
            None => &[],
        }
    }

    /// Raw bytes, prefix included, without length framing
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Multibase base64url form: `u` followed by the raw bytes
    pub fn to_human(&self) -> String {
        let mut human = String::with_capacity(1 + (self.bytes.len() * 4).div_ceil(3));
        human.push(MULTIBASE_BASE64URL);
        human.push_str(&bytes_to_base64url(&self.bytes));
        human
    }
}

/// Decode an input into address bytes.
///
/// Strings other than hex must carry the `u` multibase marker; the rest is
/// base64url without length framing.
fn decode_address_bytes(input: Input<'_>) -> Result<Vec<u8>> {
    match input {
        Input::Text(text) if !text.is_empty() && !is_hex(text) => {
            let Some(encoded) = text.strip_prefix(MULTIBASE_BASE64URL) else {
                tracing::debug!("Rejected universal address without multibase marker");
                return Err(AddressError::UnsupportedFormat {
                    marker: MULTIBASE_BASE64URL,
                });
            };
            base64url_to_bytes(encoded)
        }
        other => decode_binary(other),
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl AddressCodec for UniversalAddress {
    const TYPE_NAME: &'static str = "UniversalAddress";

    fn from_input(input: Input<'_>) -> Result<Self> {
        Self::new(input)
    }

    fn from_wire(bytes: &[u8]) -> Result<Self> {
        let payload = compact_strip_length(bytes)?;
        Self::from_bytes(payload.to_vec())
    }

    fn to_wire(&self) -> Vec<u8> {
        compact_add_length(&self.bytes)
    }

    fn to_human(&self) -> String {
        UniversalAddress::to_human(self)
    }
}

impl fmt::Display for UniversalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human())
    }
}

impl FromStr for UniversalAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<Vec<u8>> for UniversalAddress {
    type Error = AddressError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for UniversalAddress {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes.to_vec())
    }
}

impl AsRef<[u8]> for UniversalAddress {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
