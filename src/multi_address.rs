//! Multi-Address
//!
//! A discriminated union over the address kinds an account can be referred to
//! by. Only the `Id` variant, holding a [`UniversalAddress`], exists today.
//!
//! ## Wire Format
//!
//! ```text
//! | Variant index (1 byte) | Compact length | Payload bytes |
//! ```
//!
//! - `0x00`: `Id`

use std::fmt;
use std::str::FromStr;

use codec::Decode;

use crate::address_codec::AddressCodec;
use crate::encoding::{compact_add_length, compact_split_length, hex_to_bytes, is_hex};
use crate::error::{AddressError, Result};
use crate::input::Input;
use crate::universal_address::UniversalAddress;

// ============================================================================
// Discriminant
// ============================================================================

/// Discriminant of a [`MultiAddress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiAddressTag {
    Id,
}

impl MultiAddressTag {
    /// All tags, in index order
    pub const ALL: [MultiAddressTag; 1] = [MultiAddressTag::Id];

    /// Index written on the wire
    pub const fn index(self) -> u8 {
        match self {
            MultiAddressTag::Id => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MultiAddressTag::Id => "Id",
        }
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.index() == index)
            .ok_or(AddressError::UnknownVariantIndex { index })
    }
}

impl fmt::Display for MultiAddressTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiAddressTag {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| AddressError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

// ============================================================================
// Multi-Address
// ============================================================================

/// An account address tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MultiAddress {
    /// A universal (multicodec-tagged) address
    Id(UniversalAddress),
}

impl MultiAddress {
    /// Decode from any accepted input.
    ///
    /// Bytes and hex strings are read as the wire form. Any other string, or
    /// an absent value, is taken as the payload of an `Id`.
    pub fn new<'a>(input: impl Into<Input<'a>>) -> Result<Self> {
        match input.into() {
            Input::Bytes(bytes) => Self::from_wire_or_default(&bytes),
            Input::Text(text) if is_hex(text) => Self::from_wire_or_default(&hex_to_bytes(text)?),
            other => Self::with_tag(MultiAddressTag::Id, other),
        }
    }

    /// Construct the variant named by `tag` from its payload input.
    ///
    /// The payload is validated the same way as the variant's own type.
    pub fn with_tag<'a>(tag: MultiAddressTag, payload: impl Into<Input<'a>>) -> Result<Self> {
        match tag {
            MultiAddressTag::Id => UniversalAddress::new(payload).map(MultiAddress::Id),
        }
    }

    fn from_wire_or_default(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(MultiAddress::default());
        }
        Self::from_wire(bytes)
    }

    pub fn tag(&self) -> MultiAddressTag {
        match self {
            MultiAddress::Id(_) => MultiAddressTag::Id,
        }
    }

    /// Name of the active variant
    pub fn type_name(&self) -> &'static str {
        self.tag().as_str()
    }

    pub fn as_id(&self) -> Option<&UniversalAddress> {
        match self {
            MultiAddress::Id(address) => Some(address),
        }
    }

    pub fn into_id(self) -> Option<UniversalAddress> {
        match self {
            MultiAddress::Id(address) => Some(address),
        }
    }

    /// Human form of the payload
    pub fn to_human(&self) -> String {
        match self {
            MultiAddress::Id(address) => address.to_human(),
        }
    }

    fn payload_bytes(&self) -> &[u8] {
        match self {
            MultiAddress::Id(address) => address.as_bytes(),
        }
    }
}

impl Default for MultiAddress {
    fn default() -> Self {
        MultiAddress::Id(UniversalAddress::default())
    }
}

impl AddressCodec for MultiAddress {
    const TYPE_NAME: &'static str = "MultiAddress";

    fn from_input(input: Input<'_>) -> Result<Self> {
        Self::new(input)
    }

    fn from_wire(bytes: &[u8]) -> Result<Self> {
        let mut cursor = bytes;
        let tag = MultiAddressTag::from_index(u8::decode(&mut cursor)?)?;

        let (payload, rest) = compact_split_length(cursor)?;
        if !rest.is_empty() {
            tracing::debug!(
                tag = tag.as_str(),
                remaining = rest.len(),
                "Trailing bytes after multi-address"
            );
            return Err(AddressError::TrailingBytes {
                remaining: rest.len(),
            });
        }

        match tag {
            MultiAddressTag::Id => {
                UniversalAddress::from_bytes(payload.to_vec()).map(MultiAddress::Id)
            }
        }
    }

    fn to_wire(&self) -> Vec<u8> {
        let framed = compact_add_length(self.payload_bytes());
        let mut wire = Vec::with_capacity(1 + framed.len());
        wire.push(self.tag().index());
        wire.extend_from_slice(&framed);
        wire
    }

    fn to_human(&self) -> String {
        MultiAddress::to_human(self)
    }
}

impl fmt::Display for MultiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_name(), self.to_human())
    }
}

impl From<UniversalAddress> for MultiAddress {
    fn from(address: UniversalAddress) -> Self {
        MultiAddress::Id(address)
    }
}
