//! Serde support
//!
//! Human-readable formats (JSON, TOML, ...) use the human form. Binary formats
//! (postcard, bincode, ...) carry raw bytes for [`Binary`] and
//! [`UniversalAddress`], and the wire form for [`MultiAddress`], matching what
//! each type's `from_input` reads back from bytes.
//!
//! Human-readable deserialisation goes through [`Input`], so every encoding
//! accepted by the constructors is accepted here as well: strings, byte
//! arrays, sequences of integers and `null`. A `MultiAddress` additionally
//! accepts a single-entry map keyed by variant name, e.g. `{"Id": "u5wEC..."}`.
//! Binary formats are not self-describing and always read a byte buffer.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address_codec::AddressCodec;
use crate::binary::Binary;
use crate::input::Input;
use crate::multi_address::{MultiAddress, MultiAddressTag};
use crate::universal_address::UniversalAddress;

// ============================================================================
// Shared Visitor
// ============================================================================

struct InputVisitor<T>(PhantomData<T>);

impl<T> InputVisitor<T> {
    fn new() -> Self {
        InputVisitor(PhantomData)
    }
}

fn build<T: AddressCodec, E: de::Error>(input: Input<'_>) -> Result<T, E> {
    T::from_input(input).map_err(E::custom)
}

/// Human-readable formats describe their own values; binary formats only
/// ever hold the byte buffer written by `serialize_bytes`.
fn deserialize_input<'de, D, V>(deserializer: D, visitor: V) -> Result<V::Value, D::Error>
where
    D: Deserializer<'de>,
    V: Visitor<'de>,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(visitor)
    } else {
        deserializer.deserialize_byte_buf(visitor)
    }
}

impl<'de, T: AddressCodec> Visitor<'de> for InputVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} as a string, bytes or null", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        build(Input::Text(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        build(Input::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<T, E> {
        build(Input::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        build(Input::from(bytes))
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        build(Input::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        build(Input::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserialize_input(deserializer, self)
    }
}

// ============================================================================
// Binary
// ============================================================================

impl Serialize for Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_human())
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_input(deserializer, InputVisitor::new())
    }
}

// ============================================================================
// UniversalAddress
// ============================================================================

impl Serialize for UniversalAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_human())
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for UniversalAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_input(deserializer, InputVisitor::new())
    }
}

// ============================================================================
// MultiAddress
// ============================================================================

impl Serialize for MultiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return serializer.serialize_bytes(&self.to_wire());
        }

        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            MultiAddress::Id(address) => map.serialize_entry(self.type_name(), address)?,
        }
        map.end()
    }
}

struct MultiAddressVisitor;

impl<'de> Visitor<'de> for MultiAddressVisitor {
    type Value = MultiAddress;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a MultiAddress as a string, bytes, null or a single-entry variant map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MultiAddress, E> {
        InputVisitor::new().visit_str(v)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<MultiAddress, E> {
        InputVisitor::new().visit_bytes(v)
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<MultiAddress, E> {
        InputVisitor::new().visit_byte_buf(v)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<MultiAddress, A::Error> {
        InputVisitor::new().visit_seq(seq)
    }

    fn visit_unit<E: de::Error>(self) -> Result<MultiAddress, E> {
        InputVisitor::new().visit_unit()
    }

    fn visit_none<E: de::Error>(self) -> Result<MultiAddress, E> {
        InputVisitor::new().visit_none()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<MultiAddress, D::Error> {
        deserialize_input(deserializer, self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<MultiAddress, A::Error> {
        let Some(name) = map.next_key::<String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let tag: MultiAddressTag = name.parse().map_err(de::Error::custom)?;

        let value = match tag {
            MultiAddressTag::Id => MultiAddress::Id(map.next_value::<UniversalAddress>()?),
        };

        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(value)
    }
}

impl<'de> Deserialize<'de> for MultiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_input(deserializer, MultiAddressVisitor)
    }
}
