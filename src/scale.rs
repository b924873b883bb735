//! SCALE `Encode`/`Decode` for the address types
//!
//! Lets addresses be nested inside larger SCALE-encoded records. The encoding
//! is identical to [`AddressCodec::to_wire`](crate::AddressCodec::to_wire);
//! decoding applies the same validation as construction, but reports failures
//! as a `codec::Error` since that is what the trait requires. Use
//! `AddressCodec::from_wire` to get the typed [`AddressError`](crate::AddressError).

use codec::{Decode, Encode, EncodeLike, Error, Input, Output};

use crate::binary::Binary;
use crate::multi_address::{MultiAddress, MultiAddressTag};
use crate::universal_address::UniversalAddress;

impl Encode for Binary {
    fn size_hint(&self) -> usize {
        self.as_bytes().size_hint()
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.as_bytes().encode_to(dest)
    }
}

impl EncodeLike for Binary {}

impl Decode for Binary {
    fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
        Vec::<u8>::decode(input).map(Binary::from_bytes)
    }
}

impl Encode for UniversalAddress {
    fn size_hint(&self) -> usize {
        self.as_bytes().size_hint()
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.as_bytes().encode_to(dest)
    }
}

impl EncodeLike for UniversalAddress {}

impl Decode for UniversalAddress {
    fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
        let bytes = Vec::<u8>::decode(input)?;
        UniversalAddress::from_bytes(bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected SCALE-encoded universal address");
            Error::from("Invalid universal address")
        })
    }
}

impl Encode for MultiAddress {
    fn size_hint(&self) -> usize {
        match self {
            MultiAddress::Id(address) => 1 + address.size_hint(),
        }
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        dest.push_byte(self.tag().index());
        match self {
            MultiAddress::Id(address) => address.encode_to(dest),
        }
    }
}

impl EncodeLike for MultiAddress {}

impl Decode for MultiAddress {
    fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
        let index = input.read_byte()?;
        let tag = MultiAddressTag::from_index(index)
            .map_err(|_| Error::from("Unknown multi-address variant index"))?;

        match tag {
            MultiAddressTag::Id => UniversalAddress::decode(input).map(MultiAddress::Id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address_codec::AddressCodec;
    use crate::testing::{SECP256K1_SAMPLE_HUMAN, SR25519_SAMPLE_HUMAN};

    #[test]
    fn test_encode_matches_wire_form() {
        let address = UniversalAddress::new(SECP256K1_SAMPLE_HUMAN).unwrap();
        assert_eq!(address.encode(), address.to_wire());

        let multi = MultiAddress::from(address);
        assert_eq!(multi.encode(), multi.to_wire());

        let binary = Binary::from_bytes(vec![1, 2, 3]);
        assert_eq!(binary.encode(), binary.to_wire());
    }

    #[test]
    fn test_nested_record_roundtrip() {
        let record = (
            7u32,
            UniversalAddress::new(SR25519_SAMPLE_HUMAN).unwrap(),
            MultiAddress::new(SECP256K1_SAMPLE_HUMAN).unwrap(),
            Binary::from_bytes(vec![0xaa]),
        );
        let encoded = record.encode();

        let decoded =
            <(u32, UniversalAddress, MultiAddress, Binary)>::decode(&mut encoded.as_slice())
                .unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_rejects_invalid_payload() {
        // Compact length 2, then an incomplete secp256k1 prefix match
        let bytes = [0x08u8, 0xe7, 0x01];
        assert!(UniversalAddress::decode(&mut &bytes[..]).is_err());

        let bytes = [0x00u8, 0x08, 0xe7, 0x01];
        assert!(MultiAddress::decode(&mut &bytes[..]).is_err());

        let bytes = [0x03u8, 0x00];
        assert!(MultiAddress::decode(&mut &bytes[..]).is_err());
    }
}
