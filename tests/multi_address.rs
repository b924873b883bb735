//! Integration tests for the multi-address variant selector.
//!
//! Covers construction from universal address strings, tag-directed
//! construction, and the wire round trip.

use universal_address::{
    AddressCodec, AddressError, MultiAddress, MultiAddressTag, UniversalAddress,
};

const SR25519_HUMAN: &str = "u7wHUNZPHFf3THGEUGr0EqZ_WgiyFWIVMzeOaVoTnpW2ifQ";
const SECP256K1_HUMAN: &str = "u5wECOvHh76TR4a1cueOWfpjpAdr803xEzwv7bCFpl_XuUd8";
const BLAKE2B_256_HUMAN: &str = "uoOQCIO_a-ocLu6rnJvG859XLBNZM4u32LX0JVG94-hpGvzOi";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init()
        .ok();
}

#[test]
fn test_decode_universal_address() {
    init_tracing();

    let m0 = MultiAddress::new(SR25519_HUMAN).unwrap();
    assert_eq!(m0.type_name(), "Id");
    assert_eq!(m0.to_human(), SR25519_HUMAN);
    assert_eq!(m0.as_id().unwrap().kind(), "sr25519");

    let m1 = MultiAddress::new(SECP256K1_HUMAN).unwrap();
    assert_eq!(m1.type_name(), "Id");
    assert_eq!(m1.to_human(), SECP256K1_HUMAN);
    assert_eq!(m1.as_id().unwrap().kind(), "secp256k1");

    let m2 = MultiAddress::new(BLAKE2B_256_HUMAN).unwrap();
    assert_eq!(m2.type_name(), "Id");
    assert_eq!(m2.to_human(), BLAKE2B_256_HUMAN);
    assert_eq!(m2.as_id().unwrap().kind(), "blake2b_256");
}

#[test]
fn test_tag_and_payload_roundtrip() {
    init_tracing();

    for human in [SR25519_HUMAN, SECP256K1_HUMAN, BLAKE2B_256_HUMAN] {
        let tag: MultiAddressTag = "Id".parse().unwrap();
        let m = MultiAddress::with_tag(tag, human).unwrap();

        let decoded = MultiAddress::from_wire(&m.to_wire()).unwrap();
        assert_eq!(decoded.tag(), tag);
        assert_eq!(decoded.as_id(), m.as_id());
        assert_eq!(decoded, m);
    }
}

#[test]
fn test_invalid_payload_is_rejected() {
    init_tracing();

    let mut truncated = UniversalAddress::new(SECP256K1_HUMAN)
        .unwrap()
        .into_bytes();
    truncated.pop();

    let result = MultiAddress::with_tag(MultiAddressTag::Id, truncated);
    assert!(matches!(
        result,
        Err(AddressError::AlgorithmLengthMismatch {
            algorithm: "secp256k1",
            expected: 35,
            actual: 34
        })
    ));
}

#[test]
fn test_wire_layout() {
    init_tracing();

    let m = MultiAddress::new(SR25519_HUMAN).unwrap();
    let wire = m.to_wire();

    // Id index, compact length of 34, then the raw address
    assert_eq!(wire[0], 0x00);
    assert_eq!(wire[1], 34 << 2);
    assert_eq!(&wire[2..], m.as_id().unwrap().as_bytes());
    assert_eq!(MultiAddress::TYPE_NAME, "MultiAddress");
}
