//! Test fixtures for downstream crates
//!
//! Enabled with the `testing` feature. Provides known-good address vectors and
//! helpers that build a structurally valid address for any algorithm.

use crate::algorithm::Algorithm;
use crate::universal_address::UniversalAddress;

/// secp256k1 sample, raw bytes as hex
pub const SECP256K1_SAMPLE_HEX: &str =
    "0xe701023af1e1efa4d1e1ad5cb9e3967e98e901dafcd37c44cf0bfb6c216997f5ee51df";

/// secp256k1 sample, multibase form
pub const SECP256K1_SAMPLE_HUMAN: &str = "u5wECOvHh76TR4a1cueOWfpjpAdr803xEzwv7bCFpl_XuUd8";

/// sr25519 sample, raw bytes as hex
pub const SR25519_SAMPLE_HEX: &str =
    "0xef01d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

/// sr25519 sample, multibase form
pub const SR25519_SAMPLE_HUMAN: &str = "u7wHUNZPHFf3THGEUGr0EqZ_WgiyFWIVMzeOaVoTnpW2ifQ";

/// blake2b_256 sample, raw bytes as hex
pub const BLAKE2B_256_SAMPLE_HEX: &str =
    "0xa0e40220efdafa870bbbaae726f1bce7d5cb04d64ce2edf62d7d09546f78fa1a46bf33a2";

/// blake2b_256 sample, multibase form
pub const BLAKE2B_256_SAMPLE_HUMAN: &str = "uoOQCIO_a-ocLu6rnJvG859XLBNZM4u32LX0JVG94-hpGvzOi";

/// Multicodec prefix followed by zeros up to the algorithm's length
pub fn zero_padded(algorithm: &Algorithm) -> Vec<u8> {
    let mut bytes = algorithm.multicodec.to_vec();
    bytes.resize(algorithm.len, 0);
    bytes
}

/// A valid address for `algorithm` whose key bytes are all `fill`
pub fn sample_address(algorithm: &Algorithm, fill: u8) -> UniversalAddress {
    let key = vec![fill; algorithm.key_len()];
    match UniversalAddress::from_key(algorithm, &key) {
        Ok(address) => address,
        Err(e) => panic!("fixture for {algorithm} is invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ALGORITHMS;

    #[test]
    fn test_samples_agree() {
        for (hex, human, kind) in [
            (SECP256K1_SAMPLE_HEX, SECP256K1_SAMPLE_HUMAN, "secp256k1"),
            (SR25519_SAMPLE_HEX, SR25519_SAMPLE_HUMAN, "sr25519"),
            (BLAKE2B_256_SAMPLE_HEX, BLAKE2B_256_SAMPLE_HUMAN, "blake2b_256"),
        ] {
            let from_hex = UniversalAddress::new(hex).unwrap();
            let from_human = UniversalAddress::new(human).unwrap();
            assert_eq!(from_hex, from_human);
            assert_eq!(from_hex.kind(), kind);
            assert_eq!(from_hex.to_human(), human);
        }
    }

    #[test]
    fn test_sample_address() {
        for algo in ALGORITHMS.iter() {
            let address = sample_address(algo, 0xab);
            assert_eq!(address.kind(), algo.name);
            assert!(address.key().iter().all(|&b| b == 0xab));
        }
    }
}
