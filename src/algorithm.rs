//! Algorithm Table
//!
//! Universal addresses start with a multicodec prefix naming the key or hash
//! algorithm, followed by the key material. Each algorithm fixes the total
//! encoded length:
//!
//! ```text
//! | Multicodec (2-4 bytes) | Key / Hash (rest of `len`) |
//! ```
//!
//! | name          | multicodec   | len |
//! |---------------|--------------|-----|
//! | `ed25519`     | `ed01`       | 34  |
//! | `sr25519`     | `ef01`       | 34  |
//! | `secp256k1`   | `e701`       | 35  |
//! | `p256`        | `8024`       | 35  |
//! | `blake2b_256` | `a0e40220`   | 36  |
//!
//! Lookup scans [`ALGORITHMS`] in declaration order and the first prefix match
//! wins, so the order must not change.

use std::fmt;

// ============================================================================
// Descriptor
// ============================================================================

/// A recognised address algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Algorithm {
    /// Canonical name, reported by `UniversalAddress::kind`
    pub name: &'static str,
    /// Multicodec prefix bytes
    pub multicodec: &'static [u8],
    /// Total encoded length, prefix included
    pub len: usize,
}

impl Algorithm {
    /// Length of the key material that follows the prefix
    pub const fn key_len(&self) -> usize {
        self.len - self.multicodec.len()
    }

    /// Check whether `bytes` starts with this algorithm's multicodec
    pub fn matches_prefix(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(self.multicodec)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// Algorithm Constants
// ============================================================================

/// Ed25519 public key
pub const ED25519: Algorithm = Algorithm {
    name: "ed25519",
    multicodec: &[0xed, 0x01],
    len: 34,
};

/// Sr25519 (schnorrkel) public key
pub const SR25519: Algorithm = Algorithm {
    name: "sr25519",
    multicodec: &[0xef, 0x01],
    len: 34,
};

/// Compressed secp256k1 public key
pub const SECP256K1: Algorithm = Algorithm {
    name: "secp256k1",
    multicodec: &[0xe7, 0x01],
    len: 35,
};

/// Compressed NIST P-256 public key
pub const P256: Algorithm = Algorithm {
    name: "p256",
    multicodec: &[0x80, 0x24],
    len: 35,
};

/// 32-byte BLAKE2b digest
pub const BLAKE2B_256: Algorithm = Algorithm {
    name: "blake2b_256",
    multicodec: &[0xa0, 0xe4, 0x02, 0x20],
    len: 36,
};

/// All recognised algorithms, in lookup order
pub static ALGORITHMS: [Algorithm; 5] = [ED25519, SR25519, SECP256K1, P256, BLAKE2B_256];

// ============================================================================
// Lookup
// ============================================================================

/// Find the first algorithm whose multicodec prefixes `bytes`
pub fn find_by_prefix(bytes: &[u8]) -> Option<&'static Algorithm> {
    ALGORITHMS.iter().find(|algo| algo.matches_prefix(bytes))
}

/// Find an algorithm by its canonical name
pub fn by_name(name: &str) -> Option<&'static Algorithm> {
    ALGORITHMS.iter().find(|algo| algo.name == name)
}
