//! Universal Address: self-describing account addresses
//!
//! This crate provides the address codecs used to identify accounts across
//! key algorithms:
//!
//! - **Binary** - Raw byte wrapper accepting bytes, hex and base64url input
//! - **UniversalAddress** - Bytes tagged with a multicodec algorithm prefix and
//!   validated against that algorithm's fixed length
//! - **MultiAddress** - Discriminated union holding a universal address under `Id`
//! - **Algorithm Table** - The recognised algorithms and their prefixes
//! - **AddressCodec** - Registry-facing surface shared by all address types
//!
//! ## Usage
//!
//! ```
//! use universal_address::{MultiAddress, UniversalAddress};
//!
//! let address = UniversalAddress::new("u5wECOvHh76TR4a1cueOWfpjpAdr803xEzwv7bCFpl_XuUd8")?;
//! assert_eq!(address.kind(), "secp256k1");
//!
//! let multi = MultiAddress::from(address);
//! assert_eq!(multi.type_name(), "Id");
//! # Ok::<(), universal_address::AddressError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serde support and `serde_json::Value` input (default)
//! - `testing` - Address fixtures for downstream tests
//! - `full` - Enable all features

pub mod address_codec;
pub mod algorithm;
pub mod binary;
pub mod encoding;
pub mod error;
pub mod input;
pub mod multi_address;
pub mod universal_address;

mod scale;

#[cfg(feature = "serde")]
mod serde_impls;

// Fixtures (feature-gated, always available to unit tests)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used items at the crate root
pub use address_codec::{create, AddressCodec};
pub use algorithm::{
    by_name, find_by_prefix, Algorithm, ALGORITHMS, BLAKE2B_256, ED25519, P256, SECP256K1, SR25519,
};
pub use binary::{decode_binary, Binary};
pub use error::{AddressError, Result};
pub use input::Input;
pub use multi_address::{MultiAddress, MultiAddressTag};
pub use universal_address::{UniversalAddress, MULTIBASE_BASE64URL, UNKNOWN_KIND};
