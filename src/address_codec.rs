//! Registry-facing codec surface
//!
//! A type registry builds address values by name from whatever input it was
//! given and later asks them for their wire bytes or their human form.
//! [`AddressCodec`] is that surface; [`Binary`](crate::Binary),
//! [`UniversalAddress`](crate::UniversalAddress) and
//! [`MultiAddress`](crate::MultiAddress) implement it.

use crate::error::Result;
use crate::input::Input;

pub trait AddressCodec: Sized {
    /// Name the type is registered under
    const TYPE_NAME: &'static str;

    /// Construct from an opaque input value
    fn from_input(input: Input<'_>) -> Result<Self>;

    /// Decode from the wire form produced by [`AddressCodec::to_wire`]
    fn from_wire(bytes: &[u8]) -> Result<Self>;

    /// Wire form, including any length framing
    fn to_wire(&self) -> Vec<u8>;

    /// Human-readable form
    fn to_human(&self) -> String;
}

/// Construct a `T` from anything convertible into an [`Input`]
///
/// ```
/// use universal_address::{create, UniversalAddress};
///
/// let address: UniversalAddress =
///     create("u5wECOvHh76TR4a1cueOWfpjpAdr803xEzwv7bCFpl_XuUd8").unwrap();
/// assert_eq!(address.kind(), "secp256k1");
/// ```
pub fn create<'a, T: AddressCodec>(input: impl Into<Input<'a>>) -> Result<T> {
    T::from_input(input.into())
}
