//! Opaque input values accepted by the codecs
//!
//! Callers (and registries that build addresses by name) hand the codecs
//! whatever they received: raw bytes, a string in one of the textual
//! encodings, or nothing at all. [`Input`] captures that shape so each codec
//! can dispatch on it.

use std::borrow::Cow;

/// A value to decode into address bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// No value; decodes to the empty byte string
    Absent,
    /// A byte sequence, taken as-is
    Bytes(Cow<'a, [u8]>),
    /// A string in hex or base64url (optionally multibase) form
    Text(&'a str),
    /// Any other kind of value; rejected with the type that was found
    Unsupported { found: &'static str },
}

impl<'a> Input<'a> {
    /// Name of the input kind, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Input::Absent => "absent",
            Input::Bytes(_) => "bytes",
            Input::Text(_) => "string",
            Input::Unsupported { found } => *found,
        }
    }

    /// True for `Absent` and for the empty string.
    ///
    /// An empty byte sequence is not "absent", although it decodes the same way.
    pub fn is_absent(&self) -> bool {
        matches!(self, Input::Absent | Input::Text(""))
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for Input<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a, T> From<Option<T>> for Input<'a>
where
    T: Into<Input<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Absent, Into::into)
    }
}

impl From<()> for Input<'static> {
    fn from(_: ()) -> Self {
        Input::Absent
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for Input<'a> {
    /// Map a JSON value onto an input.
    ///
    /// Arrays must hold integers in `0..=255`; anything else in an array makes
    /// the whole value unsupported.
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Input::Absent,
            Value::String(text) => Input::Text(text.as_str()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect::<Option<Vec<u8>>>()
                .map_or(
                    Input::Unsupported {
                        found: "array of non-byte values",
                    },
                    Input::from,
                ),
            Value::Bool(_) => Input::Unsupported { found: "boolean" },
            Value::Number(_) => Input::Unsupported { found: "number" },
            Value::Object(_) => Input::Unsupported { found: "object" },
        }
    }
}
