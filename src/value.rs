//! Field value representation
//!
//! A message stores either wire text (numeric, alphanumeric, hex and
//! datetime content classes) or raw octets (binary content). The two
//! kinds never mix: a codec rejects the wrong kind at encode time.

use std::fmt;

/// Value carried by one field of a message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Wire text
    Text(String),
    /// Raw octets
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Byte view of the value: text as its ASCII bytes, binary as-is
    pub fn as_octets(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }

    /// The text content, for text values
    pub fn text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// The raw octets, for binary values
    pub fn bytes(&self) -> Option<&[u8]> {
        if let Self::Bytes(b) = self {
            Some(b.as_slice())
        } else {
            None
        }
    }

    /// Byte length of the value as it stands (before any padding)
    pub fn len(&self) -> usize {
        self.as_octets().len()
    }

    /// Whether the value is empty
    pub fn is_empty(&self) -> bool {
        self.as_octets().is_empty()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bytes(b) => f.write_str(&hex::encode(b)),
        }
    }
}
