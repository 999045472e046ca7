//! # iso8583-codec
//!
//! Declarative ISO 8583 message families with byte-exact serialization
//! and parsing.
//!
//! An application declares a message family once (its MTIs, optional
//! header fields, and numbered data fields, each with its own codec)
//! and gets a bidirectional parser/serializer in return.
//!
//! ## Quick Start
//!
//! ```rust
//! use iso8583_codec::{dialect, utils};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let family = dialect::iso1987();
//!
//! // Build a message
//! let mut message = family.message_with_mti("Authorization Request")?;
//! message.set("pan", "4111111111111111")?;
//! message.set("processing_code", "000000")?;
//! message.set("amount", "000000010000")?;
//! message.set("stan", utils::next_stan())?;
//!
//! // Serialize
//! let bytes = message.to_bytes()?;
//!
//! // Parse
//! let parsed = family.parse(&bytes)?;
//! assert_eq!(parsed.get("pan"), message.get("pan"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Field codecs** ([`codec`]): fixed- and variable-length codecs
//!    over numeric, alphanumeric, binary, BCD, hex and datetime content,
//!    pluggable through the [`FieldCodec`] trait.
//! 2. **Bitmap** ([`bitmap`]): the 128/192-bit presence set with binary
//!    and hex wire forms.
//! 3. **Schema registry** ([`schema`]): per-family tables of MTIs, header
//!    fields and data fields, immutable after declaration and freely
//!    shareable across threads.
//! 4. **Message engine** ([`message`]): per-instance value maps driving
//!    serialization and parsing in layout order.
//! 5. **Layout view** ([`layout`]): the configuration surface for section
//!    order, bitmap transcription and padding treatment.
//!
//! ## Feature Flags
//!
//! - `serde`: JSON debugging via `Message::to_json`

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod codec;
pub mod dialect;
pub mod error;
pub mod layout;
pub mod message;
pub mod mti;
pub mod schema;
pub mod utils;
pub mod value;

// Re-exports for convenience
pub use bitmap::{Bitmap, BitmapMode};
pub use codec::{
    ContentClass, DateTimeCodec, DateTimeKind, FieldCodec, FieldOptions, FixedCodec, LengthPrefix,
    Padding, VarCodec,
};
pub use error::{CodecError, Result};
pub use layout::{Layout, Section};
pub use message::{FieldKey, Message};
pub use mti::MtiTable;
pub use schema::{FieldDefinition, MessageFamily};
pub use value::FieldValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_roundtrip() {
        let family = dialect::iso1987();
        let mut message = family.message_with_mti("0100").unwrap();
        message.set("pan", "4111111111111111").unwrap();
        message.set("processing_code", "000000").unwrap();
        message.set("amount", "000000010000").unwrap();

        let bytes = message.to_bytes().unwrap();
        let parsed = family.parse(&bytes).unwrap();
        assert_eq!(parsed.mti(), Some("0100"));
    }

    #[test]
    fn test_family_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MessageFamily>();
    }
}
