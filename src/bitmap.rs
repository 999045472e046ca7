//! Presence bitmap for ISO 8583 messages
//!
//! The bitmap records which data fields are present:
//! - Primary bitmap: fields 1-64
//! - Secondary bitmap: fields 65-128 (emitted when bit 1 is set)
//! - Tertiary bitmap: fields 129-192 (emitted when bit 65 is set) [rare]
//!
//! Bits 1 and 65 are structural markers, never data fields.

use crate::error::{CodecError, Result};

const WORD_MSB: u64 = 1 << 63;

/// Wire transcription of the bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapMode {
    /// Raw bits, 8 bytes per chunk
    Binary,
    /// Uppercase ASCII hex, 16 characters per chunk
    Hex,
}

impl BitmapMode {
    fn chunk_len(&self) -> usize {
        match self {
            Self::Binary => 8,
            Self::Hex => 16,
        }
    }
}

/// Set of present field numbers in 1..=192
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitmap {
    words: [u64; 3],
}

impl Bitmap {
    /// Create an empty bitmap
    pub fn new() -> Self {
        Self::default()
    }

    fn position(bit: u8) -> Result<(usize, u64)> {
        if bit == 0 || bit > 192 {
            return Err(CodecError::invalid_value(
                "bitmap",
                format!("bit {} outside 1..=192", bit),
            ));
        }
        let index = (bit - 1) as usize;
        Ok((index / 64, WORD_MSB >> (index % 64)))
    }

    /// Mark a field as present
    pub fn set(&mut self, bit: u8) -> Result<()> {
        let (word, mask) = Self::position(bit)?;
        self.words[word] |= mask;
        Ok(())
    }

    /// Mark a field as absent
    pub fn clear(&mut self, bit: u8) -> Result<()> {
        let (word, mask) = Self::position(bit)?;
        self.words[word] &= !mask;
        Ok(())
    }

    /// Whether a field is marked present
    pub fn contains(&self, bit: u8) -> bool {
        match Self::position(bit) {
            Ok((word, mask)) => self.words[word] & mask != 0,
            Err(_) => false,
        }
    }

    /// Whether any data field beyond 64 is present
    pub fn has_secondary(&self) -> bool {
        self.words[1] != 0 || self.has_tertiary()
    }

    /// Whether any data field beyond 128 is present
    pub fn has_tertiary(&self) -> bool {
        self.words[2] != 0
    }

    /// Present data fields in ascending bit order
    ///
    /// Structural bits 1 and 65 are never yielded.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (2..=192u8).filter(|&bit| bit != 65 && self.contains(bit))
    }

    /// Emit the wire form
    ///
    /// The structural bits are normalized from content: bit 1 is emitted
    /// iff a secondary chunk follows, bit 65 iff a tertiary chunk follows.
    pub fn to_wire(&self, mode: BitmapMode) -> Vec<u8> {
        let mut words = self.words;
        let tertiary = self.has_tertiary();
        let secondary = self.has_secondary();
        if secondary {
            words[0] |= WORD_MSB;
        } else {
            words[0] &= !WORD_MSB;
        }
        if tertiary {
            words[1] |= WORD_MSB;
        }

        let chunks = if tertiary {
            3
        } else if secondary {
            2
        } else {
            1
        };
        let mut bytes = Vec::with_capacity(chunks * 8);
        for word in &words[..chunks] {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        match mode {
            BitmapMode::Binary => bytes,
            BitmapMode::Hex => hex::encode_upper(bytes).into_bytes(),
        }
    }

    /// Consume the bitmap section from the front of `input`
    ///
    /// Reads the primary chunk, then a secondary chunk when bit 1 is set
    /// and a tertiary chunk when bit 65 is set.
    pub fn parse(input: &[u8], mode: BitmapMode) -> Result<(Self, &[u8])> {
        let chunk_len = mode.chunk_len();
        let mut words = [0u64; 3];
        let mut rest = input;

        for index in 0..3 {
            if rest.len() < chunk_len {
                return Err(CodecError::truncated("bitmap", chunk_len, rest.len()));
            }
            let (head, tail) = rest.split_at(chunk_len);
            rest = tail;

            let raw: [u8; 8] = match mode {
                BitmapMode::Binary => head.try_into().unwrap(),
                BitmapMode::Hex => {
                    if !head.iter().all(|b| b.is_ascii_hexdigit()) {
                        return Err(CodecError::invalid_value(
                            "bitmap",
                            "non-hex character in hex bitmap",
                        ));
                    }
                    hex::decode(head).unwrap().try_into().unwrap()
                }
            };
            words[index] = u64::from_be_bytes(raw);

            let more = words[index] & WORD_MSB != 0;
            if index == 2 || !more {
                break;
            }
        }

        Ok((Self { words }, rest))
    }
}
