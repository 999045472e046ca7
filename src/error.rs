//! Error types for ISO 8583 message processing

use thiserror::Error;

/// Result type for ISO 8583 operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while declaring schemas, encoding or parsing
/// ISO 8583 messages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Set/get against a key with no schema definition
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// MTI assignment to a code or name not registered with the family
    #[error("Unknown MTI: {0}")]
    UnknownMti(String),

    /// Serialization attempted with no MTI set
    #[error("Message has no MTI set")]
    MissingMti,

    /// Content class violated during encode or parse
    #[error("Invalid value in {context}: {reason}")]
    InvalidValue {
        /// Field number or section name where the violation occurred
        context: String,
        /// What was wrong with the value
        reason: String,
    },

    /// Value longer than the declared length bound
    #[error("{context}: length {actual} exceeds limit {limit}")]
    LengthOverflow {
        /// Field number or section name
        context: String,
        /// Declared upper bound in bytes
        limit: usize,
        /// Actual value length in bytes
        actual: usize,
    },

    /// Fixed-length value too short with no padding rule to rescue it
    #[error("{context}: length {actual} below required {expected}")]
    LengthUnderflow {
        /// Field number or section name
        context: String,
        /// Declared fixed length in bytes
        expected: usize,
        /// Actual value length in bytes
        actual: usize,
    },

    /// Parse ran out of bytes mid-section
    #[error("Truncated input in {context}: needed {needed} bytes, {available} available")]
    Truncated {
        /// Field number or section name being parsed
        context: String,
        /// Bytes the section required
        needed: usize,
        /// Bytes that were left
        available: usize,
    },

    /// Parse consumed every section but bytes remained
    #[error("{0} trailing bytes after message end")]
    TrailingData(usize),

    /// Duplicate MTI code or name at family declaration time
    #[error("Schema conflict: {0}")]
    SchemaConflict(String),
}

impl CodecError {
    /// Create an invalid value error
    pub fn invalid_value<C: Into<String>, R: Into<String>>(context: C, reason: R) -> Self {
        CodecError::InvalidValue {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Create a length overflow error
    pub fn length_overflow<C: Into<String>>(context: C, limit: usize, actual: usize) -> Self {
        CodecError::LengthOverflow {
            context: context.into(),
            limit,
            actual,
        }
    }

    /// Create a length underflow error
    pub fn length_underflow<C: Into<String>>(context: C, expected: usize, actual: usize) -> Self {
        CodecError::LengthUnderflow {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a truncated input error
    pub fn truncated<C: Into<String>>(context: C, needed: usize, available: usize) -> Self {
        CodecError::Truncated {
            context: context.into(),
            needed,
            available,
        }
    }

    /// Create a schema conflict error
    pub fn schema_conflict<S: Into<String>>(msg: S) -> Self {
        CodecError::SchemaConflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::UnknownMti("9999".to_string());
        assert_eq!(err.to_string(), "Unknown MTI: 9999");

        let err = CodecError::invalid_value("field 2", "non-digit character");
        assert_eq!(
            err.to_string(),
            "Invalid value in field 2: non-digit character"
        );

        let err = CodecError::truncated("field 35", 12, 4);
        assert_eq!(
            err.to_string(),
            "Truncated input in field 35: needed 12 bytes, 4 available"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = CodecError::length_overflow("field 2", 19, 21);
        let err2 = CodecError::length_overflow("field 2", 19, 21);
        let err3 = CodecError::length_overflow("field 2", 19, 22);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
