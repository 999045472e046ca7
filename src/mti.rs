//! Message Type Indicator registry
//!
//! Each message family registers a bijection between numeric MTI codes
//! and human names at declaration time. The stored canonical form is the
//! numeric code; assignment accepts either form. The wire encoding of the
//! code is governed by the family's MTI codec (fixed numeric ASCII of
//! length 4 unless overridden).

use crate::error::{CodecError, Result};
use std::collections::{BTreeMap, HashMap};

/// Standard ISO 8583:1987 MTI set used by the bundled dialect
pub const STANDARD_1987_MTIS: &[(&str, &str)] = &[
    ("0100", "Authorization Request"),
    ("0110", "Authorization Response"),
    ("0120", "Authorization Advice"),
    ("0130", "Authorization Advice Response"),
    ("0200", "Financial Request"),
    ("0210", "Financial Response"),
    ("0220", "Financial Advice"),
    ("0230", "Financial Advice Response"),
    ("0400", "Reversal Request"),
    ("0410", "Reversal Response"),
    ("0420", "Reversal Advice"),
    ("0430", "Reversal Advice Response"),
    ("0800", "Network Management Request"),
    ("0810", "Network Management Response"),
    ("0820", "Network Management Advice"),
];

/// Bijective code ↔ name table for one message family
#[derive(Debug, Clone, Default)]
pub struct MtiTable {
    by_code: BTreeMap<String, String>,
    by_name: HashMap<String, String>,
}

impl MtiTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an MTI; duplicate codes or names conflict
    pub fn register(&mut self, code: &str, name: &str) -> Result<()> {
        if self.by_code.contains_key(code) {
            return Err(CodecError::schema_conflict(format!(
                "MTI code {} already registered",
                code
            )));
        }
        if self.by_name.contains_key(name) {
            return Err(CodecError::schema_conflict(format!(
                "MTI name {:?} already registered",
                name
            )));
        }
        self.by_code.insert(code.to_string(), name.to_string());
        self.by_name.insert(name.to_string(), code.to_string());
        Ok(())
    }

    /// Resolve a code or a name to the canonical numeric code
    pub fn resolve(&self, code_or_name: &str) -> Option<&str> {
        if self.by_code.contains_key(code_or_name) {
            self.by_code.get_key_value(code_or_name).map(|(k, _)| k.as_str())
        } else {
            self.by_name.get(code_or_name).map(String::as_str)
        }
    }

    /// Human name registered for a code
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    /// Numeric code registered for a name
    pub fn code_of(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Registered `(code, name)` pairs in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_code.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    /// Number of registered MTIs
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether no MTI is registered
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut table = MtiTable::new();
        table.register("1100", "Authorization Request").unwrap();

        assert_eq!(table.resolve("1100"), Some("1100"));
        assert_eq!(table.resolve("Authorization Request"), Some("1100"));
        assert_eq!(table.resolve("9999"), None);
        assert_eq!(table.name_of("1100"), Some("Authorization Request"));
        assert_eq!(table.code_of("Authorization Request"), Some("1100"));
    }

    #[test]
    fn test_duplicate_code_conflicts() {
        let mut table = MtiTable::new();
        table.register("0100", "Authorization Request").unwrap();

        let err = table.register("0100", "Something Else").unwrap_err();
        assert!(matches!(err, CodecError::SchemaConflict(_)));

        let err = table.register("0101", "Authorization Request").unwrap_err();
        assert!(matches!(err, CodecError::SchemaConflict(_)));
    }

    #[test]
    fn test_standard_set_is_bijective() {
        let mut table = MtiTable::new();
        for (code, name) in STANDARD_1987_MTIS {
            table.register(code, name).unwrap();
        }
        assert_eq!(table.len(), STANDARD_1987_MTIS.len());
        assert_eq!(table.resolve("Financial Request"), Some("0200"));
    }
}
