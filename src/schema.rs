//! Message family registry
//!
//! A [`MessageFamily`] holds everything that defines one ISO 8583 dialect:
//! the MTI codec and code↔name table, the header-field definitions, the
//! data-field definitions keyed by number, alias bindings and the family
//! layout. It is populated at declaration time and read-only afterwards;
//! share it by reference (or `Arc`) across threads and message instances.

use crate::codec::{FieldCodec, FieldOptions, FixedCodec};
use crate::error::{CodecError, Result};
use crate::layout::Layout;
use crate::mti::MtiTable;
use std::collections::{BTreeMap, HashMap};

/// Shared definition of one field: a human name and the configured codec
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    name: String,
    codec: Box<dyn FieldCodec>,
}

impl FieldDefinition {
    /// Human name attached at declaration
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured codec
    pub fn codec(&self) -> &dyn FieldCodec {
        &*self.codec
    }
}

/// Registry for one ISO 8583 dialect
#[derive(Debug, Clone)]
pub struct MessageFamily {
    mti_codec: Box<dyn FieldCodec>,
    mtis: MtiTable,
    headers: BTreeMap<String, FieldDefinition>,
    fields: BTreeMap<u8, FieldDefinition>,
    aliases: HashMap<String, u8>,
    layout: Layout,
}

impl MessageFamily {
    /// Create an empty family with the default layout and a fixed
    /// 4-digit numeric MTI codec
    pub fn new() -> Self {
        let mut mti_codec: Box<dyn FieldCodec> = Box::new(FixedCodec::numeric(4));
        mti_codec.set_label("MTI");
        Self {
            mti_codec,
            mtis: MtiTable::new(),
            headers: BTreeMap::new(),
            fields: BTreeMap::new(),
            aliases: HashMap::new(),
            layout: Layout::default(),
        }
    }

    /// Replace the MTI codec
    pub fn set_mti_codec(&mut self, codec: &dyn FieldCodec, options: &FieldOptions) {
        let mut codec = codec.boxed_clone();
        codec.configure(options);
        codec.set_label("MTI");
        self.mti_codec = codec;
    }

    /// Register an MTI code/name pair
    pub fn declare_mti(&mut self, code: &str, name: &str) -> Result<()> {
        self.mtis.register(code, name)
    }

    /// Declare a data field
    ///
    /// The codec is cloned, the declaration options applied and the label
    /// `field <number> (<name>)` attached to the clone. Redeclaring a
    /// number overwrites the previous definition silently.
    pub fn declare_field(
        &mut self,
        number: u8,
        name: &str,
        codec: &dyn FieldCodec,
        options: &FieldOptions,
    ) -> Result<()> {
        if !(2..=192).contains(&number) || number == 65 {
            return Err(CodecError::invalid_value(
                "field declaration",
                format!("number {} is structural or outside 2..=192", number),
            ));
        }
        let mut codec = codec.boxed_clone();
        codec.configure(options);
        codec.set_label(&format!("field {} ({})", number, name));
        self.fields.insert(
            number,
            FieldDefinition {
                name: name.to_string(),
                codec,
            },
        );
        Ok(())
    }

    /// Declare a header field under a string key
    ///
    /// Header fields serialize and parse in ascending key order.
    pub fn declare_header(
        &mut self,
        key: &str,
        name: &str,
        codec: &dyn FieldCodec,
        options: &FieldOptions,
    ) {
        let mut codec = codec.boxed_clone();
        codec.configure(options);
        codec.set_label(&format!("header {} ({})", key, name));
        self.headers.insert(
            key.to_string(),
            FieldDefinition {
                name: name.to_string(),
                codec,
            },
        );
    }

    /// Bind a symbolic alias to a declared field number
    pub fn declare_alias(&mut self, number: u8, alias: &str) -> Result<()> {
        if !self.fields.contains_key(&number) {
            return Err(CodecError::UnknownField(number.to_string()));
        }
        self.aliases.insert(alias.to_string(), number);
        Ok(())
    }

    /// Set the family layout
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// The family layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The MTI code↔name table
    pub fn mtis(&self) -> &MtiTable {
        &self.mtis
    }

    /// The configured MTI codec
    pub fn mti_codec(&self) -> &dyn FieldCodec {
        &*self.mti_codec
    }

    /// Definition of a data field, if declared
    pub fn field_def(&self, number: u8) -> Option<&FieldDefinition> {
        self.fields.get(&number)
    }

    /// Definition of a header field, if declared
    pub fn header_def(&self, key: &str) -> Option<&FieldDefinition> {
        self.headers.get(key)
    }

    /// Field number bound to an alias, if declared
    pub fn alias_target(&self, alias: &str) -> Option<u8> {
        self.aliases.get(alias).copied()
    }

    /// Declared data fields in ascending number order
    pub fn fields(&self) -> impl Iterator<Item = (u8, &FieldDefinition)> {
        self.fields.iter().map(|(&n, def)| (n, def))
    }

    /// Declared header fields in ascending key order
    pub fn headers(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> {
        self.headers.iter().map(|(k, def)| (k.as_str(), def))
    }
}

impl Default for MessageFamily {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ContentClass, VarCodec};

    #[test]
    fn test_declare_field_attaches_label() {
        let mut family = MessageFamily::new();
        family
            .declare_field(
                2,
                "Primary Account Number",
                &VarCodec::llvar(ContentClass::Numeric).with_max(19),
                &FieldOptions::new(),
            )
            .unwrap();

        let def = family.field_def(2).unwrap();
        assert_eq!(def.name(), "Primary Account Number");

        // The label shows up in error context
        let err = def.codec().encode(&"not digits".into()).unwrap_err();
        assert!(err
            .to_string()
            .contains("field 2 (Primary Account Number)"));
    }

    #[test]
    fn test_declare_field_applies_options() {
        let mut family = MessageFamily::new();
        family
            .declare_field(
                3,
                "Processing Code",
                &FixedCodec::numeric(1),
                &FieldOptions::new().length(6),
            )
            .unwrap();

        let bytes = family
            .field_def(3)
            .unwrap()
            .codec()
            .encode(&"0".into())
            .unwrap();
        assert_eq!(bytes, b"000000");
    }

    #[test]
    fn test_redeclaration_overwrites_silently() {
        let mut family = MessageFamily::new();
        family
            .declare_field(2, "First", &FixedCodec::numeric(4), &FieldOptions::new())
            .unwrap();
        family
            .declare_field(2, "Second", &FixedCodec::numeric(6), &FieldOptions::new())
            .unwrap();

        assert_eq!(family.field_def(2).unwrap().name(), "Second");
    }

    #[test]
    fn test_structural_numbers_rejected() {
        let mut family = MessageFamily::new();
        let codec = FixedCodec::numeric(4);
        assert!(family.declare_field(1, "x", &codec, &FieldOptions::new()).is_err());
        assert!(family.declare_field(65, "x", &codec, &FieldOptions::new()).is_err());
        assert!(family.declare_field(193, "x", &codec, &FieldOptions::new()).is_err());
    }

    #[test]
    fn test_alias_requires_declared_field() {
        let mut family = MessageFamily::new();
        assert!(matches!(
            family.declare_alias(2, "pan"),
            Err(CodecError::UnknownField(_))
        ));

        family
            .declare_field(
                2,
                "Primary Account Number",
                &VarCodec::llvar(ContentClass::Numeric).with_max(19),
                &FieldOptions::new(),
            )
            .unwrap();
        family.declare_alias(2, "pan").unwrap();
        assert_eq!(family.alias_target("pan"), Some(2));
    }

    #[test]
    fn test_headers_kept_in_key_order() {
        let mut family = MessageFamily::new();
        for key in ["h2", "h0", "h1"] {
            family.declare_header(key, key, &FixedCodec::numeric(2), &FieldOptions::new());
        }
        let keys: Vec<&str> = family.headers().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["h0", "h1", "h2"]);
    }
}
