//! Message engine
//!
//! A [`Message`] holds the values of one message instance and drives
//! serialization; parsing lives on [`MessageFamily`] and produces a new
//! instance. Both walk the top-level sections in the order given by the
//! layout view, which is read once per call.

use crate::bitmap::Bitmap;
use crate::error::{CodecError, Result};
use crate::layout::{Layout, Section};
use crate::schema::MessageFamily;
use crate::value::FieldValue;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Key addressing a field of a message: a data-field number, an alias,
/// or a header key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey {
    /// Data field by number
    Number(u8),
    /// Alias or header key
    Key(String),
}

impl From<u8> for FieldKey {
    fn from(number: u8) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

enum Slot {
    Data(u8),
    Header(String),
}

/// One message instance, bound to its family's schema
#[derive(Debug, Clone)]
pub struct Message<'a> {
    family: &'a MessageFamily,
    mti: Option<String>,
    fields: BTreeMap<u8, FieldValue>,
    headers: BTreeMap<String, FieldValue>,
}

impl MessageFamily {
    /// Create an empty message instance
    pub fn message(&self) -> Message<'_> {
        Message {
            family: self,
            mti: None,
            fields: BTreeMap::new(),
            headers: BTreeMap::new(),
        }
    }

    /// Create a message instance with the MTI already assigned
    pub fn message_with_mti(&self, code_or_name: &str) -> Result<Message<'_>> {
        let mut message = self.message();
        message.set_mti(code_or_name)?;
        Ok(message)
    }

    /// Parse a wire message using the family layout
    pub fn parse(&self, input: &[u8]) -> Result<Message<'_>> {
        self.parse_with(input, self.layout())
    }

    /// Parse a wire message using an explicit layout
    ///
    /// Sections are consumed in layout-rank order; any codec failure
    /// discards the instance, and bytes left over after the last section
    /// are [`CodecError::TrailingData`].
    pub fn parse_with<'s>(&'s self, input: &[u8], layout: &Layout) -> Result<Message<'s>> {
        let mut message = self.message();
        let mut rest = input;

        for section in layout.sections() {
            match section {
                Section::Mti => {
                    let (value, tail) = self.mti_codec().parse(rest)?;
                    rest = tail;
                    let code = value
                        .text()
                        .ok_or_else(|| CodecError::invalid_value("MTI", "not a text value"))?;
                    message.set_mti(code)?;
                }
                Section::Header => {
                    for (key, def) in self.headers() {
                        let (mut value, tail) = def.codec().parse(rest)?;
                        rest = tail;
                        if layout.remove_padding_on_parse {
                            value = def.codec().strip_padding(value);
                        }
                        message.headers.insert(key.to_string(), value);
                    }
                }
                Section::BitmapAndData => {
                    let (bitmap, tail) = Bitmap::parse(rest, layout.bitmap_mode())?;
                    rest = tail;
                    for number in bitmap.iter() {
                        let def = self.field_def(number).ok_or_else(|| {
                            CodecError::UnknownField(format!("{} (present in bitmap)", number))
                        })?;
                        let (mut value, tail) = def.codec().parse(rest)?;
                        rest = tail;
                        if layout.remove_padding_on_parse {
                            value = def.codec().strip_padding(value);
                        }
                        message.fields.insert(number, value);
                    }
                }
            }
        }

        if !rest.is_empty() {
            return Err(CodecError::TrailingData(rest.len()));
        }
        Ok(message)
    }
}

impl<'a> Message<'a> {
    /// The family this instance is bound to
    pub fn family(&self) -> &'a MessageFamily {
        self.family
    }

    /// Assign the MTI by code or registered name
    ///
    /// The stored form is canonicalized to the numeric code.
    pub fn set_mti(&mut self, code_or_name: &str) -> Result<()> {
        let code = self
            .family
            .mtis()
            .resolve(code_or_name)
            .ok_or_else(|| CodecError::UnknownMti(code_or_name.to_string()))?;
        self.mti = Some(code.to_string());
        Ok(())
    }

    /// Canonical MTI code, if assigned
    pub fn mti(&self) -> Option<&str> {
        self.mti.as_deref()
    }

    /// Registered name of the assigned MTI
    pub fn mti_name(&self) -> Option<&str> {
        self.mti.as_deref().and_then(|c| self.family.mtis().name_of(c))
    }

    fn resolve(&self, key: FieldKey) -> Result<Slot> {
        match key {
            FieldKey::Number(number) => {
                if self.family.field_def(number).is_some() {
                    Ok(Slot::Data(number))
                } else {
                    Err(CodecError::UnknownField(number.to_string()))
                }
            }
            FieldKey::Key(key) => {
                if let Some(number) = self.family.alias_target(&key) {
                    Ok(Slot::Data(number))
                } else if self.family.header_def(&key).is_some() {
                    Ok(Slot::Header(key))
                } else {
                    Err(CodecError::UnknownField(key))
                }
            }
        }
    }

    /// Store a value for a data field (by number or alias) or a header
    /// field (by key)
    pub fn set<K, V>(&mut self, key: K, value: V) -> Result<()>
    where
        K: Into<FieldKey>,
        V: Into<FieldValue>,
    {
        match self.resolve(key.into())? {
            Slot::Data(number) => {
                self.fields.insert(number, value.into());
            }
            Slot::Header(key) => {
                self.headers.insert(key, value.into());
            }
        }
        Ok(())
    }

    /// Remove a stored value
    pub fn unset<K: Into<FieldKey>>(&mut self, key: K) -> Result<()> {
        match self.resolve(key.into())? {
            Slot::Data(number) => {
                self.fields.remove(&number);
            }
            Slot::Header(key) => {
                self.headers.remove(&key);
            }
        }
        Ok(())
    }

    /// Stored value for a key, `None` when unset or undeclared
    pub fn get<K: Into<FieldKey>>(&self, key: K) -> Option<&FieldValue> {
        match self.resolve(key.into()).ok()? {
            Slot::Data(number) => self.fields.get(&number),
            Slot::Header(key) => self.headers.get(&key),
        }
    }

    /// Present data-field numbers in ascending order
    pub fn field_numbers(&self) -> Vec<u8> {
        self.fields.keys().copied().collect()
    }

    /// Serialize using the family layout
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with(self.family.layout())
    }

    /// Serialize using an explicit layout
    pub fn to_bytes_with(&self, layout: &Layout) -> Result<Vec<u8>> {
        let mti = self.mti.as_ref().ok_or(CodecError::MissingMti)?;
        let mut out = Vec::new();

        for section in layout.sections() {
            match section {
                Section::Mti => {
                    let value = FieldValue::Text(mti.clone());
                    out.extend(self.family.mti_codec().encode(&value)?);
                }
                Section::Header => {
                    for (key, def) in self.family.headers() {
                        // An unset header field encodes as empty, which the
                        // codec pads to its fixed width or rejects
                        let empty = FieldValue::Text(String::new());
                        let value = self.headers.get(key).unwrap_or(&empty);
                        out.extend(def.codec().encode(value)?);
                    }
                }
                Section::BitmapAndData => {
                    let mut bitmap = Bitmap::new();
                    let mut data = Vec::new();
                    for (&number, value) in &self.fields {
                        bitmap.set(number)?;
                        let def = self
                            .family
                            .field_def(number)
                            .ok_or_else(|| CodecError::UnknownField(number.to_string()))?;
                        data.extend(def.codec().encode(value)?);
                    }
                    out.extend(bitmap.to_wire(layout.bitmap_mode()));
                    out.extend(data);
                }
            }
        }

        Ok(out)
    }

    /// Render the instance for inspection
    pub fn describe(&self) -> String {
        let mut out = String::new();
        match self.mti() {
            Some(code) => match self.mti_name() {
                Some(name) => {
                    let _ = writeln!(out, "MTI {} ({})", code, name);
                }
                None => {
                    let _ = writeln!(out, "MTI {}", code);
                }
            },
            None => out.push_str("MTI (unset)\n"),
        }
        for (key, value) in &self.headers {
            let name = self
                .family
                .header_def(key)
                .map(|def| def.name())
                .unwrap_or("?");
            let _ = writeln!(out, "  header {} ({}): {}", key, name, value);
        }
        for (number, value) in &self.fields {
            let name = self
                .family
                .field_def(*number)
                .map(|def| def.name())
                .unwrap_or("?");
            let _ = writeln!(out, "  {:>3} {}: {}", number, name, value);
        }
        out
    }

    /// Render the instance as JSON for debugging
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        let render = |value: &FieldValue| match value {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Bytes(b) => serde_json::Value::String(hex::encode(b)),
        };
        let headers: serde_json::Map<String, serde_json::Value> = self
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), render(v)))
            .collect();
        let fields: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(n, v)| (n.to_string(), render(v)))
            .collect();
        serde_json::json!({
            "mti": self.mti,
            "headers": headers,
            "fields": fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ContentClass, FieldOptions, FixedCodec, VarCodec};

    fn test_family() -> MessageFamily {
        let mut family = MessageFamily::new();
        family.declare_mti("1100", "Authorization Request").unwrap();
        family.declare_mti("1110", "Authorization Response").unwrap();
        family
            .declare_field(
                2,
                "Primary Account Number",
                &VarCodec::llvar(ContentClass::Numeric).with_max(19),
                &FieldOptions::new(),
            )
            .unwrap();
        family
            .declare_field(
                3,
                "Processing Code",
                &FixedCodec::numeric(6),
                &FieldOptions::new(),
            )
            .unwrap();
        family
            .declare_field(
                70,
                "Network Management Information Code",
                &FixedCodec::numeric(3),
                &FieldOptions::new(),
            )
            .unwrap();
        family.declare_alias(2, "pan").unwrap();
        family
    }

    #[test]
    fn test_set_and_get_by_number_and_alias() {
        let family = test_family();
        let mut message = family.message();

        message.set(2, "474747474747").unwrap();
        assert_eq!(message.get("pan").unwrap().text(), Some("474747474747"));

        message.set("pan", "40000000000000").unwrap();
        assert_eq!(message.get(2).unwrap().text(), Some("40000000000000"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let family = test_family();
        let mut message = family.message();

        assert!(matches!(
            message.set(99, "1"),
            Err(CodecError::UnknownField(_))
        ));
        assert!(matches!(
            message.set("nonsense", "1"),
            Err(CodecError::UnknownField(_))
        ));
        assert!(message.get(99).is_none());
    }

    #[test]
    fn test_unset_removes_value() {
        let family = test_family();
        let mut message = family.message();

        message.set(3, "000000").unwrap();
        assert!(message.get(3).is_some());
        message.unset(3).unwrap();
        assert!(message.get(3).is_none());
        assert!(message.field_numbers().is_empty());
    }

    #[test]
    fn test_mti_canonicalized_from_name() {
        let family = test_family();
        let mut message = family.message();

        message.set_mti("Authorization Request").unwrap();
        assert_eq!(message.mti(), Some("1100"));
        assert_eq!(message.mti_name(), Some("Authorization Request"));
    }

    #[test]
    fn test_unknown_mti_rejected() {
        let family = test_family();
        let mut message = family.message();

        let err = message.set_mti("9999").unwrap_err();
        assert_eq!(err, CodecError::UnknownMti("9999".to_string()));
    }

    #[test]
    fn test_serialize_requires_mti() {
        let family = test_family();
        let mut message = family.message();
        message.set(3, "000000").unwrap();

        assert_eq!(message.to_bytes().unwrap_err(), CodecError::MissingMti);
    }

    #[test]
    fn test_serialize_sections_in_default_order() {
        let family = test_family();
        let mut message = family.message_with_mti("1100").unwrap();
        message.set(2, "474747474747").unwrap();
        message.set(3, "000000").unwrap();

        let bytes = message.to_bytes().unwrap();
        let mut expected = b"1100".to_vec();
        expected.extend_from_slice(&[0x60, 0, 0, 0, 0, 0, 0, 0]);
        expected.extend_from_slice(b"12474747474747");
        expected.extend_from_slice(b"000000");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_describe_lists_fields() {
        let family = test_family();
        let mut message = family.message_with_mti("1100").unwrap();
        message.set("pan", "474747474747").unwrap();

        let text = message.describe();
        assert!(text.contains("MTI 1100 (Authorization Request)"));
        assert!(text.contains("Primary Account Number"));
    }

    #[test]
    fn test_parse_rejects_trailing_bytes() {
        let family = test_family();
        let mut message = family.message_with_mti("1100").unwrap();
        message.set(3, "000000").unwrap();

        let mut bytes = message.to_bytes().unwrap();
        bytes.extend_from_slice(b"junk");

        assert_eq!(
            family.parse(&bytes).unwrap_err(),
            CodecError::TrailingData(4)
        );
    }

    #[test]
    fn test_parse_roundtrip_with_secondary_bitmap() {
        let family = test_family();
        let mut message = family.message_with_mti("1100").unwrap();
        message.set(2, "474747474747").unwrap();
        message.set(70, "001").unwrap();

        let bytes = message.to_bytes().unwrap();
        let parsed = family.parse(&bytes).unwrap();

        assert_eq!(parsed.mti(), Some("1100"));
        assert_eq!(parsed.get(2), message.get(2));
        assert_eq!(parsed.get(70), message.get(70));
        assert_eq!(parsed.field_numbers(), vec![2, 70]);
    }
}
