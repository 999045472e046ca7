//! Field codecs
//!
//! A codec converts between a [`FieldValue`] and its on-wire byte form for
//! one content class and one length discipline. Length discipline is
//! factored as a wrapper over content handling: [`FixedCodec`] emits
//! exactly its declared byte count, [`VarCodec`] emits a decimal ASCII
//! length prefix (LLVAR/LLLVAR) followed by the value bytes.
//!
//! New field types plug into the engine by implementing [`FieldCodec`].

use crate::error::{CodecError, Result};
use crate::value::FieldValue;
use std::fmt;

/// Content class of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    /// Numeric digits only (0-9), decimal ASCII on the wire
    Numeric,
    /// Alphanumeric (0-9, A-Z, a-z) plus space
    Alphanumeric,
    /// Alphanumeric with special characters (printable ASCII)
    AlphanumericSpecial,
    /// Raw bytes
    Binary,
    /// Binary Coded Decimal, two digits packed per byte
    Bcd,
    /// Hexadecimal digits, uppercase ASCII on the wire
    Hex,
}

impl ContentClass {
    /// Default padding rule for fixed-length fields of this class
    pub fn default_padding(&self) -> Padding {
        match self {
            Self::Numeric | Self::Bcd => Padding::LeftZero,
            Self::Alphanumeric | Self::AlphanumericSpecial => Padding::RightSpace,
            Self::Binary | Self::Hex => Padding::None,
        }
    }

    fn check_str(&self, s: &str, context: &str) -> Result<()> {
        let ok = match self {
            Self::Numeric | Self::Bcd => s.bytes().all(|b| b.is_ascii_digit()),
            Self::Alphanumeric => s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b' '),
            Self::AlphanumericSpecial => s.bytes().all(|b| (0x20..=0x7E).contains(&b)),
            Self::Hex => s.bytes().all(|b| b.is_ascii_hexdigit()),
            Self::Binary => return Err(CodecError::invalid_value(context, "expected binary value")),
        };
        if ok {
            Ok(())
        } else {
            Err(CodecError::invalid_value(
                context,
                format!("value violates content class {}", self),
            ))
        }
    }
}

impl fmt::Display for ContentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Numeric => "N",
            Self::Alphanumeric => "AN",
            Self::AlphanumericSpecial => "ANS",
            Self::Binary => "B",
            Self::Bcd => "BCD",
            Self::Hex => "Hex",
        };
        write!(f, "{}", tag)
    }
}

/// Padding rule applied by fixed-length codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// No padding; an under-length value is an error
    #[default]
    None,
    /// Pad numeric values with zeros on the left
    LeftZero,
    /// Pad text values with spaces on the right
    RightSpace,
}

impl Padding {
    fn apply(&self, s: &str, width: usize) -> Option<String> {
        match self {
            Self::None => None,
            Self::LeftZero => Some(format!("{:0>width$}", s, width = width)),
            Self::RightSpace => Some(format!("{:<width$}", s, width = width)),
        }
    }

    fn strip(&self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::LeftZero => {
                let stripped = s.trim_start_matches('0');
                if stripped.is_empty() && !s.is_empty() {
                    "0".to_string()
                } else {
                    stripped.to_string()
                }
            }
            Self::RightSpace => s.trim_end_matches(' ').to_string(),
        }
    }
}

/// Declaration-time options applied to a cloned codec
///
/// The typed fields are the recognized options; [`FieldOptions::from_pairs`]
/// accepts string pairs from a configuration source, warning about unknown
/// keys instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Fixed byte length override (fixed codecs only)
    pub length: Option<usize>,
    /// Upper bound on value byte length (variable codecs only)
    pub max: Option<usize>,
    /// Padding rule override
    pub padding: Option<Padding>,
}

impl FieldOptions {
    /// Empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed length option
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the maximum length option
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the padding option
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Whether no option is set
    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.max.is_none() && self.padding.is_none()
    }

    /// Build options from string key/value pairs
    ///
    /// Unknown keys and unparsable values are reported to the diagnostic
    /// sink and skipped; they never abort schema construction.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut options = Self::new();
        for (key, raw) in pairs {
            match *key {
                "length" => match raw.parse::<usize>() {
                    Ok(n) => options.length = Some(n),
                    Err(_) => log::warn!("ignoring option length={:?}: not a number", raw),
                },
                "max" => match raw.parse::<usize>() {
                    Ok(n) => options.max = Some(n),
                    Err(_) => log::warn!("ignoring option max={:?}: not a number", raw),
                },
                "padding" => match *raw {
                    "none" => options.padding = Some(Padding::None),
                    "left_zero" => options.padding = Some(Padding::LeftZero),
                    "right_space" => options.padding = Some(Padding::RightSpace),
                    other => log::warn!("ignoring option padding={:?}: unknown rule", other),
                },
                other => log::warn!("ignoring unknown codec option {:?}", other),
            }
        }
        options
    }
}

/// Bidirectional converter between a field value and its wire bytes
///
/// Implementations are immutable once registered with a schema; the
/// registry clones the declared codec, attaches a label for error
/// context, and applies declaration options to the clone.
pub trait FieldCodec: fmt::Debug + Send + Sync {
    /// Convert a value to its on-wire byte sequence
    fn encode(&self, value: &FieldValue) -> Result<Vec<u8>>;

    /// Consume exactly this field's bytes from the front of `input`,
    /// returning the decoded value and the remaining bytes
    fn parse<'a>(&self, input: &'a [u8]) -> Result<(FieldValue, &'a [u8])>;

    /// Strip declaration-time padding from a parsed value
    ///
    /// Invoked by the engine when the layout view requests it. Raw binary
    /// and BCD values pass through untouched.
    fn strip_padding(&self, value: FieldValue) -> FieldValue {
        value
    }

    /// Apply declaration options; unsupported options are reported to the
    /// diagnostic sink and ignored
    fn configure(&mut self, options: &FieldOptions);

    /// Attach the schema-assigned label used in error context
    fn set_label(&mut self, label: &str);

    /// Clone into a boxed trait object
    fn boxed_clone(&self) -> Box<dyn FieldCodec>;
}

impl Clone for Box<dyn FieldCodec> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Fixed-length codec: encodes to exactly `length` bytes
#[derive(Debug, Clone)]
pub struct FixedCodec {
    content: ContentClass,
    length: usize,
    padding: Padding,
    label: Option<String>,
}

impl FixedCodec {
    /// Create a fixed codec with the class's default padding
    pub fn new(content: ContentClass, length: usize) -> Self {
        Self {
            content,
            length,
            padding: content.default_padding(),
            label: None,
        }
    }

    /// Fixed numeric field of `length` digits
    pub fn numeric(length: usize) -> Self {
        Self::new(ContentClass::Numeric, length)
    }

    /// Fixed alphanumeric field
    pub fn alphanumeric(length: usize) -> Self {
        Self::new(ContentClass::Alphanumeric, length)
    }

    /// Fixed alphanumeric-special field
    pub fn alphanumeric_special(length: usize) -> Self {
        Self::new(ContentClass::AlphanumericSpecial, length)
    }

    /// Fixed binary field of `length` raw bytes
    pub fn binary(length: usize) -> Self {
        Self::new(ContentClass::Binary, length)
    }

    /// Fixed BCD field of `length` packed bytes (`2 * length` digits)
    pub fn bcd(length: usize) -> Self {
        Self::new(ContentClass::Bcd, length)
    }

    /// Fixed hexadecimal field of `length` hex characters
    pub fn hex(length: usize) -> Self {
        Self::new(ContentClass::Hex, length)
    }

    /// Override the padding rule
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn context(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("fixed {} field", self.content))
    }
}

impl FieldCodec for FixedCodec {
    fn encode(&self, value: &FieldValue) -> Result<Vec<u8>> {
        let context = self.context();
        match (self.content, value) {
            (ContentClass::Binary, FieldValue::Bytes(b)) => {
                if b.len() > self.length {
                    return Err(CodecError::length_overflow(context, self.length, b.len()));
                }
                if b.len() < self.length {
                    return Err(CodecError::length_underflow(context, self.length, b.len()));
                }
                Ok(b.clone())
            }
            (ContentClass::Bcd, FieldValue::Text(s)) => {
                self.content.check_str(s, &context)?;
                let digits = 2 * self.length;
                if s.len() > digits {
                    return Err(CodecError::length_overflow(context, digits, s.len()));
                }
                Ok(pack_bcd(&format!("{:0>width$}", s, width = digits)))
            }
            (_, FieldValue::Text(s)) => {
                self.content.check_str(s, &context)?;
                if s.len() > self.length {
                    return Err(CodecError::length_overflow(context, self.length, s.len()));
                }
                let padded = if s.len() < self.length {
                    self.padding.apply(s, self.length).ok_or_else(|| {
                        CodecError::length_underflow(context.clone(), self.length, s.len())
                    })?
                } else {
                    s.clone()
                };
                if self.content == ContentClass::Hex {
                    Ok(padded.to_ascii_uppercase().into_bytes())
                } else {
                    Ok(padded.into_bytes())
                }
            }
            (_, FieldValue::Bytes(_)) => Err(CodecError::invalid_value(
                context,
                format!("binary value in {} field", self.content),
            )),
        }
    }

    fn parse<'a>(&self, input: &'a [u8]) -> Result<(FieldValue, &'a [u8])> {
        let context = self.context();
        if input.len() < self.length {
            return Err(CodecError::truncated(context, self.length, input.len()));
        }
        let (head, rest) = input.split_at(self.length);
        let value = match self.content {
            ContentClass::Binary => FieldValue::Bytes(head.to_vec()),
            ContentClass::Bcd => FieldValue::Text(unpack_bcd(head, &context)?),
            _ => {
                let s = std::str::from_utf8(head)
                    .map_err(|_| CodecError::invalid_value(&context, "not valid ASCII"))?;
                self.content.check_str(s, &context)?;
                FieldValue::Text(s.to_string())
            }
        };
        Ok((value, rest))
    }

    fn strip_padding(&self, value: FieldValue) -> FieldValue {
        match (self.content, value) {
            // Raw binary and BCD are never stripped
            (ContentClass::Binary, v) | (ContentClass::Bcd, v) => v,
            (_, FieldValue::Text(s)) => FieldValue::Text(self.padding.strip(&s)),
            (_, v) => v,
        }
    }

    fn configure(&mut self, options: &FieldOptions) {
        if let Some(length) = options.length {
            self.length = length;
        }
        if let Some(padding) = options.padding {
            self.padding = padding;
        }
        if options.max.is_some() {
            log::warn!("{}: option `max` has no effect on a fixed codec", self.context());
        }
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    fn boxed_clone(&self) -> Box<dyn FieldCodec> {
        Box::new(self.clone())
    }
}

/// Width of the decimal ASCII length prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPrefix {
    /// 2-digit prefix (LLVAR)
    Ll,
    /// 3-digit prefix (LLLVAR)
    Lll,
}

impl LengthPrefix {
    /// Prefix width in bytes
    pub fn width(&self) -> usize {
        match self {
            Self::Ll => 2,
            Self::Lll => 3,
        }
    }

    /// Largest value length the prefix can express
    pub fn ceiling(&self) -> usize {
        match self {
            Self::Ll => 99,
            Self::Lll => 999,
        }
    }
}

/// Variable-length codec: decimal ASCII length prefix followed by the
/// value bytes
#[derive(Debug, Clone)]
pub struct VarCodec {
    content: ContentClass,
    prefix: LengthPrefix,
    max: Option<usize>,
    label: Option<String>,
}

impl VarCodec {
    /// LLVAR codec with no upper bound beyond the prefix ceiling
    pub fn llvar(content: ContentClass) -> Self {
        Self {
            content,
            prefix: LengthPrefix::Ll,
            max: None,
            label: None,
        }
    }

    /// LLLVAR codec with no upper bound beyond the prefix ceiling
    pub fn lllvar(content: ContentClass) -> Self {
        Self {
            content,
            prefix: LengthPrefix::Lll,
            max: None,
            label: None,
        }
    }

    /// Set the upper bound on value byte length
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    fn limit(&self) -> usize {
        self.max
            .map_or(self.prefix.ceiling(), |m| m.min(self.prefix.ceiling()))
    }

    fn context(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("variable {} field", self.content))
    }
}

impl FieldCodec for VarCodec {
    fn encode(&self, value: &FieldValue) -> Result<Vec<u8>> {
        let context = self.context();
        let body = match (self.content, value) {
            (ContentClass::Binary, FieldValue::Bytes(b)) => b.clone(),
            (ContentClass::Bcd, FieldValue::Text(s)) => {
                self.content.check_str(s, &context)?;
                pack_bcd(s)
            }
            (ContentClass::Hex, FieldValue::Text(s)) => {
                self.content.check_str(s, &context)?;
                s.to_ascii_uppercase().into_bytes()
            }
            (_, FieldValue::Text(s)) => {
                self.content.check_str(s, &context)?;
                s.clone().into_bytes()
            }
            (_, FieldValue::Bytes(_)) => {
                return Err(CodecError::invalid_value(
                    context,
                    format!("binary value in {} field", self.content),
                ))
            }
        };
        let limit = self.limit();
        if body.len() > limit {
            return Err(CodecError::length_overflow(context, limit, body.len()));
        }
        let mut out = format!("{:0width$}", body.len(), width = self.prefix.width()).into_bytes();
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn parse<'a>(&self, input: &'a [u8]) -> Result<(FieldValue, &'a [u8])> {
        let context = self.context();
        let width = self.prefix.width();
        if input.len() < width {
            return Err(CodecError::truncated(context, width, input.len()));
        }
        let (prefix, rest) = input.split_at(width);
        if !prefix.iter().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::invalid_value(
                context,
                "length prefix is not decimal digits",
            ));
        }
        // Prefix is all digits and at most 3 wide, so this cannot fail
        let declared: usize = std::str::from_utf8(prefix).unwrap().parse().unwrap();
        let limit = self.limit();
        if declared > limit {
            return Err(CodecError::length_overflow(context, limit, declared));
        }
        if rest.len() < declared {
            return Err(CodecError::truncated(context, declared, rest.len()));
        }
        let (body, remaining) = rest.split_at(declared);
        let value = match self.content {
            ContentClass::Binary => FieldValue::Bytes(body.to_vec()),
            ContentClass::Bcd => FieldValue::Text(unpack_bcd(body, &context)?),
            _ => {
                let s = std::str::from_utf8(body)
                    .map_err(|_| CodecError::invalid_value(&context, "not valid ASCII"))?;
                self.content.check_str(s, &context)?;
                FieldValue::Text(s.to_string())
            }
        };
        Ok((value, remaining))
    }

    fn configure(&mut self, options: &FieldOptions) {
        if let Some(max) = options.max {
            self.max = Some(max);
        }
        if options.length.is_some() {
            log::warn!(
                "{}: option `length` has no effect on a variable codec",
                self.context()
            );
        }
        if options.padding.is_some() {
            log::warn!(
                "{}: option `padding` has no effect on a variable codec",
                self.context()
            );
        }
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    fn boxed_clone(&self) -> Box<dyn FieldCodec> {
        Box::new(self.clone())
    }
}

/// Structure of a datetime field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeKind {
    /// YYMMDDhhmmss, 12 digits
    YyMmDdHhMmSs,
    /// MMDDhhmmss, 10 digits (transmission date and time)
    MmDdHhMmSs,
    /// YYMMDD, 6 digits
    YyMmDd,
    /// hhmmss, 6 digits (local transaction time)
    HhMmSs,
    /// YYMM, 4 digits (expiration date)
    YyMm,
    /// MMDD, 4 digits (local transaction date)
    MmDd,
}

impl DateTimeKind {
    /// Encoded width in digits
    pub fn width(&self) -> usize {
        match self {
            Self::YyMmDdHhMmSs => 12,
            Self::MmDdHhMmSs => 10,
            Self::YyMmDd | Self::HhMmSs => 6,
            Self::YyMm | Self::MmDd => 4,
        }
    }

    /// chrono format string producing a well-formed value of this kind
    pub fn chrono_format(&self) -> &'static str {
        match self {
            Self::YyMmDdHhMmSs => "%y%m%d%H%M%S",
            Self::MmDdHhMmSs => "%m%d%H%M%S",
            Self::YyMmDd => "%y%m%d",
            Self::HhMmSs => "%H%M%S",
            Self::YyMm => "%y%m",
            Self::MmDd => "%m%d",
        }
    }
}

/// Fixed-length numeric ASCII datetime codec
///
/// Validates digits and width only; component-range checking stays with
/// the caller.
#[derive(Debug, Clone)]
pub struct DateTimeCodec {
    kind: DateTimeKind,
    inner: FixedCodec,
}

impl DateTimeCodec {
    /// Create a datetime codec for the given structure
    pub fn new(kind: DateTimeKind) -> Self {
        Self {
            kind,
            inner: FixedCodec::numeric(kind.width()),
        }
    }

    /// The datetime structure this codec encodes
    pub fn kind(&self) -> DateTimeKind {
        self.kind
    }
}

impl FieldCodec for DateTimeCodec {
    fn encode(&self, value: &FieldValue) -> Result<Vec<u8>> {
        self.inner.encode(value)
    }

    fn parse<'a>(&self, input: &'a [u8]) -> Result<(FieldValue, &'a [u8])> {
        self.inner.parse(input)
    }

    fn strip_padding(&self, value: FieldValue) -> FieldValue {
        // A datetime keeps its leading zeros; stripping would corrupt it
        value
    }

    fn configure(&mut self, options: &FieldOptions) {
        if !options.is_empty() {
            log::warn!(
                "datetime codec width is fixed by its kind; ignoring options {:?}",
                options
            );
        }
    }

    fn set_label(&mut self, label: &str) {
        self.inner.set_label(label);
    }

    fn boxed_clone(&self) -> Box<dyn FieldCodec> {
        Box::new(self.clone())
    }
}

/// Pack a digit string into BCD, two digits per byte, high nibble first.
/// An odd digit count gets a leading zero nibble.
fn pack_bcd(digits: &str) -> Vec<u8> {
    let padded = if digits.len() % 2 != 0 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    padded
        .as_bytes()
        .chunks(2)
        .map(|pair| ((pair[0] - b'0') << 4) | (pair[1] - b'0'))
        .collect()
}

/// Unpack BCD bytes into a digit string
fn unpack_bcd(bytes: &[u8], context: &str) -> Result<String> {
    let mut digits = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        let high = byte >> 4;
        let low = byte & 0x0F;
        if high > 9 || low > 9 {
            return Err(CodecError::invalid_value(
                context,
                format!("invalid BCD byte 0x{:02X}", byte),
            ));
        }
        digits.push((b'0' + high) as char);
        digits.push((b'0' + low) as char);
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_numeric_pads_left() {
        let codec = FixedCodec::numeric(6);
        assert_eq!(codec.encode(&"42".into()).unwrap(), b"000042");
        assert_eq!(codec.encode(&"123456".into()).unwrap(), b"123456");
    }

    #[test]
    fn test_fixed_numeric_rejects_nondigits() {
        let codec = FixedCodec::numeric(6);
        assert!(matches!(
            codec.encode(&"12A456".into()),
            Err(CodecError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_fixed_overflow_and_underflow() {
        let codec = FixedCodec::numeric(4);
        assert!(matches!(
            codec.encode(&"12345".into()),
            Err(CodecError::LengthOverflow { .. })
        ));

        let strict = FixedCodec::numeric(4).with_padding(Padding::None);
        assert!(matches!(
            strict.encode(&"12".into()),
            Err(CodecError::LengthUnderflow { .. })
        ));
    }

    #[test]
    fn test_fixed_alphanumeric_pads_right() {
        let codec = FixedCodec::alphanumeric(8);
        assert_eq!(codec.encode(&"TERM1".into()).unwrap(), b"TERM1   ");
    }

    #[test]
    fn test_fixed_parse_consumes_exactly() {
        let codec = FixedCodec::numeric(6);
        let (value, rest) = codec.parse(b"000042XYZ").unwrap();
        assert_eq!(value.text(), Some("000042"));
        assert_eq!(rest, b"XYZ");
    }

    #[test]
    fn test_fixed_parse_truncated() {
        let codec = FixedCodec::numeric(6);
        assert!(matches!(
            codec.parse(b"0004"),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn test_fixed_binary_exact_length() {
        let codec = FixedCodec::binary(4);
        assert_eq!(
            codec.encode(&vec![1u8, 2, 3, 4].into()).unwrap(),
            vec![1, 2, 3, 4]
        );
        assert!(codec.encode(&vec![1u8, 2].into()).is_err());
        assert!(codec.encode(&"0102".into()).is_err());
    }

    #[test]
    fn test_bcd_packing() {
        assert_eq!(pack_bcd("1234"), vec![0x12, 0x34]);
        assert_eq!(pack_bcd("123"), vec![0x01, 0x23]);
        assert_eq!(unpack_bcd(&[0x12, 0x34], "test").unwrap(), "1234");
        assert!(unpack_bcd(&[0xAB], "test").is_err());
    }

    #[test]
    fn test_fixed_bcd_roundtrip() {
        let codec = FixedCodec::bcd(3);
        let bytes = codec.encode(&"12345".into()).unwrap();
        assert_eq!(bytes, vec![0x01, 0x23, 0x45]);
        let (value, rest) = codec.parse(&bytes).unwrap();
        assert_eq!(value.text(), Some("012345"));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_hex_uppercased_on_encode() {
        let codec = FixedCodec::hex(4);
        assert_eq!(codec.encode(&"beef".into()).unwrap(), b"BEEF");
    }

    #[test]
    fn test_llvar_prefix() {
        let codec = VarCodec::llvar(ContentClass::Numeric).with_max(19);
        let bytes = codec.encode(&"474747474747".into()).unwrap();
        assert_eq!(bytes, b"12474747474747");
    }

    #[test]
    fn test_lllvar_prefix() {
        let codec = VarCodec::lllvar(ContentClass::AlphanumericSpecial).with_max(999);
        let bytes = codec.encode(&"hello".into()).unwrap();
        assert_eq!(bytes, b"005hello");
    }

    #[test]
    fn test_var_max_enforced_both_ways() {
        let codec = VarCodec::llvar(ContentClass::Numeric).with_max(5);
        assert!(matches!(
            codec.encode(&"123456".into()),
            Err(CodecError::LengthOverflow { .. })
        ));
        // Prefix declares 6 bytes, above the declared max of 5
        assert!(matches!(
            codec.parse(b"06123456"),
            Err(CodecError::LengthOverflow { .. })
        ));
    }

    #[test]
    fn test_var_parse_bad_prefix() {
        let codec = VarCodec::llvar(ContentClass::Numeric);
        assert!(matches!(
            codec.parse(b"1A474747"),
            Err(CodecError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_var_parse_truncated_value() {
        let codec = VarCodec::llvar(ContentClass::Numeric).with_max(19);
        assert!(matches!(
            codec.parse(b"124747"),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn test_strip_padding() {
        let numeric = FixedCodec::numeric(6);
        assert_eq!(
            numeric.strip_padding("000042".into()),
            FieldValue::from("42")
        );
        assert_eq!(
            numeric.strip_padding("000000".into()),
            FieldValue::from("0")
        );

        let text = FixedCodec::alphanumeric(8);
        assert_eq!(
            text.strip_padding("TERM1   ".into()),
            FieldValue::from("TERM1")
        );

        let bcd = FixedCodec::bcd(3);
        assert_eq!(
            bcd.strip_padding("012345".into()),
            FieldValue::from("012345")
        );
    }

    #[test]
    fn test_datetime_widths() {
        assert_eq!(DateTimeKind::YyMmDdHhMmSs.width(), 12);
        assert_eq!(DateTimeKind::MmDdHhMmSs.width(), 10);
        assert_eq!(DateTimeKind::YyMm.width(), 4);

        let codec = DateTimeCodec::new(DateTimeKind::MmDdHhMmSs);
        assert_eq!(codec.encode(&"0115120000".into()).unwrap(), b"0115120000");
        assert!(codec.encode(&"011512000X".into()).is_err());
    }

    #[test]
    fn test_datetime_never_strips() {
        let codec = DateTimeCodec::new(DateTimeKind::HhMmSs);
        assert_eq!(
            codec.strip_padding("093000".into()),
            FieldValue::from("093000")
        );
    }

    #[test]
    fn test_options_from_pairs() {
        let options = FieldOptions::from_pairs(&[
            ("length", "6"),
            ("padding", "left_zero"),
            ("colour", "red"),
        ]);
        assert_eq!(options.length, Some(6));
        assert_eq!(options.padding, Some(Padding::LeftZero));
        assert_eq!(options.max, None);
    }

    #[test]
    fn test_configure_applies_typed_options() {
        let mut codec = FixedCodec::numeric(4);
        codec.configure(&FieldOptions::new().length(6));
        assert_eq!(codec.encode(&"1".into()).unwrap(), b"000001");

        let mut var = VarCodec::llvar(ContentClass::Numeric);
        var.configure(&FieldOptions::new().max(3));
        assert!(var.encode(&"1234".into()).is_err());
    }
}
