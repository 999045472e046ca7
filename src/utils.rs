//! Helpers for producing well-formed field values

use crate::codec::DateTimeKind;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};

/// Mask a PAN for display, keeping the issuer prefix (6 digits) and the
/// last 4
pub fn mask_pan(pan: &str) -> String {
    mask_pan_keeping(pan, 6, 4)
}

/// Mask a PAN keeping `prefix` leading and `suffix` trailing characters
///
/// Length-preserving: every hidden character becomes one `*`, so masked
/// output lines up with the original in fixed-width logs. A PAN too
/// short to hide anything is masked entirely.
pub fn mask_pan_keeping(pan: &str, prefix: usize, suffix: usize) -> String {
    if pan.len() <= prefix + suffix {
        return "*".repeat(pan.len());
    }
    let mut masked = String::with_capacity(pan.len());
    masked.push_str(&pan[..prefix]);
    masked.extend(std::iter::repeat('*').take(pan.len() - prefix - suffix));
    masked.push_str(&pan[pan.len() - suffix..]);
    masked
}

/// Format a 12-digit minor-unit amount value for display
///
/// ```
/// use iso8583_codec::utils::format_amount;
///
/// assert_eq!(format_amount("000000010000", "$"), Some("$100.00".to_string()));
/// assert_eq!(format_amount("000000020050", "€"), Some("€200.50".to_string()));
/// ```
pub fn format_amount(amount: &str, currency_symbol: &str) -> Option<String> {
    let minor: i64 = amount.parse().ok()?;
    let value = Decimal::new(minor, 2);
    Some(format!("{}{:.2}", currency_symbol, value))
}

/// Render a decimal amount as the 12-digit minor-unit field value
///
/// ```
/// use iso8583_codec::utils::amount_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(amount_value(Decimal::new(10050, 2)), Some("000000010050".to_string()));
/// ```
pub fn amount_value(amount: Decimal) -> Option<String> {
    let minor = (amount * Decimal::from(100)).trunc().to_i64()?;
    if !(0..=999_999_999_999).contains(&minor) {
        return None;
    }
    Some(format!("{:012}", minor))
}

/// Current UTC instant rendered for a datetime codec kind
pub fn now_value(kind: DateTimeKind) -> String {
    Utc::now().format(kind.chrono_format()).to_string()
}

/// Transmission date and time value (field 7, MMDDhhmmss)
pub fn now_transmission_datetime() -> String {
    now_value(DateTimeKind::MmDdHhMmSs)
}

/// Local transaction time value (field 12, hhmmss)
pub fn now_local_time() -> String {
    now_value(DateTimeKind::HhMmSs)
}

/// Local transaction date value (field 13, MMDD)
pub fn now_local_date() -> String {
    now_value(DateTimeKind::MmDd)
}

/// Next System Trace Audit Number (field 11)
///
/// A process-wide wrapping 6-digit counter. Production systems persist
/// their STAN sequence; this is a convenience for tests and tools.
pub fn next_stan() -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(1);
    let value = COUNTER.fetch_add(1, Ordering::SeqCst) % 1_000_000;
    format!("{:06}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_pan_preserves_length() {
        let masked = mask_pan("4111111111111111");
        assert_eq!(masked, "411111******1111");
        assert_eq!(masked.len(), 16);
    }

    #[test]
    fn test_mask_pan_keeping() {
        assert_eq!(mask_pan_keeping("30569309025904", 4, 2), "3056********04");
        // Nothing left to hide: mask the whole thing
        assert_eq!(mask_pan_keeping("123", 6, 4), "***");
        assert_eq!(mask_pan_keeping("4111111111", 6, 4), "**********");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("000000010000", "$"), Some("$100.00".to_string()));
        assert_eq!(format_amount("000000000001", "$"), Some("$0.01".to_string()));
        assert_eq!(format_amount("garbage", "$"), None);
    }

    #[test]
    fn test_amount_value() {
        assert_eq!(amount_value(Decimal::new(10000, 2)), Some("000000010000".to_string()));
        assert_eq!(amount_value(Decimal::new(1, 2)), Some("000000000001".to_string()));
        assert_eq!(amount_value(Decimal::new(-500, 2)), None);
    }

    #[test]
    fn test_now_values_have_codec_widths() {
        assert_eq!(now_transmission_datetime().len(), 10);
        assert_eq!(now_local_time().len(), 6);
        assert_eq!(now_local_date().len(), 4);
        assert_eq!(now_value(DateTimeKind::YyMmDdHhMmSs).len(), 12);
    }

    #[test]
    fn test_stan_sequence() {
        let first = next_stan();
        let second = next_stan();
        assert_eq!(first.len(), 6);
        assert_ne!(first, second);
    }
}
