use serde::Serialize;
use std::fmt;

use crate::banks;

/// A 44-digit boleto barcode payload, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Barcode(String);

impl Barcode {
    pub const LEN: usize = 44;

    /// Structural parse: exactly 44 ASCII digits, nothing else.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(Barcode(s.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The issuing bank's 3-digit code.
    pub fn bank_code(&self) -> &str {
        &self.0[..3]
    }

    /// The general check digit embedded at position 4.
    pub fn check_digit(&self) -> char {
        self.0.as_bytes()[4] as char
    }

    /// Convênio/arrecadação slips (utilities, taxes, government collection)
    /// carry a leading 8 and use a different field layout.
    pub fn is_convenio(&self) -> bool {
        self.0.starts_with('8')
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permissive validation for scanner candidates. Hard-fails only on length
/// and digit composition; an unknown bank prefix is logged and accepted.
pub fn is_valid_barcode(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if number.len() != Barcode::LEN {
        return false;
    }
    let code = &number[..3];
    if !banks::is_known_bank_code(code) {
        tracing::warn!("Unknown bank code '{code}' in boleto number: {number}");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const BB_BARCODE: &str = "00193373700000001000500940144816060680935031";

    #[test]
    fn parse_accepts_44_digits() {
        let barcode = Barcode::parse(BB_BARCODE).unwrap();
        assert_eq!(barcode.as_str(), BB_BARCODE);
        assert_eq!(barcode.to_string(), BB_BARCODE);
    }

    #[test]
    fn parse_rejects_other_lengths() {
        assert!(Barcode::parse("").is_none());
        assert!(Barcode::parse(&"1".repeat(43)).is_none());
        assert!(Barcode::parse(&"1".repeat(45)).is_none());
        assert!(Barcode::parse(&"1".repeat(47)).is_none());
    }

    #[test]
    fn parse_rejects_non_digits() {
        let mut s = BB_BARCODE.to_string();
        s.replace_range(10..11, "x");
        assert!(Barcode::parse(&s).is_none());
        assert!(Barcode::parse(&format!("{} ", &BB_BARCODE[..43])).is_none());
    }

    #[test]
    fn parse_rejects_non_ascii_digits() {
        // 42 ASCII digits plus one two-byte Arabic-Indic digit: 44 bytes,
        // but not a digit string in this domain.
        let s = format!("{}٤", "0".repeat(42));
        assert_eq!(s.len(), 44);
        assert!(Barcode::parse(&s).is_none());
    }

    #[test]
    fn field_accessors() {
        let barcode = Barcode::parse(BB_BARCODE).unwrap();
        assert_eq!(barcode.bank_code(), "001");
        assert_eq!(barcode.check_digit(), '3');
        assert!(!barcode.is_convenio());
    }

    #[test]
    fn leading_eight_is_convenio() {
        let barcode = Barcode::parse(&format!("8{}", "0".repeat(43))).unwrap();
        assert!(barcode.is_convenio());
    }

    #[test]
    fn valid_number_with_known_bank() {
        assert!(is_valid_barcode(BB_BARCODE));
    }

    #[test]
    fn valid_number_with_unknown_bank() {
        // Unknown prefix still validates; only a warning is emitted.
        assert!(is_valid_barcode(&format!("999{}", "0".repeat(41))));
    }

    #[test]
    fn invalid_when_empty_or_non_digit() {
        assert!(!is_valid_barcode(""));
        assert!(!is_valid_barcode("abc"));
        assert!(!is_valid_barcode(&format!("{}a", "1".repeat(43))));
    }

    #[test]
    fn invalid_when_wrong_length() {
        assert!(!is_valid_barcode("123456789"));
        assert!(!is_valid_barcode(&"1".repeat(43)));
        assert!(!is_valid_barcode(&"1".repeat(45)));
        // A 47-digit linha digitável is not a barcode payload.
        assert!(!is_valid_barcode(&"1".repeat(47)));
    }
}
