use serde::Serialize;
use std::fmt;

use crate::barcode::Barcode;
use crate::checksum::mod10_check_digit;

/// The 47-digit typeable line of a bank boleto, validated on construction.
///
/// Layout: field 1 (10 digits), field 2 (11), field 3 (11), the general
/// check digit, then the 14-digit due-date factor + value block. The three
/// field check digits are embedded at positions 9, 20 and 31.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinhaDigitavel(String);

impl LinhaDigitavel {
    pub const LEN: usize = 47;

    /// Structural parse: exactly 47 ASCII digits, nothing else.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(LinhaDigitavel(s.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical punctuated form:
    /// `xxxxx.xxxxx xxxxx.xxxxx xxxxx.xxxxx x xxxxxxxxxxxxxxxx`.
    ///
    /// Pure slicing over the digit groups as printed on slips; no checksum
    /// is recomputed here.
    pub fn formatted(&self) -> String {
        let n = &self.0;
        format!(
            "{}.{} {}.{} {}.{} {} {}",
            &n[0..5],
            &n[5..10],
            &n[10..15],
            &n[15..20],
            &n[20..25],
            &n[25..30],
            &n[30..31],
            &n[31..47],
        )
    }
}

impl fmt::Display for LinhaDigitavel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Barcode {
    /// Convert to the 47-digit typeable line.
    ///
    /// Defined for bank slips only: convênio barcodes (leading 8) have no
    /// linha digitável in this layout and yield `None`.
    pub fn to_linha_digitavel(&self) -> Option<LinhaDigitavel> {
        if self.is_convenio() {
            return None;
        }
        let code = self.as_str();

        // Field bases: bank + currency digits joined with positions 19-23,
        // then the two 10-digit free-field blocks.
        let base1 = format!("{}{}", &code[0..4], &code[19..24]);
        let base2 = &code[24..34];
        let base3 = &code[34..44];

        let dv1 = mod10_check_digit(&base1);
        let dv2 = mod10_check_digit(base2);
        let dv3 = mod10_check_digit(base3);

        // The general check digit and the factor/value block carry over
        // verbatim from the barcode.
        let general = &code[4..5];
        let factor_value = &code[5..19];

        LinhaDigitavel::parse(&format!(
            "{base1}{dv1}{base2}{dv2}{base3}{dv3}{general}{factor_value}"
        ))
    }
}

/// String-in convenience over [`Barcode::to_linha_digitavel`]: anything that
/// is not a 44-digit bank-slip payload comes back as `None`.
pub fn linha_digitavel_from_barcode(number: &str) -> Option<LinhaDigitavel> {
    Barcode::parse(number)?.to_linha_digitavel()
}

/// Format a 47-digit number for display. Any other input (wrong length,
/// non-digit content) is returned unchanged rather than treated as an error.
pub fn format_number(number: &str) -> String {
    match LinhaDigitavel::parse(number) {
        Some(linha) => linha.formatted(),
        None => number.to_owned(),
    }
}
