use std::collections::HashSet;
use std::sync::OnceLock;

/// Bank codes seen on real boleto slips. Membership is advisory only: the
/// validator warns about codes outside this list but never rejects them.
pub const KNOWN_BANK_CODES: &[&str] = &[
    "001", "033", "104", "237", "341", "356", "389", "422", "633", "745", "756",
    "000", "004", "021", "025", "077", "085", "097", "212", "318", "197",
];

/// Display names for codes that map to a single well-known issuer.
/// "000" is left unnamed; it shows up on test and sandbox slips.
const BANK_NAMES: &[(&str, &str)] = &[
    ("001", "Banco do Brasil"),
    ("004", "Banco do Nordeste"),
    ("021", "Banestes"),
    ("025", "Banco Alfa"),
    ("033", "Santander"),
    ("077", "Banco Inter"),
    ("085", "Ailos"),
    ("097", "Credisis"),
    ("104", "Caixa Econômica Federal"),
    ("197", "Stone Pagamentos"),
    ("212", "Banco Original"),
    ("237", "Bradesco"),
    ("318", "Banco BMG"),
    ("341", "Itaú Unibanco"),
    ("356", "Banco Real"),
    ("389", "Banco Mercantil do Brasil"),
    ("422", "Banco Safra"),
    ("633", "Banco Rendimento"),
    ("745", "Citibank"),
    ("756", "Sicoob"),
];

fn known_codes() -> &'static HashSet<&'static str> {
    static CODES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    CODES.get_or_init(|| KNOWN_BANK_CODES.iter().copied().collect())
}

/// Whether `code` is one of the enumerated issuer codes.
pub fn is_known_bank_code(code: &str) -> bool {
    known_codes().contains(code)
}

/// Human-readable issuer name, for codes that have one.
pub fn bank_name(code: &str) -> Option<&'static str> {
    BANK_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_three_ascii_digits() {
        for code in KNOWN_BANK_CODES {
            assert_eq!(code.len(), 3, "bad code {code:?}");
            assert!(code.bytes().all(|b| b.is_ascii_digit()), "bad code {code:?}");
        }
    }

    #[test]
    fn membership_lookup() {
        assert!(is_known_bank_code("001"));
        assert!(is_known_bank_code("104"));
        assert!(is_known_bank_code("756"));
        assert!(!is_known_bank_code("999"));
        assert!(!is_known_bank_code(""));
        assert!(!is_known_bank_code("0010"));
    }

    #[test]
    fn every_named_code_is_known() {
        for (code, _) in BANK_NAMES {
            assert!(is_known_bank_code(code), "{code} named but not known");
        }
    }

    #[test]
    fn bank_name_lookup() {
        assert_eq!(bank_name("001"), Some("Banco do Brasil"));
        assert_eq!(bank_name("341"), Some("Itaú Unibanco"));
        assert_eq!(bank_name("000"), None); // known but unnamed
        assert_eq!(bank_name("999"), None);
    }
}
