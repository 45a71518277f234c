use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use boleto_core::{is_valid_barcode, KNOWN_BANK_CODES};

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

re!(re_digit_run, r"\b[0-9]{44}\b");
re!(re_separators, r"[\s\-\.]");

/// 44-digit runs that start with a known bank code. Assembled from the code
/// table at first use. Currently a strict subset of the plain 44-run pattern,
/// so it contributes no matches of its own; scanned second regardless.
fn re_bank_prefixed() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| {
        let codes = KNOWN_BANK_CODES.join("|");
        Regex::new(&format!(r"\b(?:{codes})[0-9]{{41}}\b")).expect("invalid regex")
    })
}

// ── Candidate scanner ────────────────────────────────────────────────────────

/// Scan free text for 44-digit barcode payloads.
///
/// Matches are stripped of stray separators, validated permissively (an
/// unknown bank prefix warns but passes) and de-duplicated preserving
/// first-seen order.
pub fn scan_text(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    let matches = re_digit_run()
        .find_iter(text)
        .chain(re_bank_prefixed().find_iter(text));

    for m in matches {
        let clean = re_separators().replace_all(m.as_str(), "").into_owned();
        if clean.len() == 44 && is_valid_barcode(&clean) && seen.insert(clean.clone()) {
            found.push(clean);
        }
    }

    found
}
