use std::collections::HashSet;

use serde::Serialize;

use boleto_core::{Barcode, LinhaDigitavel};

use crate::source::{CandidateSource, Channel};

/// Outcome of one extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// Every boleto found, in 47-digit form, first-seen order.
    pub numbers: Vec<LinhaDigitavel>,
    /// The channel whose candidates were used; `None` when every channel
    /// came up empty or failed.
    pub channel: Option<Channel>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Run the fallback chain over `sources` in order.
///
/// The first source that yields any candidate wins and later sources are
/// not consulted; the winner's candidates are then normalized to 47-digit
/// lines. A source that fails outright is logged and treated as empty, so
/// the chain keeps moving. No candidates anywhere is a valid outcome, not
/// an error.
pub fn extract(sources: &[&dyn CandidateSource]) -> Extraction {
    for source in sources {
        let channel = source.channel();
        let candidates = match source.candidates() {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Extraction channel '{channel}' failed: {e}");
                continue;
            }
        };
        if candidates.is_empty() {
            tracing::debug!("Extraction channel '{channel}' found no candidates");
            continue;
        }
        tracing::debug!(
            "Extraction channel '{channel}' produced {} candidate(s)",
            candidates.len()
        );
        return Extraction {
            numbers: normalize(candidates),
            channel: Some(channel),
        };
    }

    Extraction {
        numbers: Vec::new(),
        channel: None,
    }
}

/// Collapse duplicate candidates, then bring each one to its 47-digit form:
/// 44-digit payloads are converted (convênio slips drop out), 47-digit
/// candidates pass through, anything else is discarded. The output is
/// de-duplicated once more so a payload and its own typed line arriving
/// together yield a single entry.
fn normalize(candidates: Vec<String>) -> Vec<LinhaDigitavel> {
    let mut seen = HashSet::new();
    let mut numbers: Vec<LinhaDigitavel> = Vec::new();

    for candidate in candidates {
        if !seen.insert(candidate.clone()) {
            continue;
        }
        let linha = match candidate.len() {
            44 => Barcode::parse(&candidate).and_then(|b| b.to_linha_digitavel()),
            47 => LinhaDigitavel::parse(&candidate),
            _ => None,
        };
        match linha {
            Some(linha) if !numbers.contains(&linha) => numbers.push(linha),
            Some(_) => {}
            None => tracing::debug!("Dropping candidate during normalization: {candidate}"),
        }
    }

    numbers
}
