use serde::Serialize;
use std::fmt;
use thiserror::Error;

use boleto_core::is_valid_barcode;

use crate::scan::scan_text;

/// Where a batch of candidates came from. Declaration order is priority
/// order: decoded barcodes are the most reliable channel, a raw byte dump
/// the last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Barcode,
    Text,
    RawBytes,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Barcode => write!(f, "barcode"),
            Channel::Text => write!(f, "text"),
            Channel::RawBytes => write!(f, "raw_bytes"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Barcode decoder error: {0}")]
    Decoder(String),
    #[error("Text extraction error: {0}")]
    TextExtraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One extraction channel's supplier of candidate digit strings.
///
/// Implementations wrap external collaborators (a barcode reader, a document
/// text extractor). Failure is reported distinctly from "found nothing" so
/// callers can tell an empty document from a broken decoder.
pub trait CandidateSource {
    fn channel(&self) -> Channel;
    fn candidates(&self) -> Result<Vec<String>, SourceError>;
}

// ── Decoded barcode payloads ─────────────────────────────────────────────────

/// Payload strings already decoded from barcode images by an external reader.
///
/// Keeps 44-digit payloads (validated permissively) and exact 47-digit
/// strings (some readers decode the printed typeable line directly); any
/// other shape is dropped.
pub struct DecodedBarcodes {
    payloads: Vec<String>,
}

impl DecodedBarcodes {
    pub fn new(payloads: Vec<String>) -> Self {
        Self { payloads }
    }
}

impl CandidateSource for DecodedBarcodes {
    fn channel(&self) -> Channel {
        Channel::Barcode
    }

    fn candidates(&self) -> Result<Vec<String>, SourceError> {
        let kept = self
            .payloads
            .iter()
            .filter(|p| {
                let keep = is_valid_barcode(p)
                    || (p.len() == 47 && p.bytes().all(|b| b.is_ascii_digit()));
                if !keep {
                    tracing::debug!("Skipping non-boleto barcode payload: {p}");
                }
                keep
            })
            .cloned()
            .collect();
        Ok(kept)
    }
}

// ── Extracted text blocks ────────────────────────────────────────────────────

/// Text blocks produced by an external document text extractor, scanned
/// block by block as free text.
pub struct TextBlocks {
    blocks: Vec<String>,
}

impl TextBlocks {
    pub fn new(blocks: Vec<String>) -> Self {
        Self { blocks }
    }
}

impl CandidateSource for TextBlocks {
    fn channel(&self) -> Channel {
        Channel::Text
    }

    fn candidates(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.blocks.iter().flat_map(|block| scan_text(block)).collect())
    }
}

// ── Raw byte dump ────────────────────────────────────────────────────────────

/// A raw document byte dump, decoded as Latin-1 and scanned like free text.
///
/// Every byte maps to the code point of the same value, so ASCII digit runs
/// survive whatever encoding or compression wrapper the document used. This
/// is the fallback for encrypted or otherwise unparseable documents.
pub struct RawDump {
    bytes: Vec<u8>,
}

impl RawDump {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl CandidateSource for RawDump {
    fn channel(&self) -> Channel {
        Channel::RawBytes
    }

    fn candidates(&self) -> Result<Vec<String>, SourceError> {
        let text: String = self.bytes.iter().map(|&b| char::from(b)).collect();
        Ok(scan_text(&text))
    }
}
