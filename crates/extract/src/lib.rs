pub mod pipeline;
pub mod scan;
pub mod source;

pub use pipeline::{extract, Extraction};
pub use scan::scan_text;
pub use source::{CandidateSource, Channel, DecodedBarcodes, RawDump, SourceError, TextBlocks};
