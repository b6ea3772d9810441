//! Errors raised while loading per-file facts from the extractor.

use super::error_code::{self, HexarchErrorCode};

/// Errors that can occur when decoding a fact snapshot.
#[derive(Debug, thiserror::Error)]
pub enum FactsError {
    #[error("Malformed fact snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Fact snapshot contains a file entry with an empty path")]
    EmptyPath,
}

impl HexarchErrorCode for FactsError {
    fn error_code(&self) -> &'static str {
        error_code::FACTS_ERROR
    }
}
