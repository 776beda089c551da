use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type for the fallible edges of the crate: parsing rule
/// text and writing rendered documents.
///
/// Building and rendering rules never fails.
#[derive(Debug, Error)]
pub enum TypedRulesError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write rules document: {0}")]
    Io(#[from] std::io::Error),
}
