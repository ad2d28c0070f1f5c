//! Error handling for quote acquisition

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AcquisitionError {
    /// The source could not produce a snapshot at all.
    #[error("Quote source unavailable: {0}")]
    Unavailable(String),

    /// The source answered, but the payload could not be turned into a snapshot.
    #[error("Malformed quote payload: {0}")]
    Malformed(String),
}
