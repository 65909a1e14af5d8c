use thiserror::Error;

/// Errors returned when producing a schema document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to encode schema document: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
