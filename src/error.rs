use thiserror::Error;

/// Errors surfaced by the effectful parts of the crate (file output, viewer launch,
/// figure decoding). Encoding a figure never fails for values the types allow.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A `+`-joined flag string contained a token outside the attribute's universe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {attribute} flag `{token}`")]
pub struct FlagParseError {
    pub attribute: &'static str,
    pub token: String,
}

pub type Result<T> = std::result::Result<T, Error>;
