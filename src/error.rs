// src/error.rs
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything the library can fail with.
///
/// A section that is simply missing from a page is *not* an error: loaders
/// leave the matching field empty. `Lookup` is reserved for a caller asking
/// for a named vote question that isn't there.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no vote question {question:?} (or it has no votes)")]
    Lookup { question: String },

    #[error("malformed HTML: {0}")]
    Malformed(String),

    #[error("fetch failed: {0}")]
    Net(String),

    #[error("nothing stored for {0:?}")]
    NotStored(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
