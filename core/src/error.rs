use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejection of a raw dataset. The previously loaded store stays in place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported dataset shape")]
    UnsupportedShape,

    #[error("empty dataset")]
    EmptyDataset,
}
