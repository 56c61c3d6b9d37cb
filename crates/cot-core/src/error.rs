use thiserror::Error;

#[derive(Error, Debug)]
pub enum CotError {
    #[error("Invalid compression rate: {0} (expected a value in (0, 1])")]
    InvalidRate(f64),
    #[error("Compression error: {0}")]
    Compression(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CotError>;
