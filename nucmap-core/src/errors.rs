use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadCollectionError {
    #[error("Invalid interval {chr}:{start}-{end}. Intervals must satisfy 1 <= start <= end")]
    InvalidInterval { chr: String, start: i64, end: i64 },

    #[error("Invalid strand: {0}. Expected one of '+', '-', '*' or '.'")]
    InvalidStrand(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReadCollectionError>;
