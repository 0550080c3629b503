use thiserror::Error;

use nucmap_core::{ReadCollectionError, Strand};

#[derive(Error, Debug)]
pub enum FragmentError {
    /// Decoding the alignment input failed. The source error is kept as-is.
    #[error("Failed to decode alignment records: {0}")]
    InputDecoding(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(
        "Mate selection for {strand} strand is invalid: {inconsistent} pair(s) with mismatched mate fields (first: {read_name})"
    )]
    MatePairInconsistency {
        strand: Strand,
        read_name: String,
        inconsistent: usize,
    },

    #[error("Read name {name} appears more than once among {strand} strand mates")]
    DuplicateReadName { strand: Strand, name: String },

    #[error("Unknown read type: {0}. Expected `single` or `paired`")]
    InvalidReadType(String),

    #[error("Unknown duplicate policy: {0}. Expected `keep-first` or `reject`")]
    InvalidDuplicatePolicy(String),

    #[error(transparent)]
    Interval(#[from] ReadCollectionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FragmentError>;
