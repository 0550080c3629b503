//! # Fragment reconstruction from alignment records.
//!
//! Turns one input's alignment records into a canonical [`ReadCollection`]:
//!
//! 1. records are split into forward and reverse strand groups by flag code ([`partition`]),
//! 2. mates are paired by read name within each group ([`mates`]),
//! 3. the fragments of both strands are merged and sorted ([`sort`]).
//!
//! Single-end input skips all three steps and keeps every record as a read.
//!
//! # Example
//!
//! ```no_run
//! use nucmap_fragments::{ReadType, reads_from_source, DuplicatePolicy, TsvRecordReader};
//!
//! let mut source = TsvRecordReader::new("records.tsv.gz");
//! let reads = reads_from_source(&mut source, ReadType::Paired, DuplicatePolicy::KeepFirst).unwrap();
//! println!("{}", reads);
//! ```
pub mod consts;
pub mod errors;
pub mod mates;
pub mod partition;
pub mod reader;
pub mod record;
pub mod sort;

use std::fmt::{self, Display};
use std::str::FromStr;

use nucmap_core::{GenomicInterval, ReadCollection, Strand};

// re-exports
pub use errors::{FragmentError, Result};
pub use mates::{DuplicatePolicy, match_mates};
pub use partition::{StrandGroups, partition_by_strand};
pub use reader::{RecordSource, TsvRecordReader};
pub use record::AlignmentRecord;
pub use sort::{canonicalize, sort_fragments};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadType {
    Single,
    #[default]
    Paired,
}

impl FromStr for ReadType {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "single" => Ok(ReadType::Single),
            "paired" => Ok(ReadType::Paired),
            _ => Err(FragmentError::InvalidReadType(s.to_string())),
        }
    }
}

impl Display for ReadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadType::Single => write!(f, "single"),
            ReadType::Paired => write!(f, "paired"),
        }
    }
}

///
/// Rebuild paired-end fragments and return them in canonical order.
///
/// The two strands are matched concurrently. If either strand holds an
/// inconsistent mate pair the whole call fails; the forward strand error wins
/// when both do. No properly paired records yields an empty collection.
///
pub fn fragments_from_records(
    records: Vec<AlignmentRecord>,
    policy: DuplicatePolicy,
) -> Result<ReadCollection> {
    let groups = partition_by_strand(records);

    let (forward, reverse) = rayon::join(
        || match_mates(Strand::Forward, &groups.forward, policy),
        || match_mates(Strand::Reverse, &groups.reverse, policy),
    );
    let mut fragments = forward?;
    fragments.extend(reverse?);

    log::info!("Built {} fragments", fragments.len());

    Ok(sort_fragments(fragments))
}

///
/// Keep every record as a read spanning `[pos, pos + width - 1]`, grouped by
/// reference in input order.
///
pub fn single_reads_from_records(records: Vec<AlignmentRecord>) -> Result<ReadCollection> {
    let reads = records
        .into_iter()
        .map(|r| {
            GenomicInterval::from_start_width(r.chr, r.pos as i64, r.width as i64, r.strand)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ReadCollection::from(reads))
}

///
/// Build reads for the given read type.
///
pub fn reads_from_records(
    records: Vec<AlignmentRecord>,
    read_type: ReadType,
    policy: DuplicatePolicy,
) -> Result<ReadCollection> {
    match read_type {
        ReadType::Single => single_reads_from_records(records),
        ReadType::Paired => fragments_from_records(records, policy),
    }
}

///
/// Pull every record from a source and build reads. Decoding errors from the
/// source are returned untouched.
///
pub fn reads_from_source<S: RecordSource + ?Sized>(
    source: &mut S,
    read_type: ReadType,
    policy: DuplicatePolicy,
) -> Result<ReadCollection> {
    let records = source.read_records()?;
    reads_from_records(records, read_type, policy)
}
