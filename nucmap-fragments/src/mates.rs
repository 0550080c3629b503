//! Mate matching within one strand group.
//!
//! Mates are looked up by read name. Pairs are built for names present among
//! both the first and the second mates; everything else is dropped. Every kept
//! pair must cross-reference its partner exactly, otherwise the whole strand is
//! rejected: a mismatch means the input is corrupt or was sorted incorrectly.

use std::fmt::{self, Display};
use std::str::FromStr;

use fxhash::FxHashMap;

use nucmap_core::{GenomicInterval, Strand};

use crate::errors::{FragmentError, Result};
use crate::partition::{MateRole, classify_flag};
use crate::record::AlignmentRecord;

///
/// What to do when a read name shows up twice among the first (or second)
/// mates of one strand group.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the record seen first, discard later ones.
    #[default]
    KeepFirst,
    /// Fail with [`FragmentError::DuplicateReadName`].
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "keep-first" | "keep_first" => Ok(DuplicatePolicy::KeepFirst),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(FragmentError::InvalidDuplicatePolicy(s.to_string())),
        }
    }
}

impl Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::KeepFirst => write!(f, "keep-first"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

///
/// Records of one mate role indexed by read name. `order` remembers the
/// insertion order of names so pairing is deterministic.
///
struct MateIndex<'a> {
    by_name: FxHashMap<&'a str, &'a AlignmentRecord>,
    order: Vec<&'a str>,
}

impl<'a> MateIndex<'a> {
    fn build<I>(records: I, strand: Strand, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = &'a AlignmentRecord>,
    {
        let mut by_name: FxHashMap<&'a str, &'a AlignmentRecord> = FxHashMap::default();
        let mut order = Vec::new();
        let mut duplicates = 0usize;

        for record in records {
            let name = record.name.as_str();
            if by_name.contains_key(name) {
                match policy {
                    DuplicatePolicy::KeepFirst => duplicates += 1,
                    DuplicatePolicy::Reject => {
                        return Err(FragmentError::DuplicateReadName {
                            strand,
                            name: name.to_string(),
                        });
                    }
                }
                continue;
            }
            by_name.insert(name, record);
            order.push(name);
        }

        if duplicates > 0 {
            log::warn!(
                "Discarded {} duplicate read name(s) on {} strand, keeping the first record of each",
                duplicates,
                strand
            );
        }

        Ok(MateIndex { by_name, order })
    }
}

///
/// Do two mates point at each other?
///
fn mates_agree(first: &AlignmentRecord, second: &AlignmentRecord) -> bool {
    first.mate_pos == second.pos
        && second.mate_pos == first.pos
        && first.chr == second.chr
        && first.mate_reference() == second.chr
        && second.mate_reference() == first.chr
}

///
/// Fragment spanning from the leftmost mate's first base to the rightmost
/// mate's last base.
///
fn fragment_from_mates(
    first: &AlignmentRecord,
    second: &AlignmentRecord,
    strand: Strand,
) -> Result<GenomicInterval> {
    let start = first.pos.min(second.pos) as i64;
    let end = first.end_exclusive().max(second.end_exclusive()) - 1;
    Ok(GenomicInterval::new(first.chr.as_str(), start, end, Some(strand))?)
}

///
/// Pair the records of one strand group into fragments.
///
/// # Arguments
/// - strand: the strand the group was partitioned into
/// - records: the group's records; records with other flags are ignored
/// - policy: how repeated read names are handled
///
/// # Returns
/// One fragment per read name found among both the first and second mates,
/// in the order the first mates appeared. An empty vector when no name is
/// shared.
///
pub fn match_mates(
    strand: Strand,
    records: &[AlignmentRecord],
    policy: DuplicatePolicy,
) -> Result<Vec<GenomicInterval>> {
    let role_of = |record: &&AlignmentRecord| classify_flag(record.flag);

    let firsts = MateIndex::build(
        records
            .iter()
            .filter(|r| role_of(r) == Some((strand, MateRole::First))),
        strand,
        policy,
    )?;
    let seconds = MateIndex::build(
        records
            .iter()
            .filter(|r| role_of(r) == Some((strand, MateRole::Second))),
        strand,
        policy,
    )?;

    let mut fragments = Vec::new();
    let mut inconsistent = 0usize;
    let mut first_bad: Option<&str> = None;

    for name in &firsts.order {
        let Some(second) = seconds.by_name.get(name) else {
            continue;
        };
        let first = firsts.by_name[name];

        if !mates_agree(first, second) {
            inconsistent += 1;
            first_bad.get_or_insert(*name);
            continue;
        }

        fragments.push(fragment_from_mates(first, second, strand)?);
    }

    if let Some(read_name) = first_bad {
        return Err(FragmentError::MatePairInconsistency {
            strand,
            read_name: read_name.to_string(),
            inconsistent,
        });
    }

    log::debug!(
        "{} strand: {} first mates, {} second mates, {} fragments",
        strand,
        firsts.order.len(),
        seconds.order.len(),
        fragments.len()
    );

    Ok(fragments)
}
