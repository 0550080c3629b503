//! Strand partitioning of alignment records by flag code.

use nucmap_core::Strand;

use crate::consts::*;
use crate::record::AlignmentRecord;

/// Which side of a pair a record is, within its strand group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MateRole {
    /// leftmost, forward-oriented mate
    First,
    Second,
}

///
/// Map a raw flag onto the strand group and mate role it belongs to.
/// Flags outside the four properly paired codes give `None`.
///
pub fn classify_flag(flag: u16) -> Option<(Strand, MateRole)> {
    match flag & FLAG_MASK {
        FORWARD_FIRST_MATE => Some((Strand::Forward, MateRole::First)),
        FORWARD_SECOND_MATE => Some((Strand::Forward, MateRole::Second)),
        REVERSE_FIRST_MATE => Some((Strand::Reverse, MateRole::First)),
        REVERSE_SECOND_MATE => Some((Strand::Reverse, MateRole::Second)),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct StrandGroups {
    pub forward: Vec<AlignmentRecord>,
    pub reverse: Vec<AlignmentRecord>,
}

impl StrandGroups {
    pub fn len(&self) -> usize {
        self.forward.len() + self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// Split records into the forward and reverse strand groups.
///
/// Records whose masked flag is not one of the properly paired primary codes
/// are dropped without error.
///
pub fn partition_by_strand(records: Vec<AlignmentRecord>) -> StrandGroups {
    let total = records.len();
    let mut groups = StrandGroups::default();

    for record in records {
        match classify_flag(record.flag) {
            Some((Strand::Forward, _)) => groups.forward.push(record),
            Some((Strand::Reverse, _)) => groups.reverse.push(record),
            None => {}
        }
    }

    log::debug!(
        "Partitioned {} records: {} forward, {} reverse, {} dropped",
        total,
        groups.forward.len(),
        groups.reverse.len(),
        total - groups.len()
    );

    groups
}
