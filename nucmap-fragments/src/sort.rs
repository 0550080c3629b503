use std::collections::BTreeMap;

use rayon::prelude::*;

use nucmap_core::{GenomicInterval, ReadCollection};

///
/// Sort one reference's reads by end, then re-sort by start.
///
/// Both passes are stable, so reads sharing a start keep the end order from
/// the first pass: the result is ordered by start with end breaking ties.
/// Downstream coverage code relies on this exact order.
///
fn sort_chrom_reads(reads: &mut [GenomicInterval]) {
    reads.sort_by_key(|r| r.end);
    reads.sort_by_key(|r| r.start);
}

///
/// Build the canonical read collection from an unordered set of fragments:
/// grouped per reference, references in lexicographic order, reads sorted
/// within each reference. References are sorted in parallel.
///
pub fn sort_fragments(fragments: Vec<GenomicInterval>) -> ReadCollection {
    let mut groups: BTreeMap<String, Vec<GenomicInterval>> = BTreeMap::new();
    for fragment in fragments {
        groups.entry(fragment.chr.clone()).or_default().push(fragment);
    }

    groups
        .par_iter_mut()
        .for_each(|(_, reads)| sort_chrom_reads(reads));

    ReadCollection::from_groups(groups)
}

///
/// Re-sort an existing collection into canonical order. Sorting an already
/// canonical collection gives back an identical one.
///
pub fn canonicalize(collection: ReadCollection) -> ReadCollection {
    let mut groups = collection.into_groups();

    groups
        .par_iter_mut()
        .for_each(|(_, reads)| sort_chrom_reads(reads));

    ReadCollection::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn iv(chr: &str, start: i64, end: i64) -> GenomicInterval {
        GenomicInterval::new(chr, start, end, None).unwrap()
    }

    fn coords(rc: &ReadCollection, chr: &str) -> Vec<(u32, u32)> {
        rc.chrom_reads(chr).iter().map(|r| (r.start, r.end)).collect()
    }

    #[fixture]
    fn fragments() -> Vec<GenomicInterval> {
        vec![
            iv("chrB", 30, 90),
            iv("chrA", 10, 50),
            iv("chrA", 10, 20),
            iv("chrA", 5, 100),
            iv("chrA", 10, 35),
            iv("chrB", 1, 90),
        ]
    }

    #[rstest]
    fn test_sort_by_start_then_end(fragments: Vec<GenomicInterval>) {
        let rc = sort_fragments(fragments);

        let chroms: Vec<&String> = rc.iter_chroms().collect();
        assert_eq!(chroms, vec!["chrA", "chrB"]);
        assert_eq!(
            coords(&rc, "chrA"),
            vec![(5, 100), (10, 20), (10, 35), (10, 50)]
        );
        assert_eq!(coords(&rc, "chrB"), vec![(1, 90), (30, 90)]);
    }

    #[rstest]
    fn test_sort_is_idempotent(fragments: Vec<GenomicInterval>) {
        let once = sort_fragments(fragments);
        let twice = canonicalize(once.clone());
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_sort_empty() {
        assert!(sort_fragments(vec![]).is_empty());
    }
}
