use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;

use crate::models::{CoverageSignal, GenomicInterval};
use crate::utils::get_dynamic_writer;

///
/// ReadCollection struct, the reads of one sample grouped by reference name.
///
/// Reference names iterate in lexicographic order. The order of reads inside a
/// reference is whatever the builder chose: the fragment pipeline hands in
/// groups sorted by start (ties by end), the synthetic generator keeps draw order.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadCollection {
    reads: BTreeMap<String, Vec<GenomicInterval>>,
}

impl From<Vec<GenomicInterval>> for ReadCollection {
    ///
    /// Group intervals by reference, keeping their relative input order.
    ///
    fn from(intervals: Vec<GenomicInterval>) -> Self {
        let mut reads: BTreeMap<String, Vec<GenomicInterval>> = BTreeMap::new();
        for interval in intervals {
            reads.entry(interval.chr.clone()).or_default().push(interval);
        }
        ReadCollection { reads }
    }
}

impl<'a> IntoIterator for &'a ReadCollection {
    type Item = &'a GenomicInterval;
    type IntoIter = Box<dyn Iterator<Item = &'a GenomicInterval> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl ReadCollection {
    ///
    /// Build a collection from groups that are already keyed by reference name.
    /// Empty groups are dropped.
    ///
    pub fn from_groups(groups: BTreeMap<String, Vec<GenomicInterval>>) -> Self {
        let reads = groups
            .into_iter()
            .filter(|(_, group)| !group.is_empty())
            .collect();
        ReadCollection { reads }
    }

    ///
    /// Take the collection apart, e.g. to build a re-ordered copy.
    ///
    pub fn into_groups(self) -> BTreeMap<String, Vec<GenomicInterval>> {
        self.reads
    }

    ///
    /// Iterate reference names in lexicographic order
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &String> {
        self.reads.keys()
    }

    ///
    /// Reads located on a specific reference. Unknown references yield an empty slice.
    ///
    pub fn chrom_reads(&self, chr: &str) -> &[GenomicInterval] {
        self.reads.get(chr).map(Vec::as_slice).unwrap_or(&[])
    }

    ///
    /// Iterate every read, reference by reference.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &GenomicInterval> {
        self.reads.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.reads.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_start(&self) -> Option<u32> {
        self.iter().map(|r| r.start).max()
    }

    pub fn max_end(&self) -> Option<u32> {
        self.iter().map(|r| r.end).max()
    }

    ///
    /// Per-reference coverage of the collection.
    ///
    pub fn coverage(&self) -> BTreeMap<String, CoverageSignal> {
        self.reads
            .iter()
            .map(|(chr, group)| (chr.clone(), CoverageSignal::from_intervals(group)))
            .collect()
    }

    ///
    /// Save the collection to disk as a bed file. A `.gz` extension gets
    /// a gzip'd file.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn to_bed<T: AsRef<Path>>(&self, path: T) -> anyhow::Result<()> {
        let mut writer = get_dynamic_writer(path.as_ref())?;
        for read in self.iter() {
            writeln!(writer, "{}", read.as_string())?;
        }
        writer.finish()?;
        Ok(())
    }
}

impl Display for ReadCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReadCollection with {} reads on {} references.",
            self.len(),
            self.reads.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Read;

    use crate::utils::get_dynamic_reader;

    fn iv(chr: &str, start: i64, end: i64) -> GenomicInterval {
        GenomicInterval::new(chr, start, end, None).unwrap()
    }

    #[fixture]
    fn collection() -> ReadCollection {
        ReadCollection::from(vec![
            iv("chr2", 50, 60),
            iv("chr10", 5, 20),
            iv("chr2", 10, 30),
            iv("chr1", 1, 4),
        ])
    }

    #[rstest]
    fn test_chroms_are_lexicographic(collection: ReadCollection) {
        let chroms: Vec<&String> = collection.iter_chroms().collect();
        assert_eq!(chroms, vec!["chr1", "chr10", "chr2"]);
    }

    #[rstest]
    fn test_input_order_kept_within_chrom(collection: ReadCollection) {
        let starts: Vec<u32> = collection.chrom_reads("chr2").iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![50, 10]);
        assert!(collection.chrom_reads("chrX").is_empty());
    }

    #[rstest]
    fn test_len_and_extremes(collection: ReadCollection) {
        assert_eq!(collection.len(), 4);
        assert!(!collection.is_empty());
        assert_eq!(collection.max_start(), Some(50));
        assert_eq!(collection.max_end(), Some(60));
        assert!(ReadCollection::default().is_empty());
        assert_eq!(ReadCollection::default().max_start(), None);
    }

    #[rstest]
    fn test_from_groups_drops_empty() {
        let mut groups = BTreeMap::new();
        groups.insert("chr1".to_string(), vec![iv("chr1", 1, 2)]);
        groups.insert("chr2".to_string(), vec![]);
        let rc = ReadCollection::from_groups(groups);
        assert_eq!(rc.iter_chroms().count(), 1);
    }

    #[rstest]
    fn test_coverage_per_chrom(collection: ReadCollection) {
        let cov = collection.coverage();
        assert_eq!(cov["chr1"].len(), 4);
        assert_eq!(cov["chr2"].get(20), 1);
        assert_eq!(cov["chr2"].get(40), 0);
    }

    #[rstest]
    fn test_save_bed_gz(collection: ReadCollection) {
        let tempdir = tempfile::tempdir().unwrap();
        let out = tempdir.path().join("reads.bed.gz");
        collection.to_bed(&out).unwrap();

        let mut content = String::new();
        get_dynamic_reader(&out)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "chr1\t0\t4");
    }
}
