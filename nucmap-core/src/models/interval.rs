use std::fmt::{self, Display};

use crate::errors::{ReadCollectionError, Result};
use crate::models::Strand;

///
/// A read or fragment on one reference sequence.
///
/// Coordinates are 1-based and inclusive on both ends, so a read covering a
/// single base has `start == end`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenomicInterval {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub strand: Option<Strand>,
}

impl GenomicInterval {
    ///
    /// Build an interval, checking `1 <= start <= end`.
    ///
    pub fn new<S: Into<String>>(chr: S, start: i64, end: i64, strand: Option<Strand>) -> Result<Self> {
        let chr = chr.into();
        if start < 1 || end < start || end > u32::MAX as i64 {
            return Err(ReadCollectionError::InvalidInterval { chr, start, end });
        }

        Ok(GenomicInterval {
            chr,
            start: start as u32,
            end: end as u32,
            strand,
        })
    }

    ///
    /// Build an interval from its leftmost base and its width.
    ///
    pub fn from_start_width<S: Into<String>>(
        chr: S,
        start: i64,
        width: i64,
        strand: Option<Strand>,
    ) -> Result<Self> {
        GenomicInterval::new(chr, start, start + width - 1, strand)
    }

    ///
    /// Number of bases covered by the interval
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    ///
    /// Get the BED line for this interval (0-based, half-open). The strand
    /// is written as a sixth column when present.
    ///
    pub fn as_string(&self) -> String {
        match self.strand {
            Some(strand) => format!(
                "{}\t{}\t{}\t.\t0\t{}",
                self.chr,
                self.start - 1,
                self.end,
                strand
            ),
            None => format!("{}\t{}\t{}", self.chr, self.start - 1, self.end),
        }
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_width_is_inclusive() {
        let iv = GenomicInterval::new("chr1", 10, 10, None).unwrap();
        assert_eq!(iv.width(), 1);

        let iv = GenomicInterval::from_start_width("chr1", 1, 147, None).unwrap();
        assert_eq!(iv.end, 147);
        assert_eq!(iv.width(), 147);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(-5, 10)]
    #[case(11, 10)]
    fn test_invalid_intervals(#[case] start: i64, #[case] end: i64) {
        let result = GenomicInterval::new("chr1", start, end, None);
        assert!(matches!(
            result,
            Err(ReadCollectionError::InvalidInterval { .. })
        ));
    }

    #[rstest]
    fn test_as_string() {
        let iv = GenomicInterval::new("chr2", 101, 250, Some(Strand::Reverse)).unwrap();
        assert_eq!(iv.as_string(), "chr2\t100\t250\t.\t0\t-");

        let iv = GenomicInterval::new("chr2", 101, 250, None).unwrap();
        assert_eq!(iv.to_string(), "chr2\t100\t250");
    }
}
