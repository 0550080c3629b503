use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NucleosomeCategory {
    WellPositioned,
    Fuzzy,
}

///
/// One generated nucleosome before its reads were jittered.
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NucleosomeTruth {
    pub category: NucleosomeCategory,
    /// nominal leftmost base of the nucleosome, before jitter
    pub center: i64,
    /// number of reads drawn for it; 0 for deleted nucleosomes
    pub reads: u32,
    /// maximum jitter applied to its reads
    pub variance: i64,
}

///
/// What the generator actually placed, for scoring peak calls against.
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct GroundTruth {
    /// seed the random stream was started from
    pub seed: u64,
    pub well_positioned: Vec<NucleosomeTruth>,
    pub fuzzy: Vec<NucleosomeTruth>,
}

impl GroundTruth {
    ///
    /// Centers of well-positioned nucleosomes whose reads were deleted.
    ///
    pub fn zeroed_centers(&self) -> Vec<i64> {
        self.well_positioned
            .iter()
            .filter(|n| n.reads == 0)
            .map(|n| n.center)
            .collect()
    }

    pub fn total_reads(&self) -> u64 {
        self.well_positioned
            .iter()
            .chain(self.fuzzy.iter())
            .map(|n| n.reads as u64)
            .sum()
    }
}
