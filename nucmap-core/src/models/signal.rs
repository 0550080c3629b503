use crate::models::GenomicInterval;

///
/// Dense read coverage over positions `1..=len()`.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageSignal {
    // values[i] holds the coverage of position i + 1
    values: Vec<u32>,
}

impl CoverageSignal {
    ///
    /// Count, for every position from 1 up to the largest end, how many
    /// intervals cover it. Intervals are assumed to sit on the same reference.
    ///
    /// Uses a difference array, so the cost is linear in the number of
    /// intervals plus the signal length.
    ///
    pub fn from_intervals<'a, I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = &'a GenomicInterval>,
    {
        let mut deltas: Vec<i64> = Vec::new();

        for interval in intervals {
            let needed = interval.end as usize + 1;
            if deltas.len() < needed {
                deltas.resize(needed, 0);
            }
            deltas[interval.start as usize - 1] += 1;
            deltas[interval.end as usize] -= 1;
        }

        // the trailing slot only ever holds the closing delta of the last interval
        deltas.pop();

        let mut running: i64 = 0;
        let values = deltas
            .into_iter()
            .map(|delta| {
                running += delta;
                running as u32
            })
            .collect();

        CoverageSignal { values }
    }

    pub fn from_values(values: Vec<u32>) -> Self {
        CoverageSignal { values }
    }

    ///
    /// Coverage at a 1-based position. Positions outside the signal are 0.
    ///
    pub fn get(&self, pos: usize) -> u32 {
        if pos == 0 {
            return 0;
        }
        self.values.get(pos - 1).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

///
/// log2 fold-change between two coverage signals.
///
/// Positions where either coverage is zero hold `None` (the Missing value)
/// instead of an infinite or NaN ratio.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatioSignal {
    values: Vec<Option<f64>>,
}

impl RatioSignal {
    ///
    /// `log2(numerator) - log2(denominator)` at every position. The shorter
    /// signal is treated as zero past its end, so the result spans the longer one.
    ///
    pub fn log2_ratio(numerator: &CoverageSignal, denominator: &CoverageSignal) -> Self {
        let len = numerator.len().max(denominator.len());
        let values = (1..=len)
            .map(|pos| {
                let num = numerator.get(pos);
                let den = denominator.get(pos);
                if num == 0 || den == 0 {
                    None
                } else {
                    Some((num as f64).log2() - (den as f64).log2())
                }
            })
            .collect();

        RatioSignal { values }
    }

    ///
    /// Ratio at a 1-based position, `None` where it is Missing.
    ///
    pub fn get(&self, pos: usize) -> Option<f64> {
        if pos == 0 {
            return None;
        }
        self.values.get(pos - 1).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}
