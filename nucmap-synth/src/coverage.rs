use nucmap_core::{CoverageSignal, GenomicInterval, RatioSignal};

///
/// Coverage of a synthetic sample and, when a control was drawn, the control
/// coverage and the log2 ratio between the two.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRatio {
    pub syn_coverage: CoverageSignal,
    pub ctrl_coverage: Option<CoverageSignal>,
    pub ratio: Option<RatioSignal>,
}

///
/// Compute coverage for the synthetic reads and, if given, the control reads.
///
/// The ratio is `log2(syn) - log2(ctrl)` per position; positions where either
/// sample has no coverage are Missing (`None`).
///
pub fn compute_coverage_ratio(
    reads: &[GenomicInterval],
    control: Option<&[GenomicInterval]>,
) -> CoverageRatio {
    let syn_coverage = CoverageSignal::from_intervals(reads);
    let ctrl_coverage = control.map(|c| CoverageSignal::from_intervals(c));

    let ratio = ctrl_coverage
        .as_ref()
        .map(|ctrl| RatioSignal::log2_ratio(&syn_coverage, ctrl));

    if let Some(ratio) = &ratio {
        log::debug!(
            "Ratio over {} positions, {} missing",
            ratio.len(),
            ratio.missing_count()
        );
    }

    CoverageRatio {
        syn_coverage,
        ctrl_coverage,
        ratio,
    }
}
