//! # Synthetic nucleosome maps.
//!
//! Generates reads for a map of well-positioned nucleosomes (regularly spaced,
//! low jitter) mixed with fuzzy ones (random placement, high jitter), for
//! benchmarking nucleosome calling. Optionally adds a random control sample and
//! the log2 ratio between both coverages, which mimics a tiling-array signal.
//!
//! Given a seed, the whole map is reproducible bit for bit.
//!
//! # Example
//!
//! ```no_run
//! use nucmap_synth::{SyntheticMapConfig, synthetic_nuc_map};
//!
//! let config = SyntheticMapConfig { seed: Some(1), as_ratio: true, ..Default::default() };
//! let map = synthetic_nuc_map(config).unwrap();
//! println!("{}", map.reads);
//! ```
pub mod config;
pub mod consts;
pub mod control;
pub mod coverage;
pub mod errors;
pub mod generator;
pub mod truth;
pub mod writing;

use std::path::Path;

use anyhow::Context;

use nucmap_core::{CoverageSignal, ReadCollection, RatioSignal};

// re-exports
pub use config::SyntheticMapConfig;
pub use coverage::{CoverageRatio, compute_coverage_ratio};
pub use errors::{Result, SyntheticMapError};
pub use generator::{SyntheticReadGenerator, SyntheticReads};
pub use truth::{GroundTruth, NucleosomeCategory, NucleosomeTruth};

use crate::consts::*;
use crate::writing::{write_coverage, write_ground_truth, write_ratio};

///
/// Everything produced by one synthetic map run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticMap {
    pub config: SyntheticMapConfig,
    /// well-positioned and fuzzy reads, in draw order
    pub reads: ReadCollection,
    pub control: Option<ReadCollection>,
    pub ground_truth: GroundTruth,
    pub syn_coverage: CoverageSignal,
    pub ctrl_coverage: Option<CoverageSignal>,
    pub ratio: Option<RatioSignal>,
}

impl SyntheticMap {
    pub fn seed(&self) -> u64 {
        self.ground_truth.seed
    }

    ///
    /// Save reads, ground truth and signals into a directory.
    ///
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> anyhow::Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {:?}", dir))?;

        self.reads.to_bed(dir.join(READS_FILE))?;
        write_ground_truth(&dir.join(GROUND_TRUTH_FILE), &self.ground_truth)?;
        write_coverage(&dir.join(COVERAGE_FILE), &self.syn_coverage)?;

        if let Some(control) = &self.control {
            control.to_bed(dir.join(CONTROL_FILE))?;
        }
        if let Some(ctrl_coverage) = &self.ctrl_coverage {
            write_coverage(&dir.join(CONTROL_COVERAGE_FILE), ctrl_coverage)?;
        }
        if let Some(ratio) = &self.ratio {
            write_ratio(&dir.join(RATIO_FILE), ratio)?;
        }

        log::info!("Synthetic map written to {:?}", dir);

        Ok(())
    }
}

///
/// Generate a synthetic nucleosome map.
///
/// The configuration is validated before anything is drawn. When `as_ratio`
/// is set, a control sample is drawn from the same random stream right after
/// the nucleosome reads and the coverage ratio is computed.
///
pub fn synthetic_nuc_map(config: SyntheticMapConfig) -> Result<SyntheticMap> {
    let mut generator = SyntheticReadGenerator::new(config)?;
    let synthetic = generator.generate()?;

    let control = match generator.config().as_ratio {
        true => Some(generator.control_sample(&synthetic.reads)?),
        false => None,
    };

    let CoverageRatio {
        syn_coverage,
        ctrl_coverage,
        ratio,
    } = compute_coverage_ratio(&synthetic.reads, control.as_deref());

    Ok(SyntheticMap {
        config: generator.config().clone(),
        reads: ReadCollection::from(synthetic.reads),
        control: control.map(ReadCollection::from),
        ground_truth: synthetic.ground_truth,
        syn_coverage,
        ctrl_coverage,
        ratio,
    })
}
