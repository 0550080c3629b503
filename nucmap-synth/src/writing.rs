use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use nucmap_core::utils::get_dynamic_writer;
use nucmap_core::{CoverageSignal, RatioSignal};

use crate::consts::MISSING_VALUE;
use crate::truth::GroundTruth;

/// Write the ground truth as pretty printed json
pub fn write_ground_truth(path: &Path, truth: &GroundTruth) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    serde_json::to_writer_pretty(&mut writer, truth)
        .with_context(|| format!("Failed to write ground truth to {:?}", path))?;
    writer.finish()?;
    Ok(())
}

/// Write a coverage signal as `position\tcoverage` lines, 1-based
pub fn write_coverage(path: &Path, coverage: &CoverageSignal) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    for (idx, value) in coverage.values().iter().enumerate() {
        writeln!(writer, "{}\t{}", idx + 1, value)?;
    }
    writer.finish()?;
    Ok(())
}

/// Write a ratio signal as `position\tratio` lines, with `NA` at Missing positions
pub fn write_ratio(path: &Path, ratio: &RatioSignal) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    for (idx, value) in ratio.values().iter().enumerate() {
        match value {
            Some(v) => writeln!(writer, "{}\t{}", idx + 1, v)?,
            None => writeln!(writer, "{}\t{}", idx + 1, MISSING_VALUE)?,
        }
    }
    writer.finish()?;
    Ok(())
}
