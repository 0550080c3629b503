use nucmap_core::GenomicInterval;

use crate::consts::{CONTROL_MAX_WIDTH, CONTROL_MIN_WIDTH};
use crate::errors::Result;
use crate::generator::{SyntheticReadGenerator, runif_round};

impl SyntheticReadGenerator {
    ///
    /// Draw a randomly fragmented background sample ("naked DNA") with as many
    /// reads as `reads`.
    ///
    /// Continues the generator's random stream: all starts are drawn first,
    /// uniform over `[1, max start of reads]`, then all widths, uniform over
    /// `[50, 250]`. Call it right after [`SyntheticReadGenerator::generate`]
    /// to keep runs reproducible.
    ///
    pub fn control_sample(&mut self, reads: &[GenomicInterval]) -> Result<Vec<GenomicInterval>> {
        let Some(max_start) = reads.iter().map(|r| r.start).max() else {
            return Ok(Vec::new());
        };
        let n = reads.len();

        let starts: Vec<i64> = (0..n)
            .map(|_| runif_round(&mut self.rng, 1.0, max_start as f64))
            .collect();
        let widths: Vec<i64> = (0..n)
            .map(|_| {
                runif_round(
                    &mut self.rng,
                    CONTROL_MIN_WIDTH as f64,
                    CONTROL_MAX_WIDTH as f64,
                )
            })
            .collect();

        let control = starts
            .into_iter()
            .zip(widths)
            .map(|(start, width)| {
                GenomicInterval::from_start_width(self.config.chrom.as_str(), start, width, None)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        log::info!("Generated {} control reads", control.len());

        Ok(control)
    }
}
