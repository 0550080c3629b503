//! Synthetic nucleosome read generation.
//!
//! All randomness comes from one [`StdRng`] owned by the generator and seeded
//! once. Draws happen in a fixed order, so a given seed always reproduces the
//! same map:
//!
//! 1. well-positioned centers are laid out every `nuc_len + lin_len` bases (no draw),
//! 2. one read count per well-positioned nucleosome,
//! 3. `wp_del` deletion indices,
//! 4. one jitter per well-positioned read,
//! 5. one center per fuzzy nucleosome,
//! 6. one read count per fuzzy nucleosome,
//! 7. one jitter per fuzzy read.
//!
//! A control sample, when requested, continues on the same stream
//! (see [`SyntheticReadGenerator::control_sample`]).
//!
//! Deletion indices are drawn with replacement and index 0 selects nothing,
//! so fewer than `wp_del` nucleosomes may end up deleted. This is kept as is:
//! changing it would change every map generated from an existing seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nucmap_core::GenomicInterval;

use crate::config::SyntheticMapConfig;
use crate::errors::Result;
use crate::truth::{GroundTruth, NucleosomeCategory, NucleosomeTruth};

///
/// Uniform real draw on `[low, high)`, rounded to the nearest integer.
///
pub(crate) fn runif_round<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> i64 {
    (low + (high - low) * rng.random::<f64>()).round() as i64
}

/// Reads produced by one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticReads {
    /// well-positioned reads followed by fuzzy reads
    pub reads: Vec<GenomicInterval>,
    /// index of the first fuzzy read in `reads`
    pub n_well_positioned: usize,
    pub ground_truth: GroundTruth,
}

pub struct SyntheticReadGenerator {
    pub(crate) config: SyntheticMapConfig,
    seed: u64,
    pub(crate) rng: StdRng,
}

impl SyntheticReadGenerator {
    ///
    /// Validate the configuration and seed the random stream. Without a seed
    /// in the config one is drawn from the thread rng and kept, so the run can
    /// still be reproduced from [`SyntheticReadGenerator::seed`].
    ///
    pub fn new(config: SyntheticMapConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("Seeding synthetic read generator with {}", seed);

        Ok(SyntheticReadGenerator {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SyntheticMapConfig {
        &self.config
    }

    fn draw_counts(&mut self, n: i64) -> Vec<u32> {
        let max_cover = self.config.max_cover as f64;
        (0..n)
            .map(|_| runif_round(&mut self.rng, 1.0, max_cover) as u32)
            .collect()
    }

    ///
    /// Turn each center into `count` reads of width `nuc_len`, each shifted by
    /// an integer jitter in `[-variance, variance]`. Starts are clamped to 1.
    ///
    fn expand(&mut self, centers: &[i64], counts: &[u32], variance: i64) -> Result<Vec<GenomicInterval>> {
        let total: usize = counts.iter().map(|&c| c as usize).sum();
        let mut reads = Vec::with_capacity(total);
        let variance = variance as f64;

        for (&center, &count) in centers.iter().zip(counts) {
            for _ in 0..count {
                let jitter = runif_round(&mut self.rng, -variance, variance);
                let start = (center + jitter).max(1);
                reads.push(GenomicInterval::from_start_width(
                    self.config.chrom.as_str(),
                    start,
                    self.config.nuc_len,
                    None,
                )?);
            }
        }

        Ok(reads)
    }

    fn truth(
        category: NucleosomeCategory,
        centers: &[i64],
        counts: &[u32],
        variance: i64,
    ) -> Vec<NucleosomeTruth> {
        centers
            .iter()
            .zip(counts)
            .map(|(&center, &reads)| NucleosomeTruth {
                category,
                center,
                reads,
                variance,
            })
            .collect()
    }

    ///
    /// Generate the well-positioned and fuzzy reads.
    ///
    pub fn generate(&mut self) -> Result<SyntheticReads> {
        let wp_num = self.config.wp_num;
        let spacing = self.config.spacing();

        // 1. nominal centers
        let wp_centers: Vec<i64> = (0..wp_num).map(|i| i * spacing + 1).collect();

        // 2. read counts
        let mut wp_counts = self.draw_counts(wp_num);

        // 3. deletions, sampled with replacement
        for _ in 0..self.config.wp_del {
            let idx = runif_round(&mut self.rng, 0.0, wp_num as f64);
            if idx >= 1 {
                wp_counts[idx as usize - 1] = 0;
            }
        }
        let deleted = wp_counts.iter().filter(|&&c| c == 0).count();
        log::info!(
            "{} of {} well-positioned nucleosomes deleted ({} deletion draws)",
            deleted,
            wp_num,
            self.config.wp_del
        );

        // 4. well-positioned reads
        let wp_var = self.config.wp_var;
        let mut reads = self.expand(&wp_centers, &wp_counts, wp_var)?;
        let n_well_positioned = reads.len();

        // 5. fuzzy centers, anywhere over the well-positioned span
        let span = (wp_num * spacing) as f64;
        let fuz_centers: Vec<i64> = (0..self.config.fuz_num)
            .map(|_| runif_round(&mut self.rng, 1.0, span))
            .collect();

        // 6. fuzzy read counts
        let fuz_counts = self.draw_counts(self.config.fuz_num);

        // 7. fuzzy reads
        let fuz_var = self.config.fuz_var;
        reads.extend(self.expand(&fuz_centers, &fuz_counts, fuz_var)?);

        log::info!(
            "Generated {} well-positioned and {} fuzzy reads",
            n_well_positioned,
            reads.len() - n_well_positioned
        );

        let ground_truth = GroundTruth {
            seed: self.seed,
            well_positioned: Self::truth(
                NucleosomeCategory::WellPositioned,
                &wp_centers,
                &wp_counts,
                wp_var,
            ),
            fuzzy: Self::truth(NucleosomeCategory::Fuzzy, &fuz_centers, &fuz_counts, fuz_var),
        };

        Ok(SyntheticReads {
            reads,
            n_well_positioned,
            ground_truth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn config(wp_num: i64, wp_del: i64, fuz_num: i64) -> SyntheticMapConfig {
        SyntheticMapConfig {
            wp_num,
            wp_del,
            fuz_num,
            seed: Some(1),
            ..Default::default()
        }
    }

    #[rstest]
    fn test_runif_round_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let v = runif_round(&mut rng, -5.0, 5.0);
            assert!((-5..=5).contains(&v));
        }
        assert_eq!(runif_round(&mut rng, 4.0, 4.0), 4);
    }

    #[rstest]
    fn test_well_positioned_only() {
        let mut generator = SyntheticReadGenerator::new(config(50, 0, 0)).unwrap();
        let out = generator.generate().unwrap();
        let truth = &out.ground_truth;

        assert_eq!(truth.well_positioned.len(), 50);
        assert!(truth.fuzzy.is_empty());
        assert_eq!(out.n_well_positioned, out.reads.len());
        for (i, nuc) in truth.well_positioned.iter().enumerate() {
            assert_eq!(nuc.center, i as i64 * 167 + 1);
            assert!((1..=20).contains(&nuc.reads));
        }
        assert_eq!(out.reads.len() as u64, truth.total_reads());
    }

    #[rstest]
    fn test_reads_have_nucleosome_width_and_bounded_jitter() {
        let mut generator = SyntheticReadGenerator::new(config(20, 0, 0)).unwrap();
        let out = generator.generate().unwrap();

        let mut idx = 0;
        for nuc in &out.ground_truth.well_positioned {
            for read in &out.reads[idx..idx + nuc.reads as usize] {
                assert_eq!(read.width(), 147);
                assert_eq!(read.chr, "chr1");
                let offset = read.start as i64 - nuc.center;
                // the first nucleosome's reads may be clamped at 1
                assert!(offset.abs() <= 20);
            }
            idx += nuc.reads as usize;
        }
    }

    #[rstest]
    fn test_jittered_starts_are_clamped_to_one() {
        let mut clamped = 0;
        for seed in 0..20u64 {
            let cfg = SyntheticMapConfig {
                wp_num: 1,
                wp_del: 0,
                wp_var: 100,
                fuz_num: 0,
                seed: Some(seed),
                ..Default::default()
            };
            let out = SyntheticReadGenerator::new(cfg).unwrap().generate().unwrap();

            // replay the stream: one count, then one jitter per read around center 1
            let mut rng = StdRng::seed_from_u64(seed);
            let count = runif_round(&mut rng, 1.0, 20.0);
            let expected: Vec<(u32, u32)> = (0..count)
                .map(|_| {
                    let start = (1 + runif_round(&mut rng, -100.0, 100.0)).max(1) as u32;
                    (start, start + 146)
                })
                .collect();

            let observed: Vec<(u32, u32)> = out.reads.iter().map(|r| (r.start, r.end)).collect();
            assert_eq!(observed, expected);
            clamped += observed.iter().filter(|(start, _)| *start == 1).count();
        }
        assert!(clamped > 0);
    }

    #[rstest]
    fn test_deletion_index_zero_selects_nothing() {
        let mut zero_draws = 0;
        for seed in 0..50u64 {
            let cfg = SyntheticMapConfig {
                wp_num: 3,
                wp_del: 3,
                fuz_num: 0,
                seed: Some(seed),
                ..Default::default()
            };
            let out = SyntheticReadGenerator::new(cfg).unwrap().generate().unwrap();

            // replay the stream: three counts, then three deletion indices in [0, 3]
            let mut rng = StdRng::seed_from_u64(seed);
            let mut counts: Vec<u32> = (0..3).map(|_| runif_round(&mut rng, 1.0, 20.0) as u32).collect();
            for _ in 0..3 {
                match runif_round(&mut rng, 0.0, 3.0) {
                    0 => zero_draws += 1,
                    idx => counts[idx as usize - 1] = 0,
                }
            }

            let observed: Vec<u32> = out.ground_truth.well_positioned.iter().map(|n| n.reads).collect();
            assert_eq!(observed, counts);
        }
        assert!(zero_draws > 0);
    }

    #[rstest]
    fn test_same_seed_same_reads() {
        let a = SyntheticReadGenerator::new(config(50, 10, 20))
            .unwrap()
            .generate()
            .unwrap();
        let b = SyntheticReadGenerator::new(config(50, 10, 20))
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ground_truth.zeroed_centers(), b.ground_truth.zeroed_centers());
        assert!(a.ground_truth.zeroed_centers().len() <= 10);
    }

    #[rstest]
    fn test_different_seed_different_reads() {
        let mut other = config(50, 10, 20);
        other.seed = Some(2);
        let a = SyntheticReadGenerator::new(config(50, 10, 20))
            .unwrap()
            .generate()
            .unwrap();
        let b = SyntheticReadGenerator::new(other).unwrap().generate().unwrap();
        assert_ne!(a.reads, b.reads);
    }

    #[rstest]
    fn test_unseeded_generator_records_its_seed() {
        let mut cfg = config(10, 0, 5);
        cfg.seed = None;
        let mut generator = SyntheticReadGenerator::new(cfg.clone()).unwrap();
        let out = generator.generate().unwrap();

        cfg.seed = Some(generator.seed());
        let replay = SyntheticReadGenerator::new(cfg).unwrap().generate().unwrap();
        assert_eq!(out, replay);
    }

    #[rstest]
    fn test_fuzzy_centers_within_span() {
        let mut generator = SyntheticReadGenerator::new(config(30, 0, 40)).unwrap();
        let out = generator.generate().unwrap();
        assert_eq!(out.ground_truth.fuzzy.len(), 40);
        for nuc in &out.ground_truth.fuzzy {
            assert!(nuc.center >= 1 && nuc.center <= 30 * 167);
            assert!(nuc.reads >= 1);
            assert_eq!(nuc.category, NucleosomeCategory::Fuzzy);
        }
        assert_eq!(
            (out.reads.len() - out.n_well_positioned) as u64,
            out.ground_truth.fuzzy.iter().map(|n| n.reads as u64).sum::<u64>()
        );
    }

    #[rstest]
    fn test_invalid_config_fails_before_drawing() {
        let result = SyntheticReadGenerator::new(SyntheticMapConfig {
            max_cover: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[rstest]
    fn test_empty_map() {
        let mut generator = SyntheticReadGenerator::new(config(0, 0, 0)).unwrap();
        let out = generator.generate().unwrap();
        assert!(out.reads.is_empty());
    }
}
