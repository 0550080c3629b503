use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use nucmap_synth::consts::*;
use nucmap_synth::*;

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/synthetic")
        .join(file_name)
}

#[fixture]
fn ratio_config() -> SyntheticMapConfig {
    SyntheticMapConfig {
        wp_num: 50,
        wp_del: 10,
        fuz_num: 20,
        seed: Some(1),
        as_ratio: true,
        ..Default::default()
    }
}

#[rstest]
fn test_well_positioned_map_without_deletions() {
    let config = SyntheticMapConfig {
        wp_num: 50,
        wp_del: 0,
        fuz_num: 0,
        seed: Some(1),
        ..Default::default()
    };
    let map = synthetic_nuc_map(config).unwrap();

    let centers: Vec<i64> = map
        .ground_truth
        .well_positioned
        .iter()
        .map(|n| n.center)
        .collect();
    assert_eq!(centers.len(), 50);
    assert!(centers.windows(2).all(|w| w[1] - w[0] == 147 + 20));
    assert!(
        map.ground_truth
            .well_positioned
            .iter()
            .all(|n| (1..=20).contains(&n.reads))
    );
    assert!(map.ground_truth.fuzzy.is_empty());
    assert!(map.control.is_none());
    assert!(map.ratio.is_none());
    assert_eq!(map.reads.len() as u64, map.ground_truth.total_reads());
}

#[rstest]
fn test_identical_seeds_give_identical_maps(ratio_config: SyntheticMapConfig) {
    let a = synthetic_nuc_map(ratio_config.clone()).unwrap();
    let b = synthetic_nuc_map(ratio_config).unwrap();

    assert_eq!(a.reads, b.reads);
    assert_eq!(a.control, b.control);
    assert_eq!(a.ground_truth, b.ground_truth);
    assert_eq!(a.ground_truth.zeroed_centers(), b.ground_truth.zeroed_centers());
    assert_eq!(a.syn_coverage, b.syn_coverage);
    assert_eq!(a.ratio, b.ratio);
}

#[rstest]
fn test_deletions_zero_at_most_wp_del_centers(ratio_config: SyntheticMapConfig) {
    let map = synthetic_nuc_map(ratio_config).unwrap();
    let zeroed = map.ground_truth.zeroed_centers();
    assert!(zeroed.len() <= 10);

    // no reads come from a deleted nucleosome
    let wp_reads: u64 = map
        .ground_truth
        .well_positioned
        .iter()
        .map(|n| n.reads as u64)
        .sum();
    let fuzzy_reads: u64 = map.ground_truth.fuzzy.iter().map(|n| n.reads as u64).sum();
    assert_eq!(map.reads.len() as u64, wp_reads + fuzzy_reads);
}

#[rstest]
fn test_ratio_never_infinite(ratio_config: SyntheticMapConfig) {
    let map = synthetic_nuc_map(ratio_config).unwrap();
    let ratio = map.ratio.as_ref().unwrap();
    let ctrl = map.ctrl_coverage.as_ref().unwrap();

    assert_eq!(map.control.as_ref().unwrap().len(), map.reads.len());
    assert_eq!(ratio.len(), map.syn_coverage.len().max(ctrl.len()));

    for pos in 1..=ratio.len() {
        let syn = map.syn_coverage.get(pos);
        let ctl = ctrl.get(pos);
        match ratio.get(pos) {
            Some(v) => {
                assert!(v.is_finite());
                assert!(syn > 0 && ctl > 0);
            }
            None => assert!(syn == 0 || ctl == 0),
        }
    }
}

#[rstest]
fn test_invalid_config_is_a_configuration_error() {
    let config = SyntheticMapConfig {
        wp_num: 3,
        wp_del: 9,
        ..Default::default()
    };
    assert!(matches!(
        synthetic_nuc_map(config),
        Err(SyntheticMapError::Configuration(_))
    ));
}

#[rstest]
fn test_config_file_drives_the_map() {
    let config = SyntheticMapConfig::try_from(get_test_path("config.toml").as_path()).unwrap();
    let map = synthetic_nuc_map(config).unwrap();
    assert_eq!(map.seed(), 1);
    assert!(map.ratio.is_some());
    assert_eq!(map.ground_truth.fuzzy.len(), 25);
}

#[rstest]
fn test_write_to_dir(ratio_config: SyntheticMapConfig) {
    let tempdir = tempfile::tempdir().unwrap();
    let out = tempdir.path().join("map");

    let map = synthetic_nuc_map(ratio_config).unwrap();
    map.write_to_dir(&out).unwrap();

    for file in [
        READS_FILE,
        CONTROL_FILE,
        GROUND_TRUTH_FILE,
        COVERAGE_FILE,
        CONTROL_COVERAGE_FILE,
        RATIO_FILE,
    ] {
        assert!(out.join(file).exists(), "{} missing", file);
    }

    let reads = std::fs::read_to_string(out.join(READS_FILE)).unwrap();
    assert_eq!(reads.lines().count(), map.reads.len());

    let ratio = std::fs::read_to_string(out.join(RATIO_FILE)).unwrap();
    assert_eq!(ratio.lines().count(), map.ratio.as_ref().unwrap().len());
}
