pub const SYNTHETIC_CMD: &str = "synthetic";

pub const DEFAULT_WP_NUM: i64 = 100;
pub const DEFAULT_WP_DEL: i64 = 10;
pub const DEFAULT_WP_VAR: i64 = 20;
pub const DEFAULT_FUZ_NUM: i64 = 50;
pub const DEFAULT_FUZ_VAR: i64 = 50;
pub const DEFAULT_MAX_COVER: i64 = 20;
pub const DEFAULT_NUC_LEN: i64 = 147;
pub const DEFAULT_LIN_LEN: i64 = 20;
pub const DEFAULT_CHROM: &str = "chr1";

/// width range of control ("naked DNA") fragments
pub const CONTROL_MIN_WIDTH: i64 = 50;
pub const CONTROL_MAX_WIDTH: i64 = 250;

// output file names
pub const READS_FILE: &str = "reads.bed";
pub const CONTROL_FILE: &str = "control.bed";
pub const GROUND_TRUTH_FILE: &str = "ground_truth.json";
pub const COVERAGE_FILE: &str = "coverage.tsv";
pub const CONTROL_COVERAGE_FILE: &str = "control_coverage.tsv";
pub const RATIO_FILE: &str = "ratio.tsv";
pub const MISSING_VALUE: &str = "NA";
