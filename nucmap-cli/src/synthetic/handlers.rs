use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use nucmap_synth::{SyntheticMapConfig, synthetic_nuc_map};

///
/// Build the map configuration: the config file (or defaults) first, then any
/// parameter given on the command line.
///
pub fn config_from_matches(matches: &ArgMatches) -> Result<SyntheticMapConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SyntheticMapConfig::try_from(Path::new(path))?,
        None => SyntheticMapConfig::default(),
    };

    let overrides: [(&str, &mut i64); 8] = [
        ("wp-num", &mut config.wp_num),
        ("wp-del", &mut config.wp_del),
        ("wp-var", &mut config.wp_var),
        ("fuz-num", &mut config.fuz_num),
        ("fuz-var", &mut config.fuz_var),
        ("max-cover", &mut config.max_cover),
        ("nuc-len", &mut config.nuc_len),
        ("lin-len", &mut config.lin_len),
    ];
    for (flag, field) in overrides {
        if let Some(value) = matches.get_one::<i64>(flag) {
            *field = *value;
        }
    }

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if let Some(chrom) = matches.get_one::<String>("chrom") {
        config.chrom = chrom.to_owned();
    }
    if matches.get_flag("as-ratio") {
        config.as_ratio = true;
    }

    Ok(config)
}

pub fn run_synthetic(matches: &ArgMatches) -> Result<()> {
    let output_dir = matches
        .get_one::<String>("output-dir")
        .expect("An output directory is required.");

    let config = config_from_matches(matches)?;
    let map = synthetic_nuc_map(config)?;

    log::info!(
        "Synthetic map with seed {}: {} reads, {} control reads",
        map.seed(),
        map.reads.len(),
        map.control.as_ref().map(|c| c.len()).unwrap_or(0)
    );

    map.write_to_dir(Path::new(output_dir))?;

    println!("seed: {}", map.seed());

    Ok(())
}
