use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use nucmap_fragments::consts::*;
use nucmap_fragments::{DuplicatePolicy, ReadType, TsvRecordReader, reads_from_source};

pub fn run_fragments(matches: &ArgMatches) -> Result<()> {
    let records = matches
        .get_one::<String>("records")
        .expect("A path to an alignment record table is required.");

    let read_type = match matches.get_one::<String>("type") {
        Some(read_type) => ReadType::from_str(read_type)?,
        None => ReadType::default(),
    };

    let policy = match matches.get_one::<String>("duplicates") {
        Some(policy) => DuplicatePolicy::from_str(policy)?,
        None => DuplicatePolicy::default(),
    };

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Building {} reads from {}", read_type, records));

    let mut source = TsvRecordReader::new(records);
    let reads = match reads_from_source(&mut source, read_type, policy) {
        Ok(reads) => reads,
        Err(err) => {
            pb.abandon_with_message("Fragment reconstruction failed");
            return Err(err.into());
        }
    };

    pb.set_message(format!("Writing {} reads to {}", reads.len(), output));
    reads.to_bed(Path::new(output))?;
    pb.finish_with_message(format!("Wrote {} reads to {}", reads.len(), output));

    Ok(())
}
