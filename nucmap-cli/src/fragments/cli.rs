use clap::{Arg, Command, arg};

pub use nucmap_fragments::consts::*;

pub fn create_fragments_cli() -> Command {
    Command::new(FRAGMENTS_CMD)
        .about("Rebuild sequencing fragments from an alignment record table and write them as BED.")
        .arg(
            Arg::new("records")
                .required(true)
                .help("Alignment record table (.tsv or .tsv.gz, '-' for stdin)"),
        )
        .arg(
            arg!(--type <type>)
                .help("Library layout: single or paired")
                .default_value("paired"),
        )
        .arg(
            arg!(--duplicates <policy>)
                .help("What to do with repeated read names: keep-first or reject")
                .default_value("keep-first"),
        )
        .arg(arg!(--output <output>).help("Output BED file, gzipped when it ends in .gz"))
}
