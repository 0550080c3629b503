use clap::{Arg, ArgAction, Command, arg, value_parser};

pub use nucmap_synth::consts::*;

/// integer parameters that can override the config file, as (flag, config field)
pub const COUNT_OVERRIDES: [(&str, &str); 8] = [
    ("wp-num", "wp_num"),
    ("wp-del", "wp_del"),
    ("wp-var", "wp_var"),
    ("fuz-num", "fuz_num"),
    ("fuz-var", "fuz_var"),
    ("max-cover", "max_cover"),
    ("nuc-len", "nuc_len"),
    ("lin-len", "lin_len"),
];

pub fn create_synthetic_cli() -> Command {
    let mut cmd = Command::new(SYNTHETIC_CMD)
        .about("Generate a reproducible synthetic nucleosome map, optionally with a control sample and coverage ratio.")
        .arg(arg!(--config <config>).help("Map parameters as .toml, .yaml or .json"))
        .arg(
            arg!(--"output-dir" <dir>)
                .required(true)
                .help("Directory for reads, ground truth and signals"),
        )
        .arg(
            arg!(--seed <seed>)
                .value_parser(value_parser!(u64))
                .help("Random seed; drawn and reported when omitted"),
        )
        .arg(arg!(--chrom <chrom>).help("Reference name of the synthetic reads"))
        .arg(
            Arg::new("as-ratio")
                .long("as-ratio")
                .action(ArgAction::SetTrue)
                .help("Also draw a control sample and compute the log2 coverage ratio"),
        );

    for (flag, field) in COUNT_OVERRIDES {
        cmd = cmd.arg(
            Arg::new(flag)
                .long(flag)
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help(format!("Override `{}`", field)),
        );
    }

    cmd
}
