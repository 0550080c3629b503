mod fragments;
mod synthetic;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "nucmap";
    pub const BIN_NAME: &str = "nucmap";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for nucleosome mapping: rebuild fragments from alignments and generate synthetic nucleosome maps.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase logging verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(fragments::cli::create_fragments_cli())
        .subcommand(synthetic::cli::create_synthetic_cli())
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // FRAGMENT RECONSTRUCTION
        //
        Some((fragments::cli::FRAGMENTS_CMD, matches)) => {
            fragments::handlers::run_fragments(matches)?;
        }

        //
        // SYNTHETIC MAPS
        //
        Some((synthetic::cli::SYNTHETIC_CMD, matches)) => {
            synthetic::handlers::run_synthetic(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_verbosity_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["nucmap", "synthetic", "--output-dir", "out", "-vv"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
    }
}
