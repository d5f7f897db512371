mod aachanges;
mod annotate;
mod clades;
mod common;
mod dels;
mod filter;
mod kmers;
mod snvs;

use std::env;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use env_logger::Builder;
use log::{LevelFilter, debug};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "varanno";
    pub const BIN_NAME: &str = "varanno";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Anchor SNVs and deletions on a viral reference genome and report their amino-acid changes.")
        .subcommand_required(true)
        .arg(
            arg!(--config <config> "TOML file with window_length, header_lines, flank_column_offset, validate_frame")
                .global(true),
        )
        .arg(
            arg!(--output <output> "Write results here instead of stdout")
                .global(true),
        )
        .arg(
            arg!(-v --verbose "Print per-variant detail")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            arg!(-q --quiet "Only print errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(snvs::cli::create_snvs_cli())
        .subcommand(dels::cli::create_dels_cli())
        .subcommand(annotate::cli::create_annotate_cli())
        .subcommand(aachanges::cli::create_aachanges_cli())
        .subcommand(kmers::cli::create_kmers_cli())
        .subcommand(clades::cli::create_clades_cli())
        .subcommand(filter::cli::create_filter_cli())
}

fn set_log_level(matches: &ArgMatches) {
    let mut log_level = LevelFilter::Info;
    if matches.get_flag("verbose") {
        log_level = LevelFilter::Debug;
    }
    if matches.get_flag("quiet") {
        log_level = LevelFilter::Error;
    }

    let mut builder = Builder::new();
    builder.filter_level(log_level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // a logger installed elsewhere wins
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    set_log_level(&matches);
    debug!("{} version {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // DISCOVERY
        //
        Some((snvs::cli::SNVS_CMD, matches)) => {
            snvs::handlers::run_snvs(matches)?;
        }
        Some((dels::cli::DELS_CMD, matches)) => {
            dels::handlers::run_dels(matches)?;
        }

        //
        // ANNOTATION
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            annotate::handlers::run_annotate(matches)?;
        }
        Some((aachanges::cli::AACHANGES_CMD, matches)) => {
            aachanges::handlers::run_aachanges(matches)?;
        }

        //
        // POST-PROCESSING AND DIAGNOSTICS
        //
        Some((clades::cli::CLADES_CMD, matches)) => {
            clades::handlers::run_clades(matches)?;
        }
        Some((filter::cli::FILTER_CMD, matches)) => {
            filter::handlers::run_filter(matches)?;
        }
        Some((kmers::cli::KMERS_CMD, matches)) => {
            kmers::handlers::run_kmers(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
