use clap::{Arg, Command};

use crate::common::{reference_arg, window_length_arg};

pub const SNVS_CMD: &str = "snvs";

pub fn create_snvs_cli() -> Command {
    Command::new(SNVS_CMD)
        .author("Databio")
        .about("Anchor SNV-shaped flank rows on the reference and print one call per position.")
        .arg(
            Arg::new("flanks")
                .required(true)
                .help("Flank table from resequencing output ('-' for stdin)"),
        )
        .arg(reference_arg())
        .arg(window_length_arg())
}
