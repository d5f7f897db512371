use clap::{Arg, Command};

use crate::common::{reference_arg, window_length_arg};

pub const DELS_CMD: &str = "dels";

pub fn create_dels_cli() -> Command {
    Command::new(DELS_CMD)
        .author("Databio")
        .about("Anchor deletion-shaped flank rows on the reference and print the deleted spans.")
        .arg(
            Arg::new("flanks")
                .required(true)
                .help("Flank table from resequencing output ('-' for stdin)"),
        )
        .arg(reference_arg())
        .arg(window_length_arg())
}
