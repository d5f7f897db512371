use clap::Command;

use crate::common::{reference_arg, window_length_arg};

pub const KMERS_CMD: &str = "kmers";

pub fn create_kmers_cli() -> Command {
    Command::new(KMERS_CMD)
        .author("Databio")
        .about("List every reference window that occurs more than once.")
        .arg(reference_arg())
        .arg(window_length_arg())
}
