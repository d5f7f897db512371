use clap::{Arg, ArgAction, Command, arg};

use crate::common::reference_arg;

pub const ANNOTATE_CMD: &str = "annotate";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .author("Databio")
        .about("Report amino-acid changes for variants intersected with protein regions.")
        .arg(
            Arg::new("variants")
                .default_value("-")
                .help("12-column variant/protein table ('-' for stdin)"),
        )
        .arg(reference_arg())
        .arg(arg!(--codons <codons> "Two-column codon table; the standard code when omitted"))
        .arg(
            arg!(--"no-frame-check" "Allow protein regions that are not a whole number of codons")
                .action(ArgAction::SetTrue),
        )
}
