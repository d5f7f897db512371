use clap::{Arg, Command};

pub const CLADES_CMD: &str = "clades";

pub fn create_clades_cli() -> Command {
    Command::new(CLADES_CMD)
        .author("Databio")
        .about("Append the clades defined by each SNV's site and alternate allele.")
        .arg(
            Arg::new("snvs")
                .required(true)
                .help("SNV calls ('-' for stdin)"),
        )
        .arg(
            Arg::new("clades")
                .required(true)
                .help("Clade table with a header: clade, gene, site, alt"),
        )
}
