use clap::{Arg, Command};

use crate::common::reference_arg;

pub const AACHANGES_CMD: &str = "aachanges";

pub fn create_aachanges_cli() -> Command {
    Command::new(AACHANGES_CMD)
        .author("Databio")
        .about("Apply every SNV to the reference at once and report the changed residues of each protein.")
        .arg(reference_arg())
        .arg(
            Arg::new("proteins")
                .long("proteins")
                .short('p')
                .required(true)
                .help("Protein regions: contig, start, end, gene, product"),
        )
        .arg(
            Arg::new("snvs")
                .long("snvs")
                .short('s')
                .required(true)
                .help("SNV calls as written by `varanno snvs`"),
        )
}
