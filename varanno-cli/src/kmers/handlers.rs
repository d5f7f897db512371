use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use varanno_refseq::KmerIndex;

use crate::common::{REFERENCE_ARG, load_config, open_output};

pub fn run_kmers(matches: &ArgMatches) -> Result<()> {
    let reference = matches
        .get_one::<String>(REFERENCE_ARG)
        .context("A path to the reference FASTA is required.")?;
    let config = load_config(matches)?;

    let index = KmerIndex::from_path(reference, config.window_length)?;
    let repeated = index.report_non_unique();

    let mut writer = open_output(matches)?;
    for (window, intervals) in &repeated {
        let coordinates: Vec<String> = intervals.iter().map(ToString::to_string).collect();
        writeln!(
            writer,
            "{}\t{}",
            String::from_utf8_lossy(window),
            coordinates.join("\t")
        )?;
    }
    writer.flush()?;

    info!(
        "{} of {} distinct {}-mers occur more than once",
        repeated.len(),
        index.len(),
        config.window_length
    );
    Ok(())
}
