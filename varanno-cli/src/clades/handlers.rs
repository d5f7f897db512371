use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use varanno_annotate::CladeTable;
use varanno_core::utils::get_dynamic_reader_w_stdin;

use crate::common::open_output;

pub fn run_clades(matches: &ArgMatches) -> Result<()> {
    let snvs = matches
        .get_one::<String>("snvs")
        .context("A path to the SNV calls is required.")?;
    let clades = matches
        .get_one::<String>("clades")
        .context("A path to the clade table is required.")?;

    let table = CladeTable::from_path(clades)?;

    let reader = get_dynamic_reader_w_stdin(snvs)?;
    let mut writer = open_output(matches)?;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(writer, "{}", table.annotate_line(&line)?)?;
    }
    writer.flush()?;

    Ok(())
}
