use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use varanno_annotate::filter::best_supported;
use varanno_core::models::CalledVariant;
use varanno_core::utils::get_dynamic_reader_w_stdin;

use crate::common::open_output;

pub fn run_filter(matches: &ArgMatches) -> Result<()> {
    let calls = matches
        .get_one::<String>("calls")
        .context("A path to the calls is required.")?;

    let reader = get_dynamic_reader_w_stdin(calls)?;
    let mut parsed = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        parsed.push(CalledVariant::from_line(&line)?);
    }

    let total = parsed.len();
    let kept = best_supported(parsed);

    let mut writer = open_output(matches)?;
    for call in &kept {
        writeln!(writer, "{}", call)?;
    }
    writer.flush()?;

    info!("Kept {} of {} calls", kept.len(), total);
    Ok(())
}
