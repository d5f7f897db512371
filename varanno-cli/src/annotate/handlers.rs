use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use varanno_annotate::{CodonMap, CodonTable, StandardCode, VariantAnnotator, format_annotation};
use varanno_core::models::Variant;
use varanno_core::utils::get_dynamic_reader_w_stdin;

use crate::common::{load_config, load_reference, open_output, progress_spinner};

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let variants = matches
        .get_one::<String>("variants")
        .context("A path to the variant table is required.")?;

    let config = load_config(matches)?;
    let validate_frame = config.validate_frame && !matches.get_flag("no-frame-check");

    let codons: Box<dyn CodonTable> = match matches.get_one::<String>("codons") {
        Some(path) => {
            let codons = CodonMap::from_path(path)?;
            info!("Loaded {} codons from {}", codons.len(), path);
            Box::new(codons)
        }
        None => Box::new(StandardCode),
    };

    let store = load_reference(matches)?;
    let annotator = VariantAnnotator::new(&store, codons).with_frame_validation(validate_frame);

    let reader = get_dynamic_reader_w_stdin(variants)?;
    let mut writer = open_output(matches)?;
    let spinner = progress_spinner(matches, "Annotating variants...")?;

    let mut annotated = 0;
    let mut synonymous = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let variant = Variant::from_line(&line)?;
        let changes = annotator
            .annotate(&variant)
            .with_context(|| format!("Failed to annotate variant on line {}", index + 1))?;

        match format_annotation(&variant, &changes) {
            Some(row) => {
                writeln!(writer, "{}", row)?;
                annotated += 1;
            }
            None => synonymous += 1,
        }
        spinner.inc(1);
    }

    writer.flush()?;
    spinner.finish_and_clear();
    info!(
        "{} variants changed a residue, {} were synonymous",
        annotated, synonymous
    );

    Ok(())
}
