use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::info;

use varanno_annotate::{StandardCode, VariantAnnotator, format_changes};
use varanno_core::models::{CalledVariant, ProteinRegion};
use varanno_core::utils::get_dynamic_reader;

use crate::common::{load_config, load_reference, open_output};

fn read_snvs(path: &Path) -> Result<Vec<(u32, u8)>> {
    let reader = get_dynamic_reader(path)?;
    let mut changes = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let call = CalledVariant::from_line(&line)?;
        let &[base] = call.alt_allele.as_bytes() else {
            bail!("Expected a single-base alternate allele: {}", line);
        };
        changes.push((call.interval.start, base));
    }

    Ok(changes)
}

pub fn run_aachanges(matches: &ArgMatches) -> Result<()> {
    let proteins = matches
        .get_one::<String>("proteins")
        .context("A path to the protein regions is required.")?;
    let snvs = matches
        .get_one::<String>("snvs")
        .context("A path to the SNV calls is required.")?;

    let config = load_config(matches)?;
    let store = load_reference(matches)?;

    let changes = read_snvs(Path::new(snvs))?;
    let alternate = store.with_changes(&changes)?;
    info!("Applied {} SNVs to {}", changes.len(), store.contig());

    let annotator =
        VariantAnnotator::new(&store, StandardCode).with_frame_validation(config.validate_frame);

    let reader = get_dynamic_reader(Path::new(proteins))?;
    let mut writer = open_output(matches)?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let region = ProteinRegion::from_line(&line)?;
        let residues = annotator.protein_changes(&alternate, &region)?;
        if !residues.is_empty() {
            writeln!(writer, "{}\t{}", region, format_changes(&residues))?;
        }
    }

    writer.flush()?;
    Ok(())
}
