use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, value_parser};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use varanno_annotate::{
    AnnotatorConfig, FlankKind, FlankRecord, discover_deletions, discover_snvs,
};
use varanno_core::utils::{get_dynamic_reader_w_stdin, get_dynamic_writer};
use varanno_refseq::{KmerIndex, SequenceStore};

pub const REFERENCE_ARG: &str = "reference";
pub const WINDOW_LENGTH_ARG: &str = "window-length";

pub fn reference_arg() -> Arg {
    Arg::new(REFERENCE_ARG)
        .long(REFERENCE_ARG)
        .short('r')
        .required(true)
        .help("Single-contig reference FASTA (optionally gzipped)")
}

pub fn window_length_arg() -> Arg {
    Arg::new(WINDOW_LENGTH_ARG)
        .long(WINDOW_LENGTH_ARG)
        .short('k')
        .value_parser(value_parser!(usize))
        .help("k-mer window length (overrides the config file)")
}

///
/// Settings from `--config` (or the defaults), with any `-k` given on the
/// subcommand taking precedence.
///
pub fn load_config(matches: &ArgMatches) -> Result<AnnotatorConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => AnnotatorConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => AnnotatorConfig::default(),
    };

    if let Ok(Some(k)) = matches.try_get_one::<usize>(WINDOW_LENGTH_ARG) {
        config.window_length = *k;
    }
    config.validate()?;

    Ok(config)
}

pub fn load_reference(matches: &ArgMatches) -> Result<SequenceStore> {
    let path = matches
        .get_one::<String>(REFERENCE_ARG)
        .context("A path to the reference FASTA is required.")?;
    let store = SequenceStore::from_path(path)
        .with_context(|| format!("Failed to load reference: {}", path))?;
    Ok(store)
}

pub fn open_output(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>> {
    let output = matches.get_one::<String>("output").map(Path::new);
    get_dynamic_writer(output)
}

pub fn progress_spinner(matches: &ArgMatches, message: &str) -> Result<ProgressBar> {
    if matches.get_flag("quiet") {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message(message.to_string());

    Ok(spinner)
}

///
/// Shared body of `snvs` and `dels`: anchor every flank row of the requested
/// shape and write one call per candidate position.
///
pub fn run_discovery(matches: &ArgMatches, kind: FlankKind) -> Result<()> {
    let flanks = matches
        .get_one::<String>("flanks")
        .context("A path to the flank table is required.")?;

    let config = load_config(matches)?;
    let store = load_reference(matches)?;
    let index = KmerIndex::from_store(&store, config.window_length)?;

    let reader = get_dynamic_reader_w_stdin(flanks)?;
    let mut writer = open_output(matches)?;
    let spinner = progress_spinner(matches, "Anchoring flank windows...")?;

    let mut rows = 0;
    let mut called = 0;
    for line in reader.lines().skip(config.header_lines) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = FlankRecord::from_line(&line, config.flank_column_offset)?;
        if record.kind(config.window_length) != kind {
            continue;
        }
        rows += 1;

        let calls = match kind {
            FlankKind::Snv => discover_snvs(&record, &index, &store)?,
            FlankKind::Deletion => discover_deletions(&record, &index, &store)?,
            FlankKind::Other => Vec::new(),
        };
        for call in calls {
            writeln!(writer, "{}", call)?;
            called += 1;
        }
        spinner.inc(1);
    }

    writer.flush()?;
    spinner.finish_and_clear();
    info!("Anchored {} calls from {} {:?} rows", called, rows, kind);

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::fs::read_to_string;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    use crate::build_parser;

    // protein at 3..17: ATG AAA CTG GGC TAA
    pub(crate) const REFERENCE: &str = ">ref\nCCATGAAACTGGGCTAAGG\n";

    pub(crate) fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// Parse a full command line and hand back the subcommand's matches.
    pub(crate) fn sub_matches(args: &[&str]) -> ArgMatches {
        let matches = build_parser().try_get_matches_from(args).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        sub.clone()
    }

    #[rstest]
    fn test_load_config_override() {
        let config = temp_file("window_length = 9\nheader_lines = 0\n");
        let matches = sub_matches(&[
            "varanno",
            "snvs",
            "flanks.tsv",
            "--reference",
            "ref.fa",
            "--config",
            config.path().to_str().unwrap(),
            "-k",
            "5",
        ]);

        let config = load_config(&matches).unwrap();
        assert_eq!(config.window_length, 5);
        assert_eq!(config.header_lines, 0);
    }

    #[rstest]
    fn test_load_config_rejects_zero_window() {
        let matches = sub_matches(&["varanno", "kmers", "--reference", "ref.fa", "-k", "0"]);
        assert!(load_config(&matches).is_err());
    }

    #[rstest]
    #[case(
        FlankKind::Snv,
        "snvs",
        "ref\t6\t6\tr1\tA\tG\t7\n"
    )]
    #[case(
        FlankKind::Deletion,
        "dels",
        "ref\t6\t8\tr2\tAAA\tDEL\t2\n"
    )]
    fn test_run_discovery(#[case] kind: FlankKind, #[case] cmd: &str, #[case] expected: &str) {
        let reference = temp_file(REFERENCE);
        let flanks = temp_file(
            "header\nheader\n\
             r1\t.\t7\t.\t.\tCCATG\tCATGG\tATGGA\tTGGAA\tGGAAC\tGAACT\tAACTG\n\
             r2\t.\t2\t.\t.\tCCATG\tCATGC\tATGCT\tTGCTG\tGCTGG\tCTGGG\n",
        );
        let output = NamedTempFile::new().unwrap();

        let matches = sub_matches(&[
            "varanno",
            cmd,
            flanks.path().to_str().unwrap(),
            "--reference",
            reference.path().to_str().unwrap(),
            "-k",
            "5",
            "--output",
            output.path().to_str().unwrap(),
            "--quiet",
        ]);
        run_discovery(&matches, kind).unwrap();

        assert_eq!(read_to_string(output.path()).unwrap(), expected);
    }
}
