use anyhow::Result;
use clap::ArgMatches;

use varanno_annotate::FlankKind;

use crate::common::run_discovery;

pub fn run_dels(matches: &ArgMatches) -> Result<()> {
    run_discovery(matches, FlankKind::Deletion)
}
