use clap::{Arg, Command};

pub const FILTER_CMD: &str = "filter";

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .author("Databio")
        .about("Keep the best-supported call at each position.")
        .arg(
            Arg::new("calls")
                .default_value("-")
                .help("Calls from `snvs` or `dels` ('-' for stdin)"),
        )
}
