// crates/check_bal/src/config.rs

use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub unbalanced_only: bool,
    pub verbose: bool,
}

/// Builds the command-line interface.
pub fn build_cli() -> Command {
    Command::new("check_bal")
        .version("0.1.0")
        .about("Prints every [...] span of a file with its count of '<' and '>'")
        .arg(
            Arg::new("file")
                .help("The text file to scan")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new("unbalanced_only")
                .long("unbalanced-only")
                .help("Only print spans whose '<' and '>' counts differ")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Config {
            input: matches
                .get_one::<String>("file")
                .map(PathBuf::from)
                .unwrap_or_default(),
            unbalanced_only: matches.get_flag("unbalanced_only"),
            verbose: matches.get_flag("verbose"),
        }
    }
}
