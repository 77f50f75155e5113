use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `gems` binary.
#[derive(Parser, Debug)]
#[command(
    name = "gems",
    version,
    long_version = long_version(),
    about = "Browse a curated reading list by language, keyword and source",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "GEMS_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH|URL",
        help = "Dataset file or http(s) URL (default: ./data.json)"
    )]
    pub(crate) data: Option<String>,
    #[arg(
        long,
        value_name = "SECS",
        help = "Timeout for fetching a remote dataset (default: 15)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANG",
        help = "Display language: zh, en, ja or ko (default: zh)"
    )]
    pub(crate) lang: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "TEXT",
        help = "Only show items whose title, summary, quote or tags contain TEXT (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 's',
        long,
        value_name = "SOURCE",
        help = "Only show items from SOURCE (default: all)"
    )]
    pub(crate) source: Option<String>,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Choose how to print the result (default: html)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[arg(
        long = "list-sources",
        help = "List the sources found in the dataset with their counts and exit (default: disabled)"
    )]
    pub(crate) list_sources: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity; repeat for more detail (default: warnings only)"
    )]
    pub(crate) verbose: u8,
}
