use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use reel::SlideSpec;

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `reel` binary.
#[derive(Parser, Debug)]
#[command(
    name = "reel",
    version,
    long_version = long_version(),
    about = "Full-screen, auto-advancing story carousel for the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "ITEMS",
        help = "Slides to show, as NAME or TITLE=NAME (default: built-in showcase)"
    )]
    pub(crate) items: Vec<SlideSpec>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "REEL_CONFIG",
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
        short = 'a',
        long = "assets",
        value_name = "DIR",
        help = "Directory image resources are looked up in (default: ./assets)"
    )]
    pub(crate) assets: Option<PathBuf>,
    #[arg(
        short = 'i',
        long,
        value_name = "SECS",
        help = "Seconds each slide stays on screen (default: 10)"
    )]
    pub(crate) interval: Option<u64>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(long = "list-themes", help = "List available themes and exit")]
    pub(crate) list_themes: bool,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before starting"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long,
        help = "Skip the landing screen and exit when the carousel is dismissed"
    )]
    pub(crate) direct: bool,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log filter when RUST_LOG is unset (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "File to append logs to (default: reel.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for the session report"
    )]
    pub(crate) output: OutputFormat,
}
