use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `livecombo` binary.
#[derive(Parser, Debug)]
#[command(
    name = "livecombo",
    version,
    long_version = long_version(),
    about = "Live-search combo box: type a query and pick a record",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "LIVECOMBO_CONFIG",
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
        short = 'r',
        long,
        value_name = "FILE",
        help = "JSON array of records to search"
    )]
    pub(crate) records: Option<PathBuf>,
    #[arg(
        long,
        value_name = "NUM",
        help = "Maximum number of matches per query (default: 50)"
    )]
    pub(crate) limit: Option<usize>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: records file name)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: derived from the results class)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "results-class",
        value_name = "CLASS",
        help = "Results container class (default: comboBoxResults)"
    )]
    pub(crate) results_class: Option<String>,
    #[arg(
        short = 'm',
        long = "min-query-length",
        value_name = "NUM",
        help = "Characters required before a query is issued (default: 3)"
    )]
    pub(crate) min_query_length: Option<usize>,
    #[arg(
        long = "id-field",
        value_name = "NAME",
        help = "Record field holding the identifier (default: Id)"
    )]
    pub(crate) id_field: Option<String>,
    #[arg(
        long = "text-field",
        value_name = "NAME",
        help = "Record field holding the display text (default: Text)"
    )]
    pub(crate) text_field: Option<String>,
    #[arg(
        long = "max-visible",
        value_name = "NUM",
        help = "Rows shown before the overlay scrolls (default: 8)"
    )]
    pub(crate) max_visible_items: Option<usize>,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        help = "Delay before a query is issued after typing stops (default: 0)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write diagnostics to FILE (default: livecombo.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
