use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2025-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tabula", bin_name = "tabula", version = get_version())]
#[command(about = "Interactive record table: search, sort, page, add, edit, delete", long_about = None)]
pub struct Cli {
    /// Path to a tabula.json config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty table instead of the sample rows
    #[arg(long)]
    pub no_seed: bool,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(
    name = "tabula",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the current page
    #[command(alias = "ls")]
    List,

    /// Filter rows by free text (no text clears the filter)
    #[command(alias = "s")]
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },

    /// Order rows by a column (repeat to flip the direction)
    Sort {
        /// name, date or value
        field: String,

        /// Descending order
        #[arg(long)]
        desc: bool,
    },

    /// Back to store order
    Unsort,

    /// Jump to a page (1-based)
    Page { number: usize },

    /// Next page
    #[command(alias = "n")]
    Next,

    /// Previous page
    #[command(alias = "p")]
    Prev,

    /// Open the form for a new record
    #[command(alias = "a")]
    Add,

    /// Open the form for an existing record
    #[command(alias = "e")]
    Edit { id: String },

    /// Set a form field
    Set {
        /// name, date or value
        field: String,

        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Submit the form
    #[command(alias = "ok")]
    Save,

    /// Close the form without saving
    Cancel,

    /// Delete a record
    #[command(alias = "rm")]
    Delete { id: String },

    /// Show commands
    Help,

    /// Leave the shell
    #[command(alias = "exit", alias = "q")]
    Quit,
}
