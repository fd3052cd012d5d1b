use crate::render::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rprettytable
/// CLI application to print CSV/JSON data as an ASCII grid or an HTML table
#[derive(Parser)]
#[command(
    name = "rprettytable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print CSV or JSON data as an aligned ASCII table or as HTML",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a CSV or JSON file and print it as a table
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Sort rows by this column
        #[arg(long, value_name = "COLUMN")]
        sort: Option<String>,

        /// Sort in descending order (requires --sort)
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Delete the row at this 1-based position (after sorting); repeatable
        #[arg(long = "delete", value_name = "ROW")]
        delete: Vec<usize>,

        /// Output format (default from configuration, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// HTML attribute for the <table> tag as key=value; repeatable
        #[arg(long = "attr", value_name = "KEY=VALUE")]
        attr: Vec<String>,
    },

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// CSV input file (first record = headers)
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// JSON input file (array of flat objects)
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}
