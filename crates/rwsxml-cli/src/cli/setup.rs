use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rwsxml",
    bin_name = "rwsxml",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Query Robot Web Services XML responses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file, read before the user config file
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the elements carrying an attribute, in document order
    #[command(alias = "n", display_order = 1)]
    Nodes(QueryArgs),

    /// Print the first text associated with an attribute
    #[command(alias = "t", display_order = 2)]
    Text(QueryArgs),

    /// List the named RWS attribute predicates
    #[command(display_order = 10)]
    Attributes,

    /// Show the effective configuration
    #[command(display_order = 11)]
    Config,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// XML file to search ("-" reads stdin)
    pub file: PathBuf,

    /// Attribute value to match (e.g. ctrlstate)
    pub value: String,

    /// Attribute name (defaults to the configured attribute_name)
    #[arg(short, long)]
    pub name: Option<String>,
}
