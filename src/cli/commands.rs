use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docreg")]
#[command(version, about = "An in-memory document registry")]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Session(SessionCommand),

    /// Start an interactive session on a single store
    Shell,
}

/// Commands available both on the command line and inside `docreg shell`.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List documents matching a search, category and sort order
    List(ListArgs),

    /// Show document counts per category
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview a single document
    Show {
        /// Document ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new document
    Add(AddArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against title and category
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Category to keep (HR, Engineering, Finance, Legal, Safety, Operations, all)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Sort order (newest, oldest, title)
    #[arg(long)]
    pub sort: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Document title
    pub title: String,

    /// Name of the attached file
    #[arg(long = "file", short = 'f')]
    pub file_name: Option<String>,

    /// Document category
    #[arg(long, short = 'c', default_value = "HR")]
    pub category: String,

    #[arg(long, short = 'd')]
    pub department: Option<String>,

    /// Priority (low, medium, high, urgent)
    #[arg(long, short = 'p', default_value = "Medium")]
    pub priority: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Registration date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line typed into `docreg shell`.
#[derive(Parser, Debug)]
#[command(name = "docreg", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Session(SessionCommand),

    /// Run a query string, e.g. `query type:HR sort:title policy`
    Query {
        /// Words and `type:`/`sort:` tokens
        raw: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}
