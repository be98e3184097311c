use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "statz", bin_name = "statz", version)]
#[command(about = "Track your character's stats over time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding db.json (defaults to $STATZ_HOME, then the current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use the per-user data directory
    #[arg(short, long, global = true, conflicts_with = "data_dir")]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the stats of your character. Default is today.
    #[command(alias = "s")]
    Status {
        /// Status until specific date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Record an action against one or more attributes
    #[command(alias = "l")]
    Log {
        /// Reducer kind (built-in: sum, set)
        kind: String,

        /// Attribute values, e.g. hp=30 mp=-5
        #[arg(required = true, num_args = 1.., value_name = "ATTR=VALUE")]
        entries: Vec<String>,

        /// When the action happened (defaults to now)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// List the attribute types
    #[command(alias = "t")]
    Types,

    /// Create the ledger with default attribute types
    ///
    /// Until then, status and types read the defaults without writing db.json.
    Init,
}
