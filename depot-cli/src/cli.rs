// depot-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Depot: structured front end for the p4 command-line tool",
    long_about = "Runs p4 commands from named options and prints the parsed reports \
                  as labelled text or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print parsed records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// p4 binary to run
    #[arg(long, global = true, value_name = "PATH", env = "DEPOT_P4_BIN")]
    pub p4_bin: Option<String>,

    /// JSON option schema replacing the built-in one
    #[arg(long, global = true, value_name = "FILE", env = "DEPOT_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Working directory for p4
    #[arg(long, global = true, value_name = "DIR", env = "DEPOT_CWD")]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show client and server information (p4 info)
    Info,

    /// Create, edit, delete or view a changelist (p4 change)
    #[command(subcommand)]
    Change(ChangeCommands),

    /// Open files for add
    Add(FileArgs),

    /// Open files for delete
    Delete(FileArgs),

    /// Open files for edit
    Edit(FileArgs),

    /// Revert open files
    Revert(FileArgs),
}

#[derive(Subcommand, Debug)]
pub enum ChangeCommands {
    /// Create a pending changelist and print its number
    Create {
        /// Changelist description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Replace the description of a pending changelist
    Edit {
        /// Changelist number
        changelist: Option<u64>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a pending changelist
    Delete {
        /// Changelist number
        changelist: Option<u64>,
    },

    /// Show a changelist with its files
    View {
        /// Changelist number
        changelist: Option<u64>,
    },
}

#[derive(Args, Debug, Default)]
pub struct FileArgs {
    /// Files to operate on (depot, client or local syntax)
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Changelist to open the files in
    #[arg(short, long, value_name = "CHANGE")]
    pub changelist: Option<u64>,

    /// File type (e.g. text, binary+x)
    #[arg(short = 't', long, value_name = "TYPE")]
    pub filetype: Option<String>,

    /// Preview only; do not open or revert anything
    #[arg(short = 'n', long)]
    pub preview: bool,

    /// Revert only unchanged files
    #[arg(short = 'a', long)]
    pub unchanged: bool,

    /// Keep the workspace files untouched
    #[arg(short = 'k', long)]
    pub keep_local: bool,

    /// Extra option passed through the schema, as NAME=VALUE (VALUE is read as JSON when valid)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub extra: Vec<String>,
}
