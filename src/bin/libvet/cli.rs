//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// libvet - batch install-and-compile verification for Arduino library
/// catalogs
#[derive(Parser)]
#[command(name = "libvet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the latest version of each library and split the list for
    /// parallel workers
    Schedule(ScheduleArgs),

    /// Install and compile-check each library in a list, writing a test
    /// report
    Check(CheckArgs),

    /// Render a test report as a Markdown summary
    Summary(SummaryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// JSON file with the list of libraries
    #[arg(long)]
    pub input: PathBuf,

    /// Output file name; the shard index is added to the name when
    /// --parallel is greater than 1
    #[arg(long)]
    pub output: PathBuf,

    /// Split the list of libraries across this many workers
    #[arg(long, default_value_t = 1)]
    pub parallel: usize,

    /// Architectures which should be included
    #[arg(long, num_args = 1..)]
    pub arch: Vec<String>,

    /// Write the job matrix JSON to this file instead of printing a
    /// workflow output command
    #[arg(long)]
    pub matrix: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// JSON file with the list of libraries to check
    #[arg(long)]
    pub input: PathBuf,

    /// Directory the package manager installs libraries into
    #[arg(long)]
    pub library_dir: Option<PathBuf>,

    /// Output report file name
    #[arg(long)]
    pub output: PathBuf,

    /// arduino-cli configuration file, forwarded to every invocation
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Path to the arduino-cli binary (found on PATH when omitted)
    #[arg(long)]
    pub cli: Option<PathBuf>,

    /// Board FQBN to compile against
    #[arg(long)]
    pub board: Option<String>,

    /// Scratch directory for the generated test sketch (a temporary
    /// directory when omitted)
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Input test report file
    #[arg(long)]
    pub input: PathBuf,

    /// Output markdown file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
