use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sigparse")]
#[command(about = "Parse Java-like method signatures into structured records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse signatures from arguments, a file, or stdin
    Parse {
        /// Signatures to parse (e.g. "private void log(String value)")
        signatures: Vec<String>,

        /// File with one signature per line ("-" for stdin)
        #[arg(short, long, conflicts_with = "signatures")]
        input: Option<PathBuf>,

        /// Output format (defaults to the config file value, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop at the first signature that fails to parse
        #[arg(long = "fail-fast")]
        fail_fast: bool,

        /// Parse lines sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Disable colored output
        #[arg(long = "plain")]
        plain: bool,
    },

    /// Initialize a .sigparse.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Default log filter for a `-v` count.
pub fn log_level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
