//! CLI Argument Parsing
//!
//! `vendorclean` has a single action, so there are no subcommands: the
//! positional ROOT plus flags describe one cleanup run.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// vendorclean - prune vendored Go dependencies down to what the build needs
#[derive(Parser, Debug)]
#[command(name = "vendorclean")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Options also come from vendorclean.toml and VENDORCLEAN_* variables.")]
pub struct Cli {
    /// Project root containing vendor/ and glide.lock
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Keep only Go source files
    #[arg(long)]
    pub only_go: bool,

    /// Remove Go test files
    #[arg(long)]
    pub no_tests: bool,

    /// Keep license and notice files even with --only-go
    #[arg(long)]
    pub keep_legal_files: bool,

    /// Remove files outside the packages listed in glide.lock
    #[arg(long)]
    pub use_lock_file: bool,

    /// Always keep files matching this gitignore-style pattern (repeatable)
    #[arg(short, long = "keep", value_name = "PATTERN")]
    pub keep: Vec<String>,

    /// Dry run - show what would be removed
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Output NDJSON events instead of human readable text
    #[arg(long)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level for the `-v` count
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
