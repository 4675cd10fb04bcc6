//! CLI command definitions for the `gh-discussion` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod create;
pub mod prompt;

use clap::{Parser, Subcommand};

/// Create GitHub Discussions from a repository's Discussion category forms.
#[derive(Parser, Debug)]
#[command(name = "gh-discussion", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed log output on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively create a new Discussion from a category form.
    Create {
        /// Repository to use, as [HOST/]OWNER/REPO. Defaults to GH_REPO, then
        /// the current directory's git remote.
        #[arg(short = 'R', long)]
        repo: Option<String>,

        /// Print the composed Discussion instead of creating it.
        #[arg(long)]
        dry_run: bool,
    },
}
