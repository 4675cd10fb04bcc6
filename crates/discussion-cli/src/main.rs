//! gh-discussion entry point.
//!
//! Binary name: `gh-discussion`
//!
//! Parses CLI arguments, initializes logging, then dispatches to the command
//! handler. Any error is printed as a single line on stderr with exit code 1.

mod cli;

use clap::Parser;

use cli::{Cli, Commands};
use discussion_observe::tracing_setup::{init_tracing, verbosity_filter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(verbosity_filter(cli.verbose, cli.quiet)) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    if let Err(err) = run(cli).await {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Create { repo, dry_run } => cli::create::create_discussion(repo, dry_run).await,
    }
}
