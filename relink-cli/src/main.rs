//! Main entry point for the relink CLI.
//!
//! This is the command-line interface for the relink library. It provides
//! commands for computing links between documents of a site:
//! - `resolve`: Print canonical document-set paths
//! - `link`, `to`, `from`: Print relative links
//! - `bind`: Report links for every matched document

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        documents: cli.documents,
        manifest: cli.manifest,
    };

    // Route library log records through the CLI logger
    global.logger().install();

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Link(cmd) => cmd.execute(&global),
        cli::Command::To(cmd) => cmd.execute(&global),
        cli::Command::From(cmd) => cmd.execute(&global),
        cli::Command::Bind(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
