//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BindCommand, CompletionsCommand, FromCommand, LinkCommand, ResolveCommand, ToCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for computing relative links between site documents.
#[derive(Parser)]
#[command(name = "relink")]
#[command(version, about = "Compute relative links between site documents", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of discovering relink.yaml
    #[arg(long, value_name = "PATH", global = true, env = "RELINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Add a document to the document set (repeatable)
    #[arg(long = "document", value_name = "PATH", global = true)]
    pub documents: Vec<String>,

    /// Read document paths from a file, one per line
    #[arg(long, value_name = "PATH", global = true)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical path of each input
    Resolve(ResolveCommand),

    /// Print the link from one input to another
    Link(LinkCommand),

    /// Print the link from the current document to a target
    To(ToCommand),

    /// Print the link from a source to the current document
    From(FromCommand),

    /// Report links between every matched document and one anchor
    Bind(BindCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
