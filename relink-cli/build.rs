//! Build script for relink-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("relink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute relative links between site documents")
        .long_about(
            "Command-line tool for resolving document paths and computing relative links \
             between the documents of a statically generated site",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of discovering relink.yaml")
                .value_name("PATH")
                .global(true)
                .env("RELINK_CONFIG"),
        )
        .arg(
            Arg::new("document")
                .long("document")
                .help("Add a document to the document set (repeatable)")
                .value_name("PATH")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .help("Read document paths from a file, one per line")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the canonical path of each input")
                .long_about("Resolve paths and @key handles against the current document"),
            Command::new("link")
                .about("Print the link from one input to another")
                .long_about("Compute the relative link placed at FROM that leads to TO"),
            Command::new("to")
                .about("Print the link from the current document to a target"),
            Command::new("from")
                .about("Print the link from a source to the current document"),
            Command::new("bind")
                .about("Report links between every matched document and one anchor")
                .long_about(
                    "Bind a linker to every document selected by the match pattern and \
                     report the link between each of them and one anchor",
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a relink configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| std::io::Error::other("OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("relink.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
