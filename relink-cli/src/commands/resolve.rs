//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which prints the canonical
//! document-set path of each input as seen from the current document.

use crate::error::CliError;
use crate::utils::{bind_linker, GlobalOptions, Input};
use clap::Args;

/// Print the canonical path of each input.
#[derive(Args)]
pub struct ResolveCommand {
    /// Document the inputs are relative to
    #[arg(long, value_name = "PATH")]
    pub current: String,

    /// Paths or `@key` handles to resolve
    #[arg(value_name = "INPUT", required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let linker = bind_linker(global, &self.current)?;
        let logger = global.logger();

        for raw in &self.inputs {
            let input = Input::parse(raw, linker.documents());
            let resolved = linker.resolve(input.as_resolvable())?;
            logger.debug(&format!("{input} -> {resolved:?}"));
            println!("{resolved}");
        }

        Ok(())
    }
}
