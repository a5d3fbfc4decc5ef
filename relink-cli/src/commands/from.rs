//! From command implementation.

use crate::error::CliError;
use crate::utils::{bind_linker, GlobalOptions, Input};
use clap::Args;

/// Print the link from a source to the current document.
#[derive(Args)]
pub struct FromCommand {
    /// Document the link leads to
    #[arg(long, value_name = "PATH")]
    pub current: String,

    /// Path or `@key` handle the link is placed in
    #[arg(value_name = "SOURCE")]
    pub source: String,
}

impl FromCommand {
    /// Execute the from command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let linker = bind_linker(global, &self.current)?;
        let source = Input::parse(&self.source, linker.documents());

        println!("{}", linker.from(source.as_resolvable())?);
        Ok(())
    }
}
