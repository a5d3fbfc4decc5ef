//! To command implementation.

use crate::error::CliError;
use crate::utils::{bind_linker, GlobalOptions, Input};
use clap::Args;

/// Print the link from the current document to a target.
#[derive(Args)]
pub struct ToCommand {
    /// Document the link is placed in
    #[arg(long, value_name = "PATH")]
    pub current: String,

    /// Path or `@key` handle the link leads to
    #[arg(value_name = "TARGET")]
    pub target: String,
}

impl ToCommand {
    /// Execute the to command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let linker = bind_linker(global, &self.current)?;
        let target = Input::parse(&self.target, linker.documents());

        println!("{}", linker.to(target.as_resolvable())?);
        Ok(())
    }
}
