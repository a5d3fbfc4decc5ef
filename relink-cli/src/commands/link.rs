//! Link command implementation.
//!
//! This module implements the `link` command, which prints the relative link
//! between two arbitrary inputs.

use crate::error::CliError;
use crate::utils::{bind_linker, GlobalOptions, Input};
use clap::Args;

/// Print the link from one input to another.
#[derive(Args)]
pub struct LinkCommand {
    /// Document relative inputs are resolved against
    #[arg(long, value_name = "PATH")]
    pub current: String,

    /// Where the link is placed
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Where the link leads
    #[arg(value_name = "TO")]
    pub to: String,
}

impl LinkCommand {
    /// Execute the link command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let linker = bind_linker(global, &self.current)?;
        let from = Input::parse(&self.from, linker.documents());
        let to = Input::parse(&self.to, linker.documents());

        let link = linker.link(from.as_resolvable(), to.as_resolvable())?;
        println!("{link}");

        Ok(())
    }
}
