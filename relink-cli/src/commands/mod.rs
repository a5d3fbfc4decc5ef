//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the canonical path of each input
//! - `link`: Print the link between two inputs
//! - `to`: Print the link from the current document to a target
//! - `from`: Print the link from a source to the current document
//! - `bind`: Report links between every matched document and one anchor
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod bind;
pub mod completions;
pub mod from;
pub mod link;
pub mod resolve;
pub mod to;
pub mod validate;

pub use bind::BindCommand;
pub use completions::CompletionsCommand;
pub use from::FromCommand;
pub use link::LinkCommand;
pub use resolve::ResolveCommand;
pub use to::ToCommand;
pub use validate::ValidateCommand;
