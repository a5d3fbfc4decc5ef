//! Bind command implementation.
//!
//! This module implements the `bind` command, which binds a linker to every
//! document selected by the configured match pattern and reports the link
//! between each of them and one anchor.

use crate::error::CliError;
use crate::utils::{load_configuration, load_documents, GlobalOptions, Input};
use clap::{ArgGroup, Args, ValueEnum};
use relink::config::OutputFormat as ConfigFormat;
use relink::output::{Direction, LinkReport};
use relink::Binder;

/// Anchor used when neither `--to` nor `--from` is given.
const DEFAULT_ANCHOR: &str = "/";

/// Report links between every matched document and one anchor.
#[derive(Args)]
#[command(group(ArgGroup::new("anchor").args(["to", "from"])))]
pub struct BindCommand {
    /// Report the link from each document to this target (default: /)
    #[arg(long, value_name = "TARGET")]
    pub to: Option<String>,

    /// Report the link from this source to each document
    #[arg(long, value_name = "SOURCE")]
    pub from: Option<String>,

    /// Output format (default: from configuration)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

/// Output format for the bind command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text (human-readable)
    Human,
    /// JSON format
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => ConfigFormat::Human,
            OutputFormat::Json => ConfigFormat::Json,
        }
    }
}

impl BindCommand {
    /// Execute the bind command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Build the document set and bind matching documents
        let documents = load_documents(global, None)?;
        let bindings = Binder::from_config(&config)?.bind(&documents)?;
        global.logger().info(&format!(
            "Bound {} of {} documents",
            bindings.len(),
            documents.len()
        ));

        // 3. Collect the report
        let (direction, raw) = match (self.to, self.from) {
            (_, Some(source)) => (Direction::From, source),
            (Some(target), None) => (Direction::To, target),
            (None, None) => (Direction::To, DEFAULT_ANCHOR.to_string()),
        };
        let anchor = Input::parse(&raw, &documents);
        let report =
            LinkReport::collect(&bindings, direction, raw.as_str(), anchor.as_resolvable())?;

        // 4. Render
        let format = self
            .format
            .map_or_else(|| config.output_format(), ConfigFormat::from);
        println!("{}", format.create_formatter().format(&report)?);

        Ok(())
    }
}
