//! Output formatting for link reports.
//!
//! A [`LinkReport`] lists, for every bound document, the link between it and
//! one fixed anchor. Reports are rendered either as aligned text for people or
//! as JSON for scripts.

mod formatters;

use serde::Serialize;

use crate::binder::Bindings;
use crate::config::OutputFormat;
use crate::path::Resolvable;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for rendering link reports.
pub trait OutputFormatter {
    /// Render `report` as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &LinkReport) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}

/// Which end of each link the anchor sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Links lead from each document to the anchor.
    To,
    /// Links lead from the anchor to each document.
    From,
}

/// One row of a [`LinkReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Path of the bound document.
    pub document: String,
    /// The computed link.
    pub link: String,
}

/// Links between every bound document and a single anchor.
///
/// # Examples
///
/// ```
/// use relink::output::{Direction, LinkReport};
/// use relink::{Binder, DocumentSet, Resolvable};
/// use std::sync::Arc;
///
/// let docs: Arc<DocumentSet<()>> = Arc::new(
///     [("index.md", Arc::new(())), ("blog/post.md", Arc::new(()))]
///         .into_iter()
///         .collect(),
/// );
/// let bindings = Binder::with_defaults().unwrap().bind(&docs).unwrap();
///
/// let report =
///     LinkReport::collect(&bindings, Direction::To, "/", Resolvable::from("/")).unwrap();
/// assert_eq!(report.links[1].link, "../");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Property name the linkers were bound under.
    pub property: String,
    /// Which end the anchor sits at.
    pub direction: Direction,
    /// The anchor as the user named it.
    pub anchor: String,
    /// One entry per bound document, in document-set order.
    pub links: Vec<LinkEntry>,
}

impl LinkReport {
    /// Compute the link between `anchor` and every bound document.
    ///
    /// `label` is how the anchor is shown in the report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableInput`](crate::Error::UnresolvableInput)
    /// if the anchor cannot be resolved.
    pub fn collect<'a, D: 'a>(
        bindings: &Bindings<D>,
        direction: Direction,
        label: impl Into<String>,
        anchor: Resolvable<'a, D>,
    ) -> Result<Self> {
        let links = bindings
            .iter()
            .map(|linker| {
                let link = match direction {
                    Direction::To => linker.to(anchor)?,
                    Direction::From => linker.from(anchor)?,
                };
                Ok(LinkEntry {
                    document: linker.current_path().to_string(),
                    link,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            property: bindings.property().to_string(),
            direction,
            anchor: label.into(),
            links,
        })
    }

    /// Returns true if no document was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
