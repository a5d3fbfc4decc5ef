#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # relink
//!
//! A library for computing relative links between the documents of a
//! static-site build.
//!
//! Documents live in a [`DocumentSet`] keyed by site-relative path. A
//! [`Linker`] bound to one of them turns paths, directories and document
//! handles into the shortest relative link between two points of the site,
//! and post-processes it so that `.md` sources link to their `.html` output
//! and `index.html` collapses to its directory.
//!
//! ## Core Types
//!
//! - [`DocumentSet`]: documents keyed by path, with identity lookup
//! - [`Resolvable`] and [`resolve`]: canonical path resolution
//! - [`Linker`], [`LinkOptions`] and [`LinkTransform`]: link computation
//! - [`Binder`] and [`Bindings`]: attaching linkers to selected documents
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use relink::{DocumentSet, LinkOptions, Linker};
//! use std::sync::Arc;
//!
//! let image = Arc::new("image bytes");
//! let docs = Arc::new(
//!     [
//!         ("a/test/file.html", Arc::new("page")),
//!         ("a/test/child/image.gif", Arc::clone(&image)),
//!     ]
//!     .into_iter()
//!     .collect::<DocumentSet<_>>(),
//! );
//!
//! let link = Linker::bind(&docs, "a/test/file.html", Arc::new(LinkOptions::default())).unwrap();
//! assert_eq!(link.to(&image).unwrap(), "child/image.gif");
//! assert_eq!(link.to("/index.md").unwrap(), "../../");
//! assert_eq!(link.resolve("../").unwrap(), "a/");
//! ```

pub mod binder;
pub mod config;
pub mod document;
pub mod error;
pub mod link;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use binder::{Binder, Bindings, MatchOptions, PathMatcher};
pub use config::{Config, ConfigBuilder};
pub use document::DocumentSet;
pub use error::{Error, Result};
pub use link::{LinkOptions, LinkTransform, Linker};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{resolve, Resolvable, Resolver};
