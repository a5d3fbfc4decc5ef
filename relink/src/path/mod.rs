//! Logical path handling for site documents.
//!
//! This module provides the path algebra behind relative links: resolving
//! heterogeneous inputs to canonical paths, normalizing against a virtual
//! root, and computing relative paths between directories.
//!
//! # Key Concepts
//!
//! ## Canonical paths
//!
//! A canonical path is root-relative and slash-separated:
//! - it never starts with `/`
//! - `""` is the site root
//! - a trailing `/` means "the directory itself", as opposed to a file
//!
//! ## Normalization
//!
//! Normalization resolves `.` and `..` segments against a virtual root.
//! A `..` at the root is clamped rather than escaping it, so every result
//! stays inside the site.
//!
//! ## Resolvables
//!
//! [`Resolvable`] is the closed set of inputs accepted by the resolver:
//! document handles (matched by identity), the empty string, root-anchored
//! strings, and strings relative to the current document.
//!
//! # Examples
//!
//! ```
//! use relink::path::{Resolver, relative::relative};
//! use relink::DocumentSet;
//!
//! let docs: DocumentSet<()> = DocumentSet::new();
//! let resolver = Resolver::new(&docs, "blog/post.html");
//! assert_eq!(resolver.resolve("../about/").unwrap(), "about/");
//!
//! assert_eq!(relative("/blog", "/about"), "../about");
//! ```

pub mod normalize;
pub mod relative;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::{resolve, Resolver};
pub use types::Resolvable;
