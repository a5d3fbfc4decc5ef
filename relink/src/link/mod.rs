//! Relative link computation.
//!
//! This module contains the [`Linker`], which turns two resolvable inputs
//! into the shortest relative link between them, and the [`LinkTransform`]
//! post-processing applied to every link it produces.
//!
//! # Algorithm
//!
//! 1. Both ends are resolved to canonical paths.
//! 2. Each end is split into a directory part and, for files, a basename.
//!    A path ending in `/` is its own directory and has no basename.
//! 3. The POSIX relative path between the two directories is computed.
//! 4. When that path is non-empty a `/` is appended, then the basename.
//! 5. The configured transform rewrites the result.

mod linker;
mod transform;

pub use linker::Linker;
pub use transform::{
    default_modify_links, LinkOptions, LinkTransform, ModifyLinksFn, DEFAULT_EMPTY_LINK,
};
