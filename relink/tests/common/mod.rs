//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for document sets shaped like a
//! small static site.

use std::sync::Arc;

use relink::{DocumentSet, LinkOptions, Linker};

/// A document as a build pipeline might carry it.
#[derive(Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub struct Page {
    pub title: &'static str,
}

/// Builder for document sets with sensible defaults.
///
/// Handles are kept so tests can link to documents by identity.
#[allow(dead_code)]
#[derive(Default)]
pub struct SiteFixture {
    pages: Vec<(&'static str, Arc<Page>)>,
}

#[allow(dead_code)]
impl SiteFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two-document site most scenarios are written against.
    pub fn standard() -> Self {
        Self::new()
            .with_page("a/test/file.html", "File")
            .with_page("a/test/child/image.gif", "Image")
    }

    /// A blog-like layout with index pages and Markdown sources.
    pub fn blog() -> Self {
        Self::new()
            .with_page("index.md", "Home")
            .with_page("about.md", "About")
            .with_page("blog/index.md", "Blog")
            .with_page("blog/2024/first-post.md", "First post")
            .with_page("blog/2024/second-post.md", "Second post")
            .with_page("assets/logo.png", "Logo")
            .with_page(".git/HEAD", "Git head")
    }

    pub fn with_page(mut self, path: &'static str, title: &'static str) -> Self {
        self.pages.push((path, Arc::new(Page { title })));
        self
    }

    /// Handle of the page stored at `path`.
    pub fn handle(&self, path: &str) -> Arc<Page> {
        self.pages
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, h)| Arc::clone(h))
            .unwrap_or_else(|| panic!("no page at {path}"))
    }

    pub fn build(&self) -> Arc<DocumentSet<Page>> {
        Arc::new(
            self.pages
                .iter()
                .map(|(p, h)| (*p, Arc::clone(h)))
                .collect(),
        )
    }
}

/// Bind a linker with default options.
#[allow(dead_code)]
pub fn linker_for(docs: &Arc<DocumentSet<Page>>, path: &str) -> Linker<Page> {
    Linker::bind(docs, path, Arc::new(LinkOptions::default())).unwrap()
}
