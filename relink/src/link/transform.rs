//! Post-processing applied to computed links.
//!
//! A [`LinkTransform`] rewrites the raw relative link produced by the
//! [`Linker`](crate::Linker) before it is handed back to the caller. The
//! default transform turns Markdown targets into their HTML output names and
//! hides `index.html`, so links point at directories the way web servers
//! serve them.

use std::fmt;
use std::sync::Arc;

/// Placeholder returned by the default transform when a link would be empty.
pub const DEFAULT_EMPTY_LINK: &str = "./";

/// Signature of a custom link transform.
///
/// Arguments are the assembled link, the resolved `from` path and the
/// resolved `to` path.
pub type ModifyLinksFn = dyn Fn(&str, &str, &str) -> String + Send + Sync;

/// How computed links are post-processed.
#[derive(Clone, Default)]
pub enum LinkTransform {
    /// Apply [`default_modify_links`] with the configured empty link.
    #[default]
    Default,
    /// Return links unmodified.
    Identity,
    /// Apply a caller-supplied function.
    Custom(Arc<ModifyLinksFn>),
}

impl LinkTransform {
    /// Wrap a closure as a custom transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::LinkTransform;
    ///
    /// let upper = LinkTransform::custom(|link, _from, _to| link.to_uppercase());
    /// assert!(matches!(upper, LinkTransform::Custom(_)));
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, &str, &str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }
}

impl fmt::Debug for LinkTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Identity => f.write_str("Identity"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options shared by every linker created from the same configuration.
///
/// # Examples
///
/// ```
/// use relink::{LinkOptions, LinkTransform};
///
/// let options = LinkOptions::new().with_empty_link("#");
/// assert_eq!(options.apply("index.html", "a", "index.html"), "#");
///
/// let raw = LinkOptions::new().with_transform(LinkTransform::Identity);
/// assert_eq!(raw.apply("index.html", "a", "index.html"), "index.html");
/// ```
#[derive(Debug, Clone)]
pub struct LinkOptions {
    empty_link: String,
    transform: LinkTransform,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            empty_link: DEFAULT_EMPTY_LINK.to_string(),
            transform: LinkTransform::Default,
        }
    }
}

impl LinkOptions {
    /// Create options with the default transform and empty link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder used by the default transform for empty links.
    #[must_use]
    pub fn with_empty_link(mut self, empty_link: impl Into<String>) -> Self {
        self.empty_link = empty_link.into();
        self
    }

    /// Set the link transform.
    #[must_use]
    pub fn with_transform(mut self, transform: LinkTransform) -> Self {
        self.transform = transform;
        self
    }

    /// The placeholder used for empty links.
    #[must_use]
    pub fn empty_link(&self) -> &str {
        &self.empty_link
    }

    /// The configured transform.
    #[must_use]
    pub fn transform(&self) -> &LinkTransform {
        &self.transform
    }

    /// Apply the configured transform to an assembled link.
    #[must_use]
    pub fn apply(&self, link: &str, from: &str, to: &str) -> String {
        match &self.transform {
            LinkTransform::Default => default_modify_links(link, &self.empty_link),
            LinkTransform::Identity => link.to_string(),
            LinkTransform::Custom(f) => f(link, from, to),
        }
    }
}

/// The default link rewrite.
///
/// 1. A trailing `.md` becomes `.html`.
/// 2. A trailing `index.html` is removed when it is a whole segment (at the
///    start, or after `/` or `\`).
/// 3. A result that is empty or exactly `/` becomes `empty_link`.
///
/// # Examples
///
/// ```
/// use relink::link::default_modify_links;
///
/// assert_eq!(default_modify_links("folder/file.md", "./"), "folder/file.html");
/// assert_eq!(default_modify_links("folder/index.md", "./"), "folder/");
/// assert_eq!(default_modify_links("index.html", "./"), "./");
/// assert_eq!(default_modify_links("myindex.html", "./"), "myindex.html");
/// ```
#[must_use]
pub fn default_modify_links(uri: &str, empty_link: &str) -> String {
    let mut uri = match uri.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => uri.to_string(),
    };

    let keep = uri
        .strip_suffix("index.html")
        .filter(|prefix| prefix.is_empty() || prefix.ends_with('/') || prefix.ends_with('\\'))
        .map(str::len);
    if let Some(len) = keep {
        uri.truncate(len);
    }

    if uri.is_empty() || uri == "/" {
        return empty_link.to_string();
    }

    uri
}
