//! The document set supplied by a build pass.
//!
//! A [`DocumentSet`] maps canonical, root-relative paths to opaque document
//! handles. Handles are compared by identity only: two handles holding equal
//! data are still different documents. Identity is the address of the shared
//! `Arc` allocation, indexed once when a handle is inserted.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identity key for a document handle.
///
/// Addresses stay unique for as long as the set holds a strong reference to
/// every indexed handle.
fn identity<D>(handle: &Arc<D>) -> usize {
    Arc::as_ptr(handle).cast::<()>() as usize
}

/// Mapping from canonical path to document handle, in insertion order.
///
/// # Examples
///
/// ```
/// use relink::DocumentSet;
/// use std::sync::Arc;
///
/// let page = Arc::new("page");
/// let mut docs = DocumentSet::new();
/// docs.insert("a/test/file.html", Arc::clone(&page));
///
/// assert_eq!(docs.key_of(&page), Some("a/test/file.html"));
/// assert_eq!(docs.key_of(&Arc::new("page")), None);
/// ```
pub struct DocumentSet<D> {
    entries: Vec<(String, Arc<D>)>,
    by_path: HashMap<String, usize>,
    by_identity: HashMap<usize, usize>,
}

impl<D> DocumentSet<D> {
    /// Create an empty document set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_path: HashMap::new(),
            by_identity: HashMap::new(),
        }
    }

    /// Insert a document under `path`.
    ///
    /// Returns the handle previously stored under the same path, if any. The
    /// path keeps its original position when replaced.
    pub fn insert(&mut self, path: impl Into<String>, handle: Arc<D>) -> Option<Arc<D>> {
        let path = path.into();

        if let Some(&index) = self.by_path.get(&path) {
            let previous = std::mem::replace(&mut self.entries[index].1, handle);
            self.rebuild_identity_index();
            return Some(previous);
        }

        let index = self.entries.len();
        // The first key a handle was stored under wins
        self.by_identity.entry(identity(&handle)).or_insert(index);
        self.by_path.insert(path.clone(), index);
        self.entries.push((path, handle));
        None
    }

    fn rebuild_identity_index(&mut self) {
        self.by_identity.clear();
        for (index, (_, handle)) in self.entries.iter().enumerate() {
            self.by_identity.entry(identity(handle)).or_insert(index);
        }
    }

    /// Get the handle stored under `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Arc<D>> {
        self.by_path.get(path).map(|&index| &self.entries[index].1)
    }

    /// Returns true if a document is stored under `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Find the path under which `handle` (by identity) is stored.
    #[must_use]
    pub fn key_of(&self, handle: &Arc<D>) -> Option<&str> {
        self.by_identity
            .get(&identity(handle))
            .map(|&index| self.entries[index].0.as_str())
    }

    /// Number of documents in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the document paths in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    /// Iterate over `(path, handle)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<D>)> {
        self.entries
            .iter()
            .map(|(path, handle)| (path.as_str(), handle))
    }
}

impl<D> Default for DocumentSet<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for DocumentSet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSet")
            .field("paths", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<D, K: Into<String>> FromIterator<(K, Arc<D>)> for DocumentSet<D> {
    fn from_iter<I: IntoIterator<Item = (K, Arc<D>)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (path, handle) in iter {
            set.insert(path, handle);
        }
        set
    }
}
