//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading, building the document set from `--document` and `--manifest`,
//! and interpreting command-line inputs as paths or document handles.

use crate::error::CliError;
use relink::path::normalize::{resolve_components, strip_root};
use relink::{Config, ConfigBuilder, DocumentSet, Linker, Logger, Resolvable};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Prefix marking an input as a document handle.
pub const HANDLE_PREFIX: char = '@';

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Document paths given on the command line.
    pub documents: Vec<String>,

    /// File listing one document path per line.
    pub manifest: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logger honoring `--verbose`, `--quiet` and `RELINK_LOG_MODE`.
    pub fn logger(&self) -> Logger {
        relink::init_logger(self.verbose, self.quiet)
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file, or a discovered `relink.yaml`
/// 3. The user configuration
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The payload carried by document handles in the CLI.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path the document was registered under.
    pub path: String,
}

/// Normalize a user-supplied document path to a document-set key.
///
/// `./a/../b.md` and `/b.md` both become `b.md`.
pub fn normalize_document_path(raw: &str) -> Result<String, CliError> {
    let normalized = resolve_components(raw.trim());
    let key = strip_root(&normalized);

    if key.is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "document path '{raw}' does not name a document"
        )));
    }

    Ok(key.to_string())
}

/// Read document paths from a manifest file.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn read_manifest(path: &Path) -> Result<Vec<String>, CliError> {
    let contents = fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Build the document set from `--document` and `--manifest`.
///
/// When `current` is given it is added to the set if absent.
pub fn load_documents(
    global: &GlobalOptions,
    current: Option<&str>,
) -> Result<Arc<DocumentSet<SourceDocument>>, CliError> {
    let mut raw_paths = global.documents.clone();
    if let Some(ref manifest) = global.manifest {
        raw_paths.extend(read_manifest(manifest)?);
    }
    if let Some(current) = current {
        raw_paths.push(current.to_string());
    }

    let mut documents = DocumentSet::new();
    for raw in &raw_paths {
        let key = normalize_document_path(raw)?;
        if !documents.contains(&key) {
            let handle = Arc::new(SourceDocument { path: key.clone() });
            documents.insert(key, handle);
        }
    }

    global
        .logger()
        .debug(&format!("Loaded {} documents", documents.len()));

    Ok(Arc::new(documents))
}

/// Bind a linker to `current` using the configured link options.
pub fn bind_linker(
    global: &GlobalOptions,
    current: &str,
) -> Result<Linker<SourceDocument>, CliError> {
    let config = load_configuration(global)?;
    let current = normalize_document_path(current)?;
    let documents = load_documents(global, Some(&current))?;

    Ok(Linker::bind(
        &documents,
        &current,
        Arc::new(config.link_options()),
    )?)
}

/// A command-line input: either a path string or a document handle.
#[derive(Debug)]
pub enum Input {
    /// A path, resolved relative to the current document.
    Path(String),
    /// A handle named with `@key`.
    Handle {
        /// The input as typed.
        label: String,
        /// The handle; unregistered when `key` is not in the set.
        handle: Arc<SourceDocument>,
    },
}

impl Input {
    /// Interpret `raw` against `documents`.
    ///
    /// `@key` yields the handle registered at `key`. An unknown key yields a
    /// fresh handle that is not part of the set.
    pub fn parse(raw: &str, documents: &DocumentSet<SourceDocument>) -> Self {
        let Some(key) = raw.strip_prefix(HANDLE_PREFIX) else {
            return Self::Path(raw.to_string());
        };

        let key = strip_root(&resolve_components(key)).to_string();
        let handle = documents
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Arc::new(SourceDocument { path: key }));

        Self::Handle {
            label: raw.to_string(),
            handle,
        }
    }

    /// Borrow as a resolvable input.
    pub fn as_resolvable(&self) -> Resolvable<'_, SourceDocument> {
        match self {
            Self::Path(path) => Resolvable::from(path),
            Self::Handle { handle, .. } => Resolvable::from(handle),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.write_str(path),
            Self::Handle { label, .. } => f.write_str(label),
        }
    }
}
