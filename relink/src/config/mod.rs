//! Configuration system for relink.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `relink.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RELINK_*`)
//! 3. Private project config (`relink.local.yaml`)
//! 4. Project config (`relink.yaml`), or an explicitly named file
//! 5. User config (`~/.relink/config.yaml`)
//! 6. Built-in defaults
//!
//! # File format
//!
//! ```yaml
//! link_property: link
//! match: "**/*"
//! match_options: { dot: false, nocase: false, match_base: false }
//! empty_link: "./"
//! modify_links: default
//! ```
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use relink::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/site"))
//!     .build()
//!     .unwrap();
//!
//! println!("Binding documents matching {}", config.match_pattern());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, MatchConfig, ModifyLinks, OutputFormat};
pub use validator::ConfigValidator;
