//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use relink::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         empty_link: Some("#".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.empty_link(), "#");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load this file instead of discovering `relink.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Read the user configuration from `dir/config.yaml` instead of
    /// `~/.relink/config.yaml`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `RELINK_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the merged configuration fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else if let Some(ref path) = self.config_file {
            ConfigLoader::load_explicit(path, self.user_dir.as_deref())?
        } else {
            let working_dir = match self.working_dir {
                Some(ref dir) => dir.clone(),
                None => env::current_dir()?,
            };
            ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?
        };

        for source in &sources {
            log::debug!("Using configuration {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_file_is_discovered() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "link_property: rel\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.link_property(), "rel");
    }

    #[test]
    fn test_project_overrides_user() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join("config.yaml"), "empty_link: user\nmatch: '*.md'\n").unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "empty_link: project\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.empty_link(), "project");
        assert_eq!(config.match_pattern(), "*.md");
    }

    #[test]
    fn test_explicit_file_replaces_discovery() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "empty_link: discovered\n").unwrap();
        let explicit = project.path().join("other.yaml");
        fs::write(&explicit, "link_property: other\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_config_file(&explicit)
            .with_user_dir(user.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.link_property(), "other");
        assert_eq!(config.empty_link(), "./");
    }

    #[test]
    fn test_programmatic_overrides_win() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "empty_link: file\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .skip_env()
            .with_config(Config {
                empty_link: Some("code".into()),
                ..Config::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.empty_link(), "code");
    }

    #[test]
    fn test_invalid_merged_config_is_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                link_property: Some("two words".into()),
                ..Config::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
