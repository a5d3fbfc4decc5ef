//! Configuration validation.

use crate::binder::PathMatcher;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use relink::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { link_property: Some(" ".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref property) = config.link_property {
            Self::validate_link_property(property)?;
        }

        if let Some(ref pattern) = config.match_pattern {
            Self::validate_pattern(pattern, config)?;
        }

        if let Some(ref empty_link) = config.empty_link {
            if empty_link.contains('\0') {
                return Err(Error::Validation {
                    field: "empty_link".into(),
                    message: "Cannot contain null bytes".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_link_property(value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: "link_property".into(),
                message: "Cannot be empty".into(),
            });
        }

        if value.chars().any(char::is_whitespace) {
            return Err(Error::Validation {
                field: "link_property".into(),
                message: format!("Cannot contain whitespace: '{value}'"),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: "link_property".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_pattern(pattern: &str, config: &Config) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(Error::Validation {
                field: "match".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        PathMatcher::new(pattern, config.match_options()).map_err(|e| Error::Validation {
            field: "match".into(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}
