//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `RELINK_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, ModifyLinks};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |----------|-------|
/// | `RELINK_LINK_PROPERTY` | `link_property` |
/// | `RELINK_MATCH` | `match` |
/// | `RELINK_MATCH_DOT` | `match_options.dot` |
/// | `RELINK_MATCH_NOCASE` | `match_options.nocase` |
/// | `RELINK_MATCH_BASE` | `match_options.match_base` |
/// | `RELINK_EMPTY_LINK` | `empty_link` |
/// | `RELINK_MODIFY_LINKS` | `modify_links` |
///
/// # Examples
///
/// ```no_run
/// use relink::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(property) = env::var("RELINK_LINK_PROPERTY") {
            config.link_property = Some(property);
        }

        if let Ok(pattern) = env::var("RELINK_MATCH") {
            config.match_pattern = Some(pattern);
        }

        Self::apply_match_overrides(config)?;

        if let Ok(empty_link) = env::var("RELINK_EMPTY_LINK") {
            config.empty_link = Some(empty_link);
        }

        if let Ok(mode) = env::var("RELINK_MODIFY_LINKS") {
            config.modify_links = Some(ModifyLinks::parse(&mode));
        }

        Ok(())
    }

    fn apply_match_overrides(config: &mut Config) -> Result<()> {
        let mut options = config.match_options.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(val) = env::var("RELINK_MATCH_DOT") {
            options.dot = Some(Self::parse_bool("RELINK_MATCH_DOT", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("RELINK_MATCH_NOCASE") {
            options.nocase = Some(Self::parse_bool("RELINK_MATCH_NOCASE", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("RELINK_MATCH_BASE") {
            options.match_base = Some(Self::parse_bool("RELINK_MATCH_BASE", &val)?);
            modified = true;
        }

        if modified {
            config.match_options = Some(options);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}


#[cfg(all(test, feature = "property-tests"))]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_bool_parsing_case_insensitive(value in any::<bool>(), upper in any::<bool>()) {
            let variants: &[&str] = if value {
                &["true", "1", "yes", "on"]
            } else {
                &["false", "0", "no", "off"]
            };

            for variant in variants {
                let input = if upper { variant.to_uppercase() } else { (*variant).to_string() };
                prop_assert_eq!(EnvironmentConfig::parse_bool("test", &input).unwrap(), value);
            }
        }

        #[test]
        fn prop_bool_parsing_rejects_invalid(s in "[a-z]{2,8}") {
            prop_assume!(!["true", "false", "yes", "no", "on", "off"].contains(&s.as_str()));
            prop_assert!(EnvironmentConfig::parse_bool("test", &s).is_err());
        }
    }
}
