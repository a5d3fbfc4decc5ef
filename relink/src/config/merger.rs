//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, MatchConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use relink::config::{Config, ConfigMerger};
///
/// let low = Config { empty_link: Some("./".to_string()), ..Default::default() };
/// let high = Config { empty_link: Some("#".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.empty_link, Some("#".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Match options: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.link_property.is_some() {
            target.link_property.clone_from(&source.link_property);
        }

        if source.match_pattern.is_some() {
            target.match_pattern.clone_from(&source.match_pattern);
        }

        if source.empty_link.is_some() {
            target.empty_link.clone_from(&source.empty_link);
        }

        if source.modify_links.is_some() {
            target.modify_links = source.modify_links;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_match) = source.match_options {
            target.match_options = Some(match &target.match_options {
                Some(target_match) => Self::merge_match_options(target_match, source_match),
                None => source_match.clone(),
            });
        }
    }

    fn merge_match_options(target: &MatchConfig, source: &MatchConfig) -> MatchConfig {
        MatchConfig {
            dot: source.dot.or(target.dot),
            nocase: source.nocase.or(target.nocase),
            match_base: source.match_base.or(target.match_base),
        }
    }
}
