//! Configuration schema definitions.
//!
//! This module defines the configuration structure for relink: which
//! documents receive a linker, the property name it is exposed under, and how
//! computed links are post-processed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::binder::{MatchOptions, DEFAULT_LINK_PROPERTY, DEFAULT_PATTERN};
use crate::link::{LinkOptions, LinkTransform, DEFAULT_EMPTY_LINK};

/// Complete configuration structure.
///
/// Every field is optional so configurations from several sources can be
/// layered; the accessor methods fill in defaults for unset fields.
///
/// # Examples
///
/// ```
/// use relink::config::Config;
///
/// let config = Config {
///     link_property: Some("relative".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.link_property(), "relative");
/// assert_eq!(config.match_pattern(), "**/*");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Property name under which linkers are exposed.
    pub link_property: Option<String>,

    /// Glob pattern selecting the documents that receive a linker.
    #[serde(rename = "match")]
    pub match_pattern: Option<String>,

    /// Options for the match pattern.
    pub match_options: Option<MatchConfig>,

    /// Placeholder used by the default transform for empty links.
    pub empty_link: Option<String>,

    /// Link post-processing mode.
    pub modify_links: Option<ModifyLinks>,

    /// Output format for commands that print reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured property name, or `link`.
    #[must_use]
    pub fn link_property(&self) -> &str {
        self.link_property.as_deref().unwrap_or(DEFAULT_LINK_PROPERTY)
    }

    /// The configured match pattern, or `**/*`.
    #[must_use]
    pub fn match_pattern(&self) -> &str {
        self.match_pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }

    /// The configured match options with unset flags turned off.
    #[must_use]
    pub fn match_options(&self) -> MatchOptions {
        self.match_options
            .as_ref()
            .map(MatchConfig::resolve)
            .unwrap_or_default()
    }

    /// The configured empty link, or `./`.
    #[must_use]
    pub fn empty_link(&self) -> &str {
        self.empty_link.as_deref().unwrap_or(DEFAULT_EMPTY_LINK)
    }

    /// The configured link post-processing mode.
    #[must_use]
    pub fn modify_links(&self) -> ModifyLinks {
        self.modify_links.unwrap_or_default()
    }

    /// Link options built from `empty_link` and `modify_links`.
    #[must_use]
    pub fn link_options(&self) -> LinkOptions {
        LinkOptions::new()
            .with_empty_link(self.empty_link())
            .with_transform(self.modify_links().into())
    }

    /// The configured output format, or human-readable output.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Match option flags as they appear in configuration files.
///
/// # Examples
///
/// ```
/// use relink::config::MatchConfig;
///
/// let config: MatchConfig = serde_yaml::from_str("dot: true").unwrap();
/// assert!(config.resolve().dot);
/// assert!(!config.resolve().nocase);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    /// Let wildcards match segments starting with `.`.
    pub dot: Option<bool>,
    /// Match case-insensitively.
    pub nocase: Option<bool>,
    /// Match slash-free patterns against the final path segment.
    pub match_base: Option<bool>,
}

impl MatchConfig {
    /// Convert to matcher options, treating unset flags as `false`.
    #[must_use]
    pub fn resolve(&self) -> MatchOptions {
        MatchOptions {
            dot: self.dot.unwrap_or(false),
            nocase: self.nocase.unwrap_or(false),
            match_base: self.match_base.unwrap_or(false),
        }
    }
}

/// Link post-processing mode.
///
/// Configuration files cannot carry functions, so the only choices are the
/// default rewrite and no rewrite at all. `default` (or `false`, or an empty
/// value) selects the default rewrite; any other value disables
/// post-processing.
///
/// # Examples
///
/// ```
/// use relink::config::ModifyLinks;
///
/// let default: ModifyLinks = serde_yaml::from_str("default").unwrap();
/// let none: ModifyLinks = serde_yaml::from_str("none").unwrap();
/// let other: ModifyLinks = serde_yaml::from_str("true").unwrap();
///
/// assert_eq!(default, ModifyLinks::Default);
/// assert_eq!(none, ModifyLinks::Identity);
/// assert_eq!(other, ModifyLinks::Identity);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModifyLinks {
    /// Rewrite `.md` to `.html` and hide `index.html`.
    #[default]
    Default,
    /// Return links unmodified.
    Identity,
}

impl ModifyLinks {
    /// Interpret a textual setting (as found in environment variables).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "default" | "false" => Self::Default,
            _ => Self::Identity,
        }
    }

    /// The canonical textual form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Identity => "none",
        }
    }
}

impl From<ModifyLinks> for LinkTransform {
    fn from(mode: ModifyLinks) -> Self {
        match mode {
            ModifyLinks::Default => LinkTransform::Default,
            ModifyLinks::Identity => LinkTransform::Identity,
        }
    }
}

impl Serialize for ModifyLinks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModifyLinks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Flag(bool),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Helper::deserialize(deserializer)? {
            Helper::Flag(false) => ModifyLinks::Default,
            Helper::Text(text) => ModifyLinks::parse(&text),
            Helper::Flag(true) | Helper::Other(_) => ModifyLinks::Identity,
        })
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable aligned text.
    #[default]
    Human,
    /// JSON document.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.link_property(), "link");
        assert_eq!(config.match_pattern(), "**/*");
        assert_eq!(config.match_options(), MatchOptions::default());
        assert_eq!(config.empty_link(), "./");
        assert_eq!(config.modify_links(), ModifyLinks::Default);
        assert_eq!(config.output_format(), OutputFormat::Human);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
link_property: rel
match: "**/*.md"
match_options:
  dot: true
  nocase: false
empty_link: "#"
modify_links: none
output_format: json
"##;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.link_property(), "rel");
        assert_eq!(config.match_pattern(), "**/*.md");
        assert!(config.match_options().dot);
        assert!(!config.match_options().match_base);
        assert_eq!(config.empty_link(), "#");
        assert_eq!(config.modify_links(), ModifyLinks::Identity);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("linkProperty: x\n");
        assert!(result.is_err());

        let result: Result<Config, _> = serde_yaml::from_str("match_options:\n  dots: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_modify_links_values() {
        let parse = |s: &str| serde_yaml::from_str::<ModifyLinks>(s).unwrap();
        assert_eq!(parse("default"), ModifyLinks::Default);
        assert_eq!(parse("DEFAULT"), ModifyLinks::Default);
        assert_eq!(parse("false"), ModifyLinks::Default);
        assert_eq!(parse("''"), ModifyLinks::Default);
        assert_eq!(parse("none"), ModifyLinks::Identity);
        assert_eq!(parse("true"), ModifyLinks::Identity);
        assert_eq!(parse("42"), ModifyLinks::Identity);
        assert_eq!(parse("[a, b]"), ModifyLinks::Identity);
        assert_eq!(parse("{ fn: x }"), ModifyLinks::Identity);
    }

    #[test]
    fn test_modify_links_structured_value_in_config() {
        let yaml = "modify_links:\n  transform: slugify\n  keep: [md, html]\nempty_link: x\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.modify_links(), ModifyLinks::Identity);
        assert_eq!(config.empty_link(), "x");
    }

    #[test]
    fn test_modify_links_serializes_canonically() {
        let config = Config {
            modify_links: Some(ModifyLinks::Identity),
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("modify_links: none"));

        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_link_options_honor_empty_link() {
        let config = Config {
            empty_link: Some("#".into()),
            ..Config::default()
        };
        let options = config.link_options();
        assert_eq!(options.empty_link(), "#");
        assert_eq!(options.apply("index.html", "a", "index.html"), "#");
    }

    #[test]
    fn test_link_options_identity() {
        let config = Config {
            modify_links: Some(ModifyLinks::Identity),
            ..Config::default()
        };
        assert!(matches!(
            config.link_options().transform(),
            LinkTransform::Identity
        ));
    }

    #[test]
    fn test_match_key_is_renamed() {
        let config = Config {
            match_pattern: Some("*.md".into()),
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("match: "));
    }
}
