//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, MatchConfig, ModifyLinks, OutputFormat};
use proptest::prelude::*;

fn match_config_strategy() -> impl Strategy<Value = MatchConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(dot, nocase, match_base)| MatchConfig {
            dot,
            nocase,
            match_base,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("link_[a-z]{1,8}"),
        prop::option::of(prop_oneof![
            Just("**/*".to_string()),
            Just("**/*.md".to_string()),
            Just("blog/*".to_string()),
        ]),
        prop::option::of(match_config_strategy()),
        prop::option::of(prop_oneof![
            Just("./".to_string()),
            Just("#".to_string()),
            Just(String::new()),
        ]),
        prop::option::of(prop_oneof![
            Just(ModifyLinks::Default),
            Just(ModifyLinks::Identity),
        ]),
        prop::option::of(prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]),
    )
        .prop_map(
            |(link_property, match_pattern, match_options, empty_link, modify_links, output_format)| {
                Config {
                    link_property,
                    match_pattern,
                    match_options,
                    empty_link,
                    modify_links,
                    output_format,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher-precedence config always win
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.link_property.as_ref(), high.link_property.as_ref().or(low.link_property.as_ref()));
        prop_assert_eq!(result.match_pattern.as_ref(), high.match_pattern.as_ref().or(low.match_pattern.as_ref()));
        prop_assert_eq!(result.empty_link.as_ref(), high.empty_link.as_ref().or(low.empty_link.as_ref()));
        prop_assert_eq!(result.modify_links, high.modify_links.or(low.modify_links));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging the same config twice is the same as merging it once
    #[test]
    fn config_merge_idempotent(base in config_strategy(), overlay in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &overlay);

        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &overlay);

        prop_assert_eq!(once, twice);
    }

    // Match flags merge independently of each other
    #[test]
    fn match_options_merge_per_flag(low in match_config_strategy(), high in match_config_strategy()) {
        let mut result = Config { match_options: Some(low.clone()), ..Config::default() };
        ConfigMerger::merge_into(&mut result, &Config { match_options: Some(high.clone()), ..Config::default() });

        let merged = result.match_options.unwrap_or_default();
        prop_assert_eq!(merged.dot, high.dot.or(low.dot));
        prop_assert_eq!(merged.nocase, high.nocase.or(low.nocase));
        prop_assert_eq!(merged.match_base, high.match_base.or(low.match_base));
    }

    // Every generated config survives a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
