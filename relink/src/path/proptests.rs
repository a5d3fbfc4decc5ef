//! Property-based tests for path handling.
//!
//! Note: The normalize, relative and resolver modules carry their own quick
//! property tests. This module runs the heavier cross-module checks.

use super::normalize::{basename, dirname, resolve_components, resolve_posix};
use super::relative::relative;
use super::resolve;
use crate::DocumentSet;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

fn messy_input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            path_component_strategy(),
        ],
        1..10,
    )
    .prop_map(|parts| parts.join("/"))
}

// Inputs resolved against the current document; absolute inputs pass through
fn relative_input_strategy() -> impl Strategy<Value = String> {
    messy_input_strategy().prop_map(|s| s.trim_start_matches('/').to_string())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(input in messy_input_strategy()) {
        let once = resolve_components(&input);
        let twice = resolve_components(&once);
        prop_assert_eq!(once, twice);
    }

    // dirname + basename reassemble a normalized key
    #[test]
    fn dirname_basename_reassemble(key in key_strategy()) {
        let dir = dirname(&key);
        let name = basename(&key);
        let joined = resolve_posix(&[&dir, name]);
        prop_assert_eq!(joined, format!("/{key}"));
    }

    // relative(A, B) is empty exactly when A and B normalize to the same directory
    #[test]
    fn relative_empty_iff_same(a in messy_input_strategy(), b in messy_input_strategy()) {
        let same = resolve_components(&a) == resolve_components(&b);
        prop_assert_eq!(relative(&a, &b).is_empty(), same);
    }

    // A relative path never starts or ends with a separator
    #[test]
    fn relative_has_no_outer_separators(a in messy_input_strategy(), b in messy_input_strategy()) {
        let rel = relative(&a, &b);
        prop_assert!(!rel.starts_with('/'));
        prop_assert!(!rel.ends_with('/'));
    }

    // Resolving a relative input never escapes the virtual root
    #[test]
    fn resolution_stays_inside_root(current in key_strategy(), input in relative_input_strategy()) {
        let docs: DocumentSet<()> = DocumentSet::new();
        let resolved = resolve(&current, &docs, input.as_str()).unwrap();
        prop_assert!(!resolved.split('/').any(|segment| segment == ".."));
    }

    // An absolute input only loses its leading slash, whatever the current document
    #[test]
    fn absolute_input_passes_through(current in key_strategy(), rest in messy_input_strategy()) {
        let docs: DocumentSet<()> = DocumentSet::new();
        let input = format!("/{rest}");
        let resolved = resolve(&current, &docs, input.as_str()).unwrap();
        prop_assert_eq!(resolved, rest);
    }
}
