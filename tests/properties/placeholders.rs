//! Property tests for placeholder substitution.

use proptest::prelude::*;

use brainc::domain::services::{substitute, EnvSource, RuntimeVars, VariableResolver};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `substitute` never panics, and is the identity without `{{`.
    #[test]
    fn property_substitute_never_panics(text in "(?s).{0,128}") {
        let env = EnvSource::new();
        let runtime = RuntimeVars::new().with("NAME", "value");
        let resolver = VariableResolver::new(&env, &runtime);

        let out = substitute(&text, Some(&resolver), false).unwrap();
        if !text.contains("{{") {
            prop_assert_eq!(out, text);
        }
    }

    /// PROPERTY: outside a compile context puzzle variables render as markers.
    #[test]
    fn property_puzzle_marker(name in "[a-z][a-z0-9_]{0,12}") {
        let text = format!("before {{{{ puzzle.{} }}}} after", name);

        let out = substitute(&text, None, true).unwrap();

        prop_assert_eq!(out, format!("before [puzzle.{}] after", name));
    }

    /// PROPERTY: strict mode fails exactly when a known-shape name is unresolved.
    #[test]
    fn property_strict_reports_the_name(name in "[A-Z][A-Z0-9_]{0,12}") {
        let env = EnvSource::new();
        let runtime = RuntimeVars::new();
        let resolver = VariableResolver::new(&env, &runtime);
        let text = format!("{{{{ {} }}}}", name);

        let err = substitute(&text, Some(&resolver), true).unwrap_err();

        prop_assert_eq!(err.name, name);
    }
}
