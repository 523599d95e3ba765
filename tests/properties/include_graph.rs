//! Property tests for include resolution.

use proptest::prelude::*;

use brainc::domain::services::{IncludeResolver, ResolveError, UnitRegistry, MAX_INCLUDE_DEPTH};
use brainc::{UnitDef, UnitKind};

/// brain → f1 → f2 → ... → f{depth}
fn chain(depth: usize) -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    for i in 1..=depth {
        let mut fragment = UnitDef::new(UnitKind::Include, format!("f{}", i), "fragment")
            .with_build(move |b| {
                b.guideline(format!("from-f{}", i)).text("x");
            });
        if i < depth {
            fragment = fragment.with_include(format!("f{}", i + 1));
        }
        registry.register(fragment).unwrap();
    }
    registry
        .register(UnitDef::new(UnitKind::Brain, "brain", "Project").with_include("f1"))
        .unwrap();
    registry
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: chains up to the limit resolve; deeper ones never do.
    #[test]
    fn property_depth_limit(depth in 1usize..=(MAX_INCLUDE_DEPTH + 8)) {
        let registry = chain(depth);
        let result = IncludeResolver::new(&registry).resolve_all();

        if depth <= MAX_INCLUDE_DEPTH {
            let merged = result.unwrap();
            prop_assert_eq!(merged.len(), 1);
            prop_assert_eq!(merged[0].fragments.len(), depth);
            // post-order: the deepest fragment contributes first
            let first = &merged[0].ast.guidelines[0].id;
            prop_assert_eq!(first, &format!("from-f{}", depth));
        } else {
            match result.unwrap_err() {
                ResolveError::DepthExceeded { max, chain } => {
                    prop_assert_eq!(max, MAX_INCLUDE_DEPTH);
                    prop_assert_eq!(chain.len(), MAX_INCLUDE_DEPTH + 2);
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
    }

    /// PROPERTY: any cycle is reported with the chain that closes it.
    #[test]
    fn property_cycles_are_detected(len in 1usize..12) {
        let mut registry = UnitRegistry::new();
        for i in 0..len {
            registry
                .register(
                    UnitDef::new(UnitKind::Include, format!("c{}", i), "cycle")
                        .with_include(format!("c{}", (i + 1) % len)),
                )
                .unwrap();
        }
        registry
            .register(UnitDef::new(UnitKind::Brain, "brain", "Project").with_include("c0"))
            .unwrap();

        let err = IncludeResolver::new(&registry).resolve_all().unwrap_err();

        prop_assert_eq!(err.code(), "cycle_detected");
        let chain = err.chain();
        prop_assert_eq!(chain.first().map(String::as_str), Some("brain"));
        prop_assert_eq!(chain.last().map(String::as_str), Some("c0"));
        prop_assert_eq!(chain.len(), len + 2);
    }

    /// PROPERTY: including a fragment n times yields n copies of its guidelines.
    #[test]
    fn property_merge_keeps_duplicates(times in 1usize..6) {
        let mut registry = UnitRegistry::new();
        registry
            .register(UnitDef::new(UnitKind::Include, "core", "Core").with_build(|b| {
                b.guideline("shared").text("x");
            }))
            .unwrap();
        let includes: Vec<String> = std::iter::repeat("core".to_string()).take(times).collect();
        registry
            .register(UnitDef::new(UnitKind::Agent, "a", "Agent").with_includes(includes))
            .unwrap();

        let merged = IncludeResolver::new(&registry).resolve_all().unwrap();

        prop_assert_eq!(merged[0].ast.guidelines.len(), times);
        prop_assert_eq!(merged[0].fragments.len(), times);
    }
}
