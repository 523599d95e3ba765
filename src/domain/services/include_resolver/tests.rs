use super::*;
use crate::domain::entities::UnitDef;

fn fragment(id: &str, includes: &[&str]) -> UnitDef {
    let rule_id = format!("{id}-rule");
    let guideline_id = format!("{id}-guideline");
    UnitDef::new(UnitKind::Include, id, format!("Fragment {id}"))
        .with_includes(includes.iter().copied())
        .with_build(move |b| {
            b.rule(rule_id.clone())
                .high()
                .text("text")
                .why("why")
                .on_violation("stop");
            b.guideline(guideline_id.clone()).text("guide");
        })
}

fn brain(includes: &[&str]) -> UnitDef {
    UnitDef::new(UnitKind::Brain, "brain", "Project brain")
        .with_includes(includes.iter().copied())
        .with_build(|b| {
            b.guideline("own").text("root guideline");
        })
}

fn guideline_ids(merged: &MergedAst) -> Vec<&str> {
    merged
        .ast
        .guidelines
        .iter()
        .map(|g| g.id.as_str())
        .collect()
}

#[test]
fn merges_post_order_then_root_content() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("base", &[])).unwrap();
    registry.register(fragment("a", &["base"])).unwrap();
    registry.register(fragment("b", &[])).unwrap();
    let root = registry.register(brain(&["a", "b"])).unwrap();

    let merged = IncludeResolver::new(&registry).resolve(root).unwrap();

    assert_eq!(
        guideline_ids(&merged),
        vec!["base-guideline", "a-guideline", "b-guideline", "own"]
    );
    assert_eq!(merged.fragments, vec!["base", "a", "b"]);
    assert_eq!(merged.kind, UnitKind::Brain);
}

#[test]
fn including_a_fragment_twice_keeps_both_copies() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("core", &[])).unwrap();
    let root = registry.register(brain(&["core", "core"])).unwrap();

    let merged = IncludeResolver::new(&registry).resolve(root).unwrap();

    assert_eq!(
        guideline_ids(&merged),
        vec!["core-guideline", "core-guideline", "own"]
    );
    assert_eq!(merged.ast.rules.len(), 2);
}

#[test]
fn diamond_includes_are_not_cycles() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("shared", &[])).unwrap();
    registry.register(fragment("left", &["shared"])).unwrap();
    registry.register(fragment("right", &["shared"])).unwrap();
    let root = registry.register(brain(&["left", "right"])).unwrap();

    let merged = IncludeResolver::new(&registry).resolve(root).unwrap();

    assert_eq!(merged.fragments, vec!["shared", "left", "shared", "right"]);
}

#[test]
fn cycle_reports_full_chain() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("a", &["b"])).unwrap();
    registry.register(fragment("b", &["a"])).unwrap();
    let root = registry.register(brain(&["a"])).unwrap();

    let err = IncludeResolver::new(&registry).resolve(root).unwrap_err();

    assert_eq!(
        err,
        ResolveError::CycleDetected {
            chain: vec!["brain".into(), "a".into(), "b".into(), "a".into()]
        }
    );
    assert_eq!(err.code(), "cycle_detected");
}

#[test]
fn self_include_is_a_cycle() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("loop", &["loop"])).unwrap();
    let root = registry.register(brain(&["loop"])).unwrap();

    let err = IncludeResolver::new(&registry).resolve(root).unwrap_err();
    assert_eq!(err.chain(), ["brain", "loop", "loop"]);
}

#[test]
fn fragment_sharing_the_root_id_is_not_a_cycle() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("brain", &[])).unwrap();
    let root = registry.register(brain(&["brain"])).unwrap();

    let merged = IncludeResolver::new(&registry).resolve(root).unwrap();
    assert_eq!(merged.fragments, vec!["brain"]);
}

#[test]
fn unknown_include_names_the_chain() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("a", &["missing"])).unwrap();
    let root = registry.register(brain(&["a"])).unwrap();

    let err = IncludeResolver::new(&registry).resolve(root).unwrap_err();

    assert_eq!(
        err,
        ResolveError::UnknownInclude {
            name: "missing".into(),
            chain: vec!["brain".into(), "a".into()]
        }
    );
}

#[test]
fn includes_only_resolve_to_include_units() {
    let mut registry = UnitRegistry::new();
    registry
        .register(UnitDef::new(UnitKind::Agent, "helper", "Agent"))
        .unwrap();
    let root = registry.register(brain(&["helper"])).unwrap();

    let err = IncludeResolver::new(&registry).resolve(root).unwrap_err();
    assert_eq!(err.code(), "unknown_include");
}

fn chain_registry(depth: usize) -> (UnitRegistry, UnitHandle) {
    let mut registry = UnitRegistry::new();
    for i in 1..=depth {
        let includes: Vec<String> = if i < depth {
            vec![format!("f{}", i + 1)]
        } else {
            Vec::new()
        };
        registry
            .register(
                UnitDef::new(UnitKind::Include, format!("f{i}"), "fragment").with_includes(includes),
            )
            .unwrap();
    }
    let root = registry
        .register(UnitDef::new(UnitKind::Brain, "brain", "Project").with_include("f1"))
        .unwrap();
    (registry, root)
}

#[test]
fn depth_255_succeeds() {
    let (registry, root) = chain_registry(MAX_INCLUDE_DEPTH);

    let merged = IncludeResolver::new(&registry).resolve(root).unwrap();
    assert_eq!(merged.fragments.len(), MAX_INCLUDE_DEPTH);
    assert_eq!(merged.fragments.first().map(String::as_str), Some("f255"));
}

#[test]
fn depth_256_fails() {
    let (registry, root) = chain_registry(MAX_INCLUDE_DEPTH + 1);

    let err = IncludeResolver::new(&registry).resolve(root).unwrap_err();

    match err {
        ResolveError::DepthExceeded { chain, max } => {
            assert_eq!(max, 255);
            assert_eq!(chain.len(), 257);
            assert_eq!(chain.first().map(String::as_str), Some("brain"));
            assert_eq!(chain.last().map(String::as_str), Some("f256"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_max_depth() {
    let (registry, root) = chain_registry(3);

    let resolver = IncludeResolver::new(&registry).with_max_depth(2);
    assert_eq!(resolver.resolve(root).unwrap_err().code(), "depth_exceeded");
}

#[test]
fn purpose_defaults_to_description_and_ignores_fragments() {
    let mut registry = UnitRegistry::new();
    registry
        .register(
            UnitDef::new(UnitKind::Include, "core", "Core").with_build(|b| {
                b.purpose("fragment purpose");
            }),
        )
        .unwrap();
    let root = registry
        .register(UnitDef::new(UnitKind::Agent, "a", "Agent description").with_include("core"))
        .unwrap();

    let merged = IncludeResolver::new(&registry).resolve(root).unwrap();
    assert_eq!(merged.ast.purpose.as_deref(), Some("Agent description"));
}

#[test]
fn resolution_is_repeatable() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("core", &[])).unwrap();
    let root = registry.register(brain(&["core"])).unwrap();
    let resolver = IncludeResolver::new(&registry);

    assert_eq!(resolver.resolve(root).unwrap(), resolver.resolve(root).unwrap());
}

#[test]
fn resolve_all_skips_fragments() {
    let mut registry = UnitRegistry::new();
    registry.register(fragment("core", &[])).unwrap();
    registry.register(brain(&["core"])).unwrap();
    registry
        .register(UnitDef::new(UnitKind::Agent, "a", "Agent").with_include("core"))
        .unwrap();

    let all = IncludeResolver::new(&registry).resolve_all().unwrap();
    let ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["brain", "a"]);
}
