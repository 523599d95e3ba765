use super::*;
use crate::domain::entities::{Operation, OrderingPolicy, Randomness, UnitDef};
use crate::domain::services::include_resolver::IncludeResolver;
use crate::domain::services::registry::UnitRegistry;
use crate::domain::services::variable_resolver::{EnvSource, RuntimeVars};

fn merged(def: UnitDef) -> MergedAst {
    let mut registry = UnitRegistry::new();
    let handle = registry.register(def).unwrap();
    IncludeResolver::new(&registry).resolve(handle).unwrap()
}

fn reviewer() -> MergedAst {
    merged(
        UnitDef::new(UnitKind::Agent, "reviewer", "Reviews diffs").with_build(|b| {
            b.rule("no-secrets")
                .critical()
                .text("Never print secrets")
                .why("Leaks are permanent")
                .on_violation("Stop and redact");
            b.guideline("flow")
                .text("Review in phases")
                .example("")
                .phase("scan", "Read {{ PROJECT_DIR }}")
                .phase("report", Operation::report("findings"));
            b.style().tone("direct");
            b.determinism()
                .ordering(OrderingPolicy::Stable)
                .randomness(Randomness::Off);
        }),
    )
}

fn runtime() -> RuntimeVars {
    RuntimeVars::new().with("PROJECT_DIR", "/work")
}

#[test]
fn markup_layout() {
    let env = EnvSource::new();
    let runtime = runtime();
    let renderer =
        Renderer::new(Format::Xml).with_variables(VariableResolver::new(&env, &runtime));

    let doc = renderer.render(&reviewer()).unwrap();

    let expected = "\
<system>
<purpose>Reviews diffs</purpose>

<rules>
<rule id=\"no-secrets\" severity=\"critical\">
<text>Never print secrets</text>
<why>Leaks are permanent</why>
<on_violation>Stop and redact</on_violation>
</rule>
</rules>

<guidelines>
<guideline id=\"flow\">
<text>Review in phases</text>
<examples>
<example>
<phase id=\"scan\">Read /work</phase>
<phase id=\"report\">REPORT(findings)</phase>
</example>
</examples>
</guideline>
</guidelines>

<style>
<tone>direct</tone>
</style>

<determinism>
<ordering>stable</ordering>
<randomness>off</randomness>
</determinism>
</system>
";
    assert_eq!(doc.content, expected);
    assert_eq!(doc.format, Format::Xml);
}

#[test]
fn markup_self_closes_empty_elements_and_escapes() {
    let doc = Renderer::new(Format::Xml)
        .render(&merged(
            UnitDef::new(UnitKind::Command, "c", "a < b & \"c\"").with_build(|b| {
                b.guideline("bare");
                b.guideline("examples").example("").key("empty");
                b.response().section("Summary", "", true);
            }),
        ))
        .unwrap();

    assert!(doc.content.contains("<purpose>a &lt; b &amp; \"c\"</purpose>"));
    assert!(doc.content.contains("<guideline id=\"bare\"/>"));
    assert!(doc.content.contains("<example key=\"empty\"/>"));
    assert!(doc
        .content
        .contains("<section name=\"Summary\" required=\"true\"/>"));
}

#[test]
fn markup_of_empty_document() {
    let mut ast = reviewer();
    ast.ast = Ast::default();

    let doc = Renderer::new(Format::Xml).render(&ast).unwrap();
    assert_eq!(doc.content, "<system/>\n");
}

#[test]
fn json_keeps_field_order() {
    let env = EnvSource::new();
    let runtime = runtime();
    let doc = Renderer::new(Format::Json)
        .with_variables(VariableResolver::new(&env, &runtime))
        .render(&reviewer())
        .unwrap();

    let order = ["\"purpose\"", "\"rules\"", "\"guidelines\"", "\"style\"", "\"determinism\""];
    let positions: Vec<usize> = order
        .iter()
        .map(|key| doc.content.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(doc.content.ends_with("}\n"));

    let value: serde_json::Value = serde_json::from_str(&doc.content).unwrap();
    assert_eq!(value["rules"][0]["severity"], "critical");
    assert_eq!(
        value["guidelines"][0]["examples"][0]["phases"][1]["text"],
        "REPORT(findings)"
    );
    assert_eq!(value["determinism"]["ordering"], "stable");
}

#[test]
fn json_example_variants() {
    let doc = Renderer::new(Format::Json)
        .render(&merged(
            UnitDef::new(UnitKind::Skill, "s", "Skill").with_build(|b| {
                b.guideline("g")
                    .example("plain")
                    .example("value")
                    .key("label")
                    .steps([Operation::call("a"), Operation::call("b")]);
            }),
        ))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&doc.content).unwrap();
    let examples = &value["guidelines"][0]["examples"];
    assert_eq!(examples[0], "plain");
    assert_eq!(examples[1]["key"], "label");
    assert_eq!(examples[1]["value"], "value");
    assert_eq!(examples[2]["do"][1], "b()");
}

#[test]
fn yaml_keeps_field_order_and_plain_scalars() {
    let doc = Renderer::new(Format::Yaml).render(&reviewer()).unwrap();

    assert!(doc.content.starts_with("purpose: Reviews diffs\n"));
    assert!(doc.content.contains("severity: critical"));
    assert!(doc.content.contains("ordering: stable"));
    let rules = doc.content.find("rules:").unwrap();
    let guidelines = doc.content.find("guidelines:").unwrap();
    let determinism = doc.content.find("determinism:").unwrap();
    assert!(rules < guidelines && guidelines < determinism);

    let value: serde_json::Value = serde_yaml_ng::from_str(&doc.content).unwrap();
    assert_eq!(value["rules"][0]["id"], "no-secrets");
}

#[test]
fn lenient_mode_keeps_unresolved_placeholders() {
    let doc = Renderer::new(Format::Json).render(&reviewer()).unwrap();
    assert!(doc.content.contains("Read {{ PROJECT_DIR }}"));
}

#[test]
fn strict_mode_fails_on_unresolved_placeholders() {
    let env = EnvSource::new();
    let runtime = RuntimeVars::new();
    let err = Renderer::new(Format::Yaml)
        .with_variables(VariableResolver::new(&env, &runtime))
        .with_strict(true)
        .render(&reviewer())
        .unwrap_err();

    assert_eq!(
        err,
        RenderError::UnresolvedPlaceholder {
            unit: "agent:reviewer".into(),
            name: "PROJECT_DIR".into()
        }
    );
    assert_eq!(err.code(), "unresolved_placeholder");
}

#[test]
fn puzzle_placeholder_outside_context() {
    let doc = Renderer::new(Format::Xml)
        .render(&merged(
            UnitDef::new(UnitKind::Agent, "a", "Owner: {{ puzzle.unknown }}"),
        ))
        .unwrap();

    assert!(doc.content.contains("<purpose>Owner: [puzzle.unknown]</purpose>"));
}

#[test]
fn operation_variables_are_substituted_per_unit() {
    let env = EnvSource::new();
    let runtime = RuntimeVars::new();
    let unit = UnitDef::new(UnitKind::Agent, "a", "Agent")
        .with_meta("model", "opus")
        .with_build(|b| {
            b.guideline("g").steps([Operation::tool(
                "Use",
                [crate::domain::entities::Arg::var("model")],
            )]);
        });
    let merged = merged(unit.clone());

    let doc = Renderer::new(Format::Json)
        .with_variables(VariableResolver::new(&env, &runtime).for_unit(&unit))
        .render(&merged)
        .unwrap();

    assert!(doc.content.contains("\"Use(opus)\""));
}

#[test]
fn include_units_render_nothing() {
    let doc = Renderer::new(Format::Xml)
        .render(&merged(UnitDef::new(UnitKind::Include, "core", "Core")))
        .unwrap();

    assert!(doc.is_empty());
}

#[test]
fn incomplete_rule_fails_the_render() {
    let mut ast = reviewer();
    ast.ast.rules[0].why = None;

    let err = Renderer::new(Format::Json).render(&ast).unwrap_err();
    assert_eq!(err.code(), "missing_required_field");
    assert!(err.to_string().contains("'why'"));
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    for format in [Format::Xml, Format::Json, Format::Yaml] {
        let renderer = Renderer::new(format);
        assert_eq!(
            renderer.render(&reviewer()).unwrap(),
            renderer.render(&reviewer()).unwrap()
        );
    }
}
