use super::*;
use crate::domain::entities::{
    Arg, Example, Operation, OrderingPolicy, Randomness, Severity, Step,
};
use std::fs;
use tempfile::tempdir;

const REVIEWER: &str = r#"
description: Reviews diffs
meta:
  model: opus
  tools: [Read, Grep]
includes: [core, core]
rules:
  - id: no-secrets
    severity: critical
    text: Never print secrets
    why: Leaks are permanent
    on_violation: Stop and redact
guidelines:
  - id: flow
    text: Review in phases
    examples:
      - plain text
      - { key: label, value: keyed text }
      - phases:
          - { id: scan, text: "Read {{ PROJECT_DIR }}" }
          - { id: report, text: { report: findings } }
      - do:
          - call: Grep
          - delegate: { agent: explore, args: [{ var: target }] }
          - if:
              cond: tests fail
              then: [{ call: fix }]
              else: [{ note: done }]
style:
  tone: direct
  forbid: [basically]
response_contract:
  sections:
    - { name: Summary, brief: One line, required: true }
determinism:
  ordering: stable
  randomness: "off"
"#;

fn parse(kind: UnitKind, path: &str, content: &str) -> BraincResult<UnitDef> {
    FsUnitRepository::new().parse(kind, Path::new(path), content)
}

#[test]
fn parse_full_unit_file() {
    let unit = parse(UnitKind::Agent, "agents/reviewer.yaml", REVIEWER).unwrap();

    assert_eq!(unit.label(), "agent:reviewer");
    assert_eq!(unit.description(), "Reviews diffs");
    assert_eq!(unit.includes(), &["core".to_string(), "core".to_string()]);
    assert_eq!(unit.metadata().get("model"), Some(&serde_json::json!("opus")));

    let ast = unit.build().finish();
    assert_eq!(ast.rules[0].severity, Some(Severity::Critical));
    assert!(ast.rules[0].is_closed());
    assert_eq!(ast.style.as_ref().unwrap().forbidden_phrases, vec!["basically"]);
    assert!(ast.response.as_ref().unwrap().sections[0].required);
    let determinism = ast.determinism.unwrap();
    assert_eq!(determinism.ordering, Some(OrderingPolicy::Stable));
    assert_eq!(determinism.randomness, Some(Randomness::Off));
}

#[test]
fn parse_examples_in_order() {
    let unit = parse(UnitKind::Agent, "agents/reviewer.yaml", REVIEWER).unwrap();
    let ast = unit.build().finish();
    let examples = &ast.guidelines[0].examples;

    assert_eq!(examples.len(), 4);
    assert_eq!(examples[0], Example::Scalar(Step::from("plain text")));
    assert_eq!(
        examples[1],
        Example::Keyed {
            key: "label".into(),
            value: Step::from("keyed text")
        }
    );

    let Example::Phased(phases) = &examples[2] else {
        panic!("expected phases, got {:?}", examples[2]);
    };
    assert_eq!(phases[0].id, "scan");
    assert_eq!(phases[1].text, Step::Op(Operation::report("findings")));

    let Example::Actions(steps) = &examples[3] else {
        panic!("expected actions, got {:?}", examples[3]);
    };
    assert_eq!(
        steps,
        &vec![
            Step::Op(Operation::call("Grep")),
            Step::Op(Operation::delegate("explore", [Arg::var("target")])),
            Step::Op(Operation::conditional(
                "tests fail",
                vec![Operation::call("fix")],
                Some(vec![Operation::note("done")]),
            )),
        ]
    );
}

#[test]
fn id_defaults_to_file_stem() {
    let unit = parse(UnitKind::Command, "commands/ship-it.yml", "description: Ship").unwrap();
    assert_eq!(unit.id(), "ship-it");

    let brain = parse(UnitKind::Brain, "brain.yaml", "description: Project").unwrap();
    assert_eq!(brain.id(), "brain");

    let explicit = parse(UnitKind::Agent, "agents/x.yaml", "id: other\ndescription: X").unwrap();
    assert_eq!(explicit.id(), "other");
}

#[test]
fn mcp_fields() {
    let unit = parse(
        UnitKind::Mcp,
        "mcp/github.yaml",
        "description: GitHub\ncommand: npx\nargs: [-y, server-github]\nenv: { TOKEN: x }",
    )
    .unwrap();

    let server = unit.mcp().unwrap();
    assert_eq!(server.command.as_deref(), Some("npx"));
    assert_eq!(server.args, vec!["-y", "server-github"]);
    assert_eq!(server.env.get("TOKEN").map(String::as_str), Some("x"));
}

#[test]
fn mcp_fields_on_other_kinds_are_rejected() {
    let err = parse(UnitKind::Agent, "agents/a.yaml", "description: A\ncommand: npx").unwrap_err();
    assert_eq!(err.code(), "invalid_unit_file");
}

#[test]
fn unknown_field_is_an_error() {
    let err = parse(UnitKind::Agent, "agents/a.yaml", "description: A\nrulez: []").unwrap_err();

    assert_eq!(err.code(), "invalid_unit_file");
    assert!(err.to_string().contains("agents/a.yaml"));
    assert!(err.to_string().contains("rulez"));
}

#[test]
fn empty_file_has_empty_description() {
    let unit = parse(UnitKind::Include, "includes/empty.yaml", "").unwrap();
    assert_eq!(unit.description(), "");
    assert!(unit.build().finish().is_empty());
}

#[test]
fn kind_for_path_uses_location() {
    assert_eq!(kind_for_path(Path::new(".brain/brain.yaml")), Some(UnitKind::Brain));
    assert_eq!(
        kind_for_path(Path::new(".brain/agents/reviewer.yaml")),
        Some(UnitKind::Agent)
    );
    assert_eq!(kind_for_path(Path::new(".brain/mcp/github.yml")), Some(UnitKind::Mcp));
    assert_eq!(kind_for_path(Path::new(".brain/misc/x.yaml")), None);
    assert_eq!(
        kind_for_path(Path::new(".brain/agents/brain.yaml")),
        Some(UnitKind::Agent)
    );
    assert_eq!(kind_for_path(Path::new(".brain/agents/notes.md")), None);
}

#[test]
fn load_all_reads_sorted_files_by_kind() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("agents")).unwrap();
    fs::create_dir_all(root.join("includes")).unwrap();
    fs::write(root.join("brain.yaml"), "description: Project\nincludes: [core]").unwrap();
    fs::write(root.join("agents/zeta.yaml"), "description: Z").unwrap();
    fs::write(root.join("agents/alpha.yaml"), "description: A").unwrap();
    fs::write(root.join("agents/README.md"), "not a unit").unwrap();
    fs::write(root.join("agents/.hidden.yaml"), "description: H").unwrap();
    fs::write(root.join("includes/core.yaml"), "description: Core").unwrap();

    let units = FsUnitRepository::new().load_all(root).unwrap();

    let labels: Vec<String> = units.iter().map(UnitDef::label).collect();
    assert_eq!(
        labels,
        vec!["brain:brain", "agent:alpha", "agent:zeta", "include:core"]
    );
}

#[test]
fn load_all_missing_directory() {
    let dir = tempdir().unwrap();
    let err = FsUnitRepository::new()
        .load_all(&dir.path().join("missing"))
        .unwrap_err();
    assert_eq!(err.code(), "directory_not_found");
}

#[test]
fn load_by_path_infers_kind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("skills").join("deploy.yaml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "description: Deploys").unwrap();

    let unit = FsUnitRepository::new().load_by_path(&path).unwrap();
    assert_eq!(unit.label(), "skill:deploy");
}

#[test]
fn invalid_yaml_reports_file() {
    let err = parse(UnitKind::Agent, "agents/bad.yaml", "description: [unclosed").unwrap_err();
    assert!(err.to_string().starts_with("invalid unit file agents/bad.yaml:"));
}
