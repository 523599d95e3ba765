mod common;

use common::*;

#[test]
fn make_shorthand_scaffolds_a_unit() {
    let env = TestEnv::builder().build();

    let result = env.run(&["make:agent", "Code Reviewer"]);

    assert_success!(result);
    assert_written!(env, ".brain/agents/code-reviewer.yaml");
    assert!(result
        .stdout
        .contains("[MAKE] Created agent:code-reviewer .brain/agents/code-reviewer.yaml"));
    let content = env.read_project_file(".brain/agents/code-reviewer.yaml");
    assert!(content.starts_with("id: code-reviewer\ndescription: Code reviewer agent\n"));
}

#[test]
fn make_refuses_to_overwrite_without_force() {
    let env = TestEnv::builder().build();

    assert_success!(env.run(&["make", "command", "review"]));
    let again = env.run(&["make:command", "review"]);

    assert!(!again.success);
    assert!(again.stderr.contains("already exists"), "{}", again.stderr);

    assert_success!(env.run(&["make:command", "review", "--force", "-d", "Review: staged"]));
    assert!(env
        .read_project_file(".brain/commands/review.yaml")
        .contains("description: \"Review: staged\""));
}

#[test]
fn scaffolded_units_compile() {
    let env = TestEnv::builder().build();
    for args in [
        ["make:brain", "project"],
        ["make:include", "core"],
        ["make:agent", "reviewer"],
        ["make:skill", "deploy"],
        ["make:command", "review"],
        ["make:mcp", "github"],
    ] {
        assert_success!(env.run(&args));
    }

    let result = env.run(&["compile", "claude"]);

    assert_success!(result);
    assert_written!(env, ".claude/CLAUDE.md");
    assert_written!(env, ".claude/skills/deploy/SKILL.md");
    assert_written!(env, ".claude/commands/review.md");
    assert_written!(env, ".mcp.json");
    let brain = env.read_project_file(".claude/CLAUDE.md");
    assert!(!brain.contains("{{ PROJECT_DIR }}"));
}

#[test]
fn make_json_reports_the_path() {
    let env = TestEnv::builder().build();

    let result = env.run(&["--json", "make:mcp", "github"]);

    assert_success!(result);
    let events = result.events();
    assert_eq!(events[1]["event"], "data");
    assert_eq!(events[1]["kind"], "mcp");
    assert_eq!(events[1]["id"], "github");
    assert_eq!(events[1]["path"], ".brain/mcp/github.yaml");
}

#[test]
fn make_unknown_kind_is_a_usage_error() {
    let env = TestEnv::builder().build();

    let result = env.run(&["make:widget", "x"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
