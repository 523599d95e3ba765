mod common;

use common::*;

#[test]
fn list_groups_units_by_kind() {
    let env = TestEnv::builder().with_standard_units().build();

    let result = env.run(&["list"]);

    assert_success!(result);
    assert!(result.stdout.starts_with("[LIST] brainc list\n"));
    assert!(result.stdout.contains("\nbrain\n  brain:brain Project brain\n"));
    assert!(result.stdout.contains("\nagent\n  agent:reviewer Reviews diffs\n"));
    assert!(result.stdout.contains("\ninclude\n  include:core Core conventions\n"));
    assert!(result.stdout.contains("\nmcp\n  mcp:github GitHub tools\n"));
}

#[test]
fn kind_list_shorthand_filters() {
    let env = TestEnv::builder().with_standard_units().build();

    let result = env.run(&["agent:list", "-v"]);

    assert_success!(result);
    assert!(result.stdout.contains("agent:reviewer"));
    assert!(!result.stdout.contains("brain:brain"));
    assert!(result.stdout.contains("[>] includes core"));
    assert!(result.stdout.contains("[>] 1 rules, 0 guidelines"));
}

#[test]
fn list_json() {
    let env = TestEnv::builder().with_standard_units().build();

    let result = env.run(&["--json", "mcp:list"]);

    assert_success!(result);
    let events = result.events();
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[1]["count"], 1);
    assert_eq!(events[1]["units"][0]["id"], "github");
    assert_eq!(events[2]["event"], "complete");
}

#[test]
fn list_reports_duplicate_ids() {
    let env = TestEnv::builder()
        .with_unit("skills/a.yaml", "id: dup\ndescription: First\n")
        .with_unit("skills/b.yaml", "id: dup\ndescription: Second\n")
        .build();

    let result = env.run(&["--json", "list"]);

    assert!(!result.success);
    assert_eq!(result.events()[0]["code"], "duplicate_unit_id");
}
