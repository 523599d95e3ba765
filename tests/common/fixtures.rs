//! Unit file contents shared by CLI tests.

pub const BRAIN: &str = r#"description: Project brain
includes: [core]
purpose: Working agreement for {{ PROJECT_DIR }}
rules:
  - id: stay-in-scope
    severity: high
    text: Only change what the task asks for
    why: Unrequested edits are hard to review
    on_violation: Revert the unrelated change
"#;

pub const CORE_INCLUDE: &str = r#"description: Core conventions
guidelines:
  - id: paths
    text: Generated for {{ TARGET }} in {{ FORMAT }}
"#;

pub const REVIEWER_AGENT: &str = r#"description: Reviews diffs
meta:
  model: opus
includes: [core]
rules:
  - id: no-secrets
    severity: critical
    text: Never print secrets
    why: Leaks are permanent
    on_violation: Stop and redact
"#;

pub const GITHUB_MCP: &str = r#"description: GitHub tools
command: npx
args: ["-y", "@modelcontextprotocol/server-github"]
"#;

pub const CYCLE_A: &str = "description: A\nincludes: [b]\n";
pub const CYCLE_B: &str = "description: B\nincludes: [a]\n";
pub const CYCLE_BRAIN: &str = "description: Project\nincludes: [a]\n";
