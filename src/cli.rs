use std::path::PathBuf;

use brainc::domain::entities::UnitKind;
use brainc::domain::value_objects::Target;
use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// brainc - compile declarative agent configuration for AI coding hosts
#[derive(Parser, Debug)]
#[command(name = "brainc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Shorthands: `make:<kind> <name>` and `<kind>:list` are accepted.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the source directory
    #[arg(short, long, global = true, default_value = ".brain")]
    pub source: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile units for one target, or every enabled target
    Compile {
        /// Only compile this target
        #[arg(value_enum)]
        target: Option<Target>,

        /// Fail a target when a placeholder stays unresolved
        #[arg(long)]
        strict: bool,

        /// Report what would be written without touching the disk
        #[arg(long)]
        dry_run: bool,
    },

    /// Scaffold a unit source file (also `make:<kind> <name>`)
    Make {
        /// Kind of unit to create
        #[arg(value_enum)]
        kind: UnitKind,

        /// Unit name; normalized to a kebab-case id
        name: String,

        /// Description written into the file
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List registered units (also `<kind>:list`)
    List {
        /// Only list units of this kind
        #[arg(long, value_enum)]
        kind: Option<UnitKind>,
    },

    /// Search the docs/ directory next to the source directory
    Docs {
        /// Keywords to rank documents by
        keywords: Vec<String>,
    },
}

/// Rewrite the colon shorthands into regular subcommands.
///
/// `make:agent x` becomes `make agent x` and `agent:list` becomes
/// `list --kind agent`. Only the first positional argument is considered.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter();
    if let Some(program) = args.next() {
        out.push(program);
    }

    let mut expects_value = false;
    let mut done = false;
    for arg in args {
        if done {
            out.push(arg);
            continue;
        }
        if expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }
        if arg.starts_with('-') {
            expects_value = matches!(arg.as_str(), "-s" | "--source" | "--color");
            out.push(arg);
            continue;
        }

        done = true;
        if let Some(kind) = arg.strip_prefix("make:") {
            out.push("make".to_string());
            out.push(kind.to_string());
        } else if let Some(kind) = arg.strip_suffix(":list") {
            out.push("list".to_string());
            out.push("--kind".to_string());
            out.push(kind.to_string());
        } else {
            out.push(arg);
        }
    }

    out
}
