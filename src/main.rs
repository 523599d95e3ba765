//! brainc CLI - compile declarative agent configuration for AI coding hosts
//!
//! Usage: brainc <COMMAND>
//!
//! Commands:
//!   compile   Compile units for one or every enabled target
//!   make      Scaffold a unit source file (`make:<kind> <name>`)
//!   list      List registered units (`<kind>:list`)
//!   docs      Search documentation next to the source directory

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use brainc::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{normalize_args, Cli, Commands};
use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args()));
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        let ui = UiContext::new(cli.json, cli.color, &Config::default());
        commands::report_error(command_name(&cli.command), &err, &ui);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = cli.source.as_path();
    match &cli.command {
        Commands::Compile {
            target,
            strict,
            dry_run,
        } => commands::compile::cmd_compile(
            source, *target, *strict, *dry_run, cli.json, cli.verbose, cli.color,
        ),
        Commands::Make {
            kind,
            name,
            description,
            force,
        } => commands::make::cmd_make(
            source,
            *kind,
            name,
            description.clone(),
            *force,
            cli.json,
            cli.color,
        ),
        Commands::List { kind } => {
            commands::list::cmd_list(source, *kind, cli.json, cli.verbose, cli.color)
        }
        Commands::Docs { keywords } => {
            commands::docs::cmd_docs(source, keywords, cli.json, cli.color)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compile { .. } => "compile",
        Commands::Make { .. } => "make",
        Commands::List { .. } => "list",
        Commands::Docs { .. } => "docs",
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
