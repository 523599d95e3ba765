//! Property tests for deterministic compilation.

use std::path::Path;

use chrono::NaiveDate;
use proptest::prelude::*;

use brainc::application::{CompileOptions, CompileUseCase};
use brainc::domain::ports::FileSystem;
use brainc::infrastructure::{all_adapters, MemoryFs};
use brainc::{UnitDef, UnitKind};

use crate::support::VecSource;

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ,.<>&\"'-]{0,39}").unwrap()
}

fn units(guidelines: &[String], rules: &[String]) -> Vec<UnitDef> {
    let guidelines = guidelines.to_vec();
    let rules = rules.to_vec();
    vec![
        UnitDef::new(UnitKind::Include, "core", "Core").with_build(move |b| {
            for (i, text) in guidelines.iter().enumerate() {
                b.guideline(format!("g{}", i)).text(text.as_str());
            }
        }),
        UnitDef::new(UnitKind::Brain, "brain", "Project")
            .with_include("core")
            .with_build(move |b| {
                for (i, text) in rules.iter().enumerate() {
                    b.rule(format!("r{}", i))
                        .high()
                        .text(text.as_str())
                        .why("because")
                        .on_violation("stop");
                }
            }),
        UnitDef::new(UnitKind::Agent, "reviewer", "Reviews").with_include("core"),
    ]
}

fn compile(units: Vec<UnitDef>) -> Vec<(std::path::PathBuf, String)> {
    let fs = MemoryFs::new();
    let use_case = CompileUseCase::new(VecSource(units), fs.clone(), all_adapters());
    let options = CompileOptions::new("/work/.brain")
        .with_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    let result = use_case.execute(&options).unwrap();
    assert!(result.is_success());

    fs.paths()
        .into_iter()
        .map(|path| {
            let content = fs.read(Path::new(&path)).unwrap();
            (path, content)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: two compiles of the same graph produce byte-identical files.
    #[test]
    fn property_compile_is_idempotent(
        guidelines in proptest::collection::vec(text(), 0..6),
        rules in proptest::collection::vec(text(), 0..4),
    ) {
        let first = compile(units(&guidelines, &rules));
        let second = compile(units(&guidelines, &rules));

        prop_assert_eq!(first.len(), 8);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: rules and guidelines keep declaration order in every format.
    #[test]
    fn property_declaration_order_is_stable(count in 2usize..8) {
        let guidelines: Vec<String> = (0..count).map(|i| format!("step number {}", i)).collect();
        let files = compile(units(&guidelines, &[]));

        for (path, content) in &files {
            if !path.ends_with("CLAUDE.md") && !path.ends_with("AGENTS.md")
                && !path.ends_with("GEMINI.md") && !path.ends_with("QWEN.md") {
                continue;
            }
            let positions: Vec<usize> = guidelines
                .iter()
                .map(|g| content.find(g.as_str()).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", content);
        }
    }
}
