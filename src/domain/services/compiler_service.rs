//! Compiler Service
//!
//! Renders resolved units for every requested target. Targets are compiled in
//! parallel (rayon) from the same immutable merged ASTs; each target either
//! produces its complete file set or fails on its own.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde_json::Value;

use crate::domain::entities::{Metadata, OutputFile, UnitDef};
use crate::domain::ports::{AdapterError, TargetAdapter};
use crate::domain::services::include_resolver::MergedAst;
use crate::domain::services::registry::UnitRegistry;
use crate::domain::services::renderer::{RenderError, Renderer};
use crate::domain::services::variable_resolver::{
    substitute, EnvSource, RuntimeVars, UnresolvedPlaceholder, VariableResolver,
};
use crate::domain::value_objects::{Format, Target};

/// Why a single target failed
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{unit}: {source}")]
    Adapter {
        unit: String,
        #[source]
        source: AdapterError,
    },
}

impl TargetError {
    pub fn code(&self) -> &'static str {
        match self {
            TargetError::Render(e) => e.code(),
            TargetError::Adapter { .. } => "adapter_failed",
        }
    }
}

/// Everything one compile run shares across targets
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    pub registry: &'a UnitRegistry,
    pub merged: &'a [MergedAst],
    pub env: &'a EnvSource,
    /// Target-independent runtime variables; per-target ones are added on top
    pub runtime: &'a RuntimeVars,
    /// Targets to compile; empty means every adapter
    pub targets: &'a [Target],
    /// Format overrides; targets not listed use their adapter's default
    pub formats: &'a BTreeMap<Target, Format>,
    pub strict: bool,
}

/// Result of compiling one target
#[derive(Debug)]
pub struct TargetOutput {
    pub target: Target,
    pub format: Format,
    pub result: Result<Vec<OutputFile>, TargetError>,
}

impl TargetOutput {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Compiler Service
pub struct CompilerService {
    adapters: Vec<Box<dyn TargetAdapter>>,
}

impl CompilerService {
    /// Create a new compiler service with the given adapters
    pub fn new(adapters: Vec<Box<dyn TargetAdapter>>) -> Self {
        Self { adapters }
    }

    /// Get a reference to the adapters
    pub fn adapters(&self) -> &[Box<dyn TargetAdapter>] {
        &self.adapters
    }

    /// Compile every requested target, in parallel.
    ///
    /// Results come back in adapter order regardless of completion order.
    pub fn compile(&self, request: &CompileRequest<'_>) -> Vec<TargetOutput> {
        self.adapters
            .par_iter()
            .filter(|adapter| {
                request.targets.is_empty() || request.targets.contains(&adapter.target())
            })
            .map(|adapter| self.compile_target(adapter.as_ref(), request))
            .collect()
    }

    fn compile_target(
        &self,
        adapter: &dyn TargetAdapter,
        request: &CompileRequest<'_>,
    ) -> TargetOutput {
        let target = adapter.target();
        let format = request
            .formats
            .get(&target)
            .copied()
            .unwrap_or_else(|| adapter.default_format());

        let span = tracing::info_span!("target", host = target.as_str(), format = %format);
        let _enter = span.enter();

        let result = Self::target_files(adapter, format, request);
        match &result {
            Ok(files) => tracing::info!(files = files.len(), "target compiled"),
            Err(e) => tracing::warn!(error = %e, "target failed"),
        }

        TargetOutput {
            target,
            format,
            result,
        }
    }

    fn target_files(
        adapter: &dyn TargetAdapter,
        format: Format,
        request: &CompileRequest<'_>,
    ) -> Result<Vec<OutputFile>, TargetError> {
        let target = adapter.target();
        let runtime = request
            .runtime
            .clone()
            .with("TARGET", target.as_str())
            .with("TARGET_DIR", target.directory_name())
            .with("FORMAT", format.as_str());

        let mut outputs = Vec::new();
        for merged in request.merged {
            if !merged.kind.renders_document() {
                continue;
            }

            let def = request.registry.get(merged.handle).def();
            let variables = VariableResolver::new(request.env, &runtime).for_unit(def);
            let document = Renderer::new(format)
                .with_variables(variables)
                .with_strict(request.strict)
                .render(merged)?;

            let header = Self::resolve_header(
                def,
                variables,
                VariableResolver::new(request.env, &runtime).with_hooks(def.hooks()),
                request.strict,
            )?;
            let files = adapter
                .compile(&header, &document)
                .map_err(|source| TargetError::Adapter {
                    unit: def.label(),
                    source,
                })?;
            outputs.extend(files);
        }

        let units: Vec<&UnitDef> = request
            .registry
            .iter()
            .map(|(_, record)| record.def())
            .collect();
        let post = adapter
            .post_compile(&units)
            .map_err(|source| TargetError::Adapter {
                unit: target.as_str().to_string(),
                source,
            })?;
        outputs.extend(post);

        for output in &outputs {
            for diagnostic in adapter.validate(output) {
                tracing::warn!(path = %output.path().display(), "{}", diagnostic.message);
            }
        }

        Ok(outputs)
    }

    /// Substitute placeholders in the description and string metadata that
    /// adapters copy into frontmatter.
    ///
    /// Metadata values resolve without the unit's own metadata in the chain,
    /// so `model: "{{ MODEL }}"` cannot resolve to itself.
    fn resolve_header(
        def: &UnitDef,
        variables: VariableResolver<'_>,
        meta_variables: VariableResolver<'_>,
        strict: bool,
    ) -> Result<UnitDef, RenderError> {
        let unresolved = |e: UnresolvedPlaceholder| RenderError::UnresolvedPlaceholder {
            unit: def.label(),
            name: e.name,
        };

        let description =
            substitute(def.description(), Some(&variables), strict).map_err(unresolved)?;
        let metadata = def
            .metadata()
            .iter()
            .map(|(key, value)| {
                substitute_value(value, &meta_variables, strict).map(|value| (key.clone(), value))
            })
            .collect::<Result<Metadata, _>>()
            .map_err(unresolved)?;

        Ok(def.clone().with_description(description).with_metadata(metadata))
    }
}

fn substitute_value(
    value: &Value,
    variables: &VariableResolver<'_>,
    strict: bool,
) -> Result<Value, UnresolvedPlaceholder> {
    Ok(match value {
        Value::String(text) => Value::String(substitute(text, Some(variables), strict)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| substitute_value(item, variables, strict))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| {
                    substitute_value(item, variables, strict).map(|item| (key.clone(), item))
                })
                .collect::<Result<_, _>>()?,
        ),
        other => other.clone(),
    })
}
