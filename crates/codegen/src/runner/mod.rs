//! Template runner
//!
//! Orders the requested units and their dependencies, runs each exactly once
//! and merges the produced files by path.

mod context;
mod resolve;


pub use context::{RunContext, Warning};
pub use resolve::resolve_order;

use crate::api::ResolvedApi;
use crate::error::{GenerateError, GenerateResult};
use crate::format::Formatter;
use crate::template::{GeneratedFile, Template, TemplateId};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Result of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Merged files keyed by path, in first-seen order.
    pub files: IndexMap<String, GeneratedFile>,
    /// Units in the order they ran.
    pub order: Vec<TemplateId>,
    pub warnings: Vec<Warning>,
}

impl GenerationOutput {
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.get(path)
    }
}

pub struct Runner {
    formatter: Box<dyn Formatter>,
}

impl Runner {
    pub fn new(formatter: impl Formatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }

    /// Run `requested` and everything they depend on against `api`.
    ///
    /// Ordering happens before any unit runs, so a dependency cycle aborts
    /// the run without side effects. Any unit error aborts the whole run and
    /// no files are returned.
    ///
    /// # Errors
    ///
    /// - `GenerateError::Resolve` for a dependency cycle.
    /// - `GenerateError::Unit` wrapping the first failing unit's error.
    pub fn run(&self, api: &ResolvedApi, requested: &[Template]) -> GenerateResult<GenerationOutput> {
        let order = resolve_order(requested)?;
        debug!(
            units = order.len(),
            order = %order
                .iter()
                .map(|t| t.id().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            "resolved template order"
        );

        let mut ctx = RunContext::new(self.formatter.as_ref());
        let mut files: IndexMap<String, GeneratedFile> = IndexMap::new();

        for template in &order {
            ctx.enter_unit(template.id());
            let produced = template
                .generate(api, &mut ctx)
                .map_err(|e| GenerateError::Unit {
                    unit: template.id().clone(),
                    source: Box::new(e),
                })?;
            debug!(unit = %template.id(), files = produced.len(), "template unit generated");

            for file in produced {
                merge_file(&mut files, file);
            }
        }

        let warnings = ctx.into_warnings();
        info!(
            units = order.len(),
            files = files.len(),
            warnings = warnings.len(),
            "generation complete"
        );

        Ok(GenerationOutput {
            files,
            order: order.iter().map(|t| t.id().clone()).collect(),
            warnings,
        })
    }
}

/// First file for a path is stored as-is; later ones append their content
/// and lose their header.
pub fn merge_file(files: &mut IndexMap<String, GeneratedFile>, file: GeneratedFile) {
    match files.get_mut(&file.path) {
        Some(existing) => {
            if !existing.content.is_empty() && !file.content.is_empty() {
                existing.content.push('\n');
            }
            existing.content.push_str(&file.content);
        }
        None => {
            files.insert(file.path.clone(), file);
        }
    }
}
