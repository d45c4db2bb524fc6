/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Template units and the files they produce.
 */

use crate::api::ResolvedApi;
use crate::error::GenerateResult;
use crate::runner::RunContext;
use std::fmt;
use std::sync::Arc;

/// Logical identity of a template unit: its kind plus its configuration.
/// Two units with the same id are the same unit and run once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId {
    kind: &'static str,
    config: String,
}

impl TemplateId {
    pub fn new(kind: &'static str, config: impl Into<String>) -> Self {
        Self {
            kind,
            config: config.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn config(&self) -> &str {
        &self.config
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.is_empty() {
            f.write_str(self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.config)
        }
    }
}

/// One output file. Several units may target the same `path`; the runner
/// appends their contents and keeps the first header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    pub header: Option<String>,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            header: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Header followed by content, as written to disk.
    pub fn render(&self) -> String {
        match &self.header {
            Some(header) => format!("{header}{}", self.content),
            None => self.content.clone(),
        }
    }
}

type GenerateFn =
    dyn Fn(&ResolvedApi, &mut RunContext<'_>) -> GenerateResult<Vec<GeneratedFile>> + Send + Sync;
type DependenciesFn = dyn Fn() -> Vec<Template> + Send + Sync;

/// A generation step: identity, generate function, dependency list.
///
/// Dependencies are produced lazily so units can name each other freely;
/// the runner expands them while ordering and rejects cycles.
#[derive(Clone)]
pub struct Template {
    id: TemplateId,
    generate: Arc<GenerateFn>,
    dependencies: Arc<DependenciesFn>,
}

impl Template {
    pub fn new<G>(id: TemplateId, generate: G) -> Self
    where
        G: Fn(&ResolvedApi, &mut RunContext<'_>) -> GenerateResult<Vec<GeneratedFile>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            id,
            generate: Arc::new(generate),
            dependencies: Arc::new(Vec::<Template>::new),
        }
    }

    #[must_use]
    pub fn with_dependencies<D>(mut self, dependencies: D) -> Self
    where
        D: Fn() -> Vec<Template> + Send + Sync + 'static,
    {
        self.dependencies = Arc::new(dependencies);
        self
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Direct dependencies in declared order.
    pub fn dependencies(&self) -> Vec<Template> {
        (self.dependencies)()
    }

    /// Run the unit against `api`.
    ///
    /// # Errors
    ///
    /// Whatever the unit's generate function returns.
    pub fn generate(
        &self,
        api: &ResolvedApi,
        ctx: &mut RunContext<'_>,
    ) -> GenerateResult<Vec<GeneratedFile>> {
        (self.generate)(api, ctx)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::IdentityFormatter;

    #[test]
    fn test_template_id_display() {
        assert_eq!(TemplateId::new("golang.client", "").to_string(), "golang.client");
        assert_eq!(
            TemplateId::new("golang.client", "api").to_string(),
            "golang.client(api)"
        );
    }

    #[test]
    fn test_template_id_identity() {
        assert_eq!(TemplateId::new("a", "x"), TemplateId::new("a", "x"));
        assert_ne!(TemplateId::new("a", "x"), TemplateId::new("a", "y"));
        assert_ne!(TemplateId::new("a", "x"), TemplateId::new("b", "x"));
    }

    #[test]
    fn test_generated_file_render() {
        let file = GeneratedFile::new("models.go", "type A struct {}\n");
        assert_eq!(file.render(), "type A struct {}\n");

        let file = file.with_header("package api\n\n");
        assert_eq!(file.render(), "package api\n\ntype A struct {}\n");
    }

    #[test]
    fn test_template_generate_and_dependencies() {
        let leaf = Template::new(TemplateId::new("leaf", ""), |_, _| {
            Ok(vec![GeneratedFile::new("out.txt", "leaf")])
        });
        let leaf_for_root = leaf.clone();
        let root = Template::new(TemplateId::new("root", ""), |_, _| Ok(vec![]))
            .with_dependencies(move || vec![leaf_for_root.clone()]);

        assert!(leaf.dependencies().is_empty());
        let deps = root.dependencies();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].id(), &TemplateId::new("leaf", ""));

        let formatter = IdentityFormatter;
        let mut ctx = RunContext::new(&formatter);
        let files = leaf.generate(&ResolvedApi::default(), &mut ctx).unwrap();
        assert_eq!(files[0].content, "leaf");
    }
}
