/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Text templates bound to serialisable projections of the API description.
 */

use crate::api::Operation;
use crate::emitter::capitalize;
use crate::error::RenderError;
use crate::filters;
use serde::Serialize;
use std::error::Error as _;
use tera::{Context, Tera};

/// Wraps a `Tera` instance holding embedded template sources.
///
/// Auto-escaping is disabled; output is source code, not HTML.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        Self { tera }
    }

    /// Register a template under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` if the source does not parse.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.tera
            .add_raw_template(name, source)
            .map_err(|e| template_error(name, &e))
    }

    /// Builder form of [`Renderer::add_template`].
    ///
    /// # Errors
    ///
    /// See [`Renderer::add_template`].
    pub fn with_template(mut self, name: &str, source: &str) -> Result<Self, RenderError> {
        self.add_template(name, source)?;
        Ok(self)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render `name` with the fields of `data` as top-level variables.
    ///
    /// # Errors
    ///
    /// - `RenderError::UnknownTemplate` if nothing is registered under `name`.
    /// - `RenderError::Template` if `data` is not a map or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        if !self.has_template(name) {
            return Err(RenderError::UnknownTemplate(name.to_string()));
        }
        let context = Context::from_serialize(data).map_err(|e| template_error(name, &e))?;
        self.tera
            .render(name, &context)
            .map_err(|e| template_error(name, &e))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tera nests the useful message in its source chain.
fn template_error(name: &str, error: &tera::Error) -> RenderError {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    RenderError::Template {
        name: name.to_string(),
        message,
    }
}

/// Per-operation view used by client templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationView {
    /// Name as declared, used in the operation URL.
    pub name: String,
    /// Go identifier for methods and the `<Op>Input`/`<Op>Response` types.
    pub ident: String,
    pub has_input: bool,
    pub requires_authentication: bool,
}

impl From<&Operation> for OperationView {
    fn from(op: &Operation) -> Self {
        Self {
            name: op.name.clone(),
            ident: capitalize(&op.name),
            has_input: filters::has_input(op),
            requires_authentication: op.requires_authentication,
        }
    }
}
