/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use crate::template::TemplateId;
use std::time::Duration;
use thiserror::Error;

/// Top-level error type for a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("API description error: {0}")]
    Api(#[from] ApiError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Naming error: {0}")]
    Naming(#[from] NamingError),

    #[error("Dependency error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Template {unit} failed: {source}")]
    Unit {
        unit: TemplateId,
        #[source]
        source: Box<GenerateError>,
    },
}

impl GenerateError {
    /// Strip any `Unit` wrappers and return the error that caused the failure.
    #[must_use]
    pub fn root_cause(&self) -> &GenerateError {
        match self {
            Self::Unit { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Errors raised while loading a resolved API description
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API description: {0}")]
    InvalidDescription(String),

    #[error("Duplicate operation name: {0}")]
    DuplicateOperation(String),

    #[error("Operation {operation}: {source}")]
    InvalidSchema {
        operation: String,
        #[source]
        source: SchemaError,
    },
}

/// A schema tree violates the shape the generator relies on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Invalid schema at {path}: {message}")]
    Shape { path: String, message: String },
}

impl SchemaError {
    pub(crate) fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Two schema names map to the same Go identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Fields \"{first}\" and \"{second}\" of {type_name} both become {identifier}")]
    FieldCollision {
        type_name: String,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Types \"{first}\" and \"{second}\" both become {identifier}")]
    TypeCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Client methods \"{first}\" and \"{second}\" both become {identifier}")]
    MethodCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Errors raised while ordering template units
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Dependency cycle: {}", format_cycle(.cycle))]
    DependencyCycle { cycle: Vec<TemplateId> },
}

fn format_cycle(cycle: &[TemplateId]) -> String {
    cycle
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Errors raised while rendering a text template
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Failed to render {name}: {message}")]
    Template { name: String, message: String },
}

/// Pretty-printer failures. These never abort a run.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("{0} is not installed")]
    NotFound(String),

    #[error("{program} exited with status {status:?}: {stderr}")]
    NonZeroExit {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("{program} did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
