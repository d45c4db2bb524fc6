//! Clientgen Code Generation Library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library turns a resolved API description into typed client sources.
//! It works only with in-memory data: loading the description and writing the
//! generated files are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use clientgen_codegen::format::IdentityFormatter;
//! use clientgen_codegen::golang::{self, GoClientConfig};
//! use clientgen_codegen::{ResolvedApi, Runner};
//!
//! let api = ResolvedApi::from_json_str(r#"{
//!   "operations": [{
//!     "name": "GetUser",
//!     "operationType": "QUERY",
//!     "variablesSchema": {
//!       "type": "object",
//!       "properties": { "id": { "type": "string" } },
//!       "required": ["id"]
//!     },
//!     "responseSchema": {
//!       "type": "object",
//!       "properties": { "name": { "type": "string" } }
//!     }
//!   }]
//! }"#)?;
//!
//! let runner = Runner::new(IdentityFormatter);
//! let output = runner.run(&api, &golang::all(&GoClientConfig::default()))?;
//! let models = output.file("models.go").expect("models are always generated");
//! assert!(models.content.contains("type GetUserInput struct"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod emitter;
pub mod error;
pub mod filters;
pub mod format;
pub mod golang;
pub mod render;
pub mod runner;
pub mod schema;
pub mod template;

// Re-export the types most callers need
pub use api::{AuthenticationConfig, Operation, OperationType, ResolvedApi};
pub use error::{
    ApiError, FormatError, GenerateError, GenerateResult, NamingError, RenderError, ResolveError,
    SchemaError,
};
pub use format::{CommandFormatter, Formatter, IdentityFormatter};
pub use runner::{resolve_order, GenerationOutput, RunContext, Runner, Warning};
pub use schema::{SchemaKind, SchemaNode};
pub use template::{GeneratedFile, Template, TemplateId};
