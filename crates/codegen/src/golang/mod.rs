/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Go client target: template units producing `models.go` and `client.go`.
 */

mod client;
mod models;


pub use client::{client, ClientProjection, RoleView};
pub use models::{base_data_models, input_models, models_base, response_data_models, response_models};

use crate::runner::RunContext;
use crate::template::{GeneratedFile, Template};

pub const MODELS_FILE: &str = "models.go";
pub const CLIENT_FILE: &str = "client.go";

pub const DEFAULT_PACKAGE: &str = "client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoClientConfig {
    pub package_name: String,
}

impl GoClientConfig {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    /// Preamble written at the top of every generated Go file.
    pub fn header(&self) -> String {
        format!(
            "// Code generated by clientgen. DO NOT EDIT.\npackage {}\n\n",
            self.package_name
        )
    }
}

impl Default for GoClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

/// The units a full client needs. Their dependencies pull in the rest.
pub fn all(config: &GoClientConfig) -> Vec<Template> {
    vec![input_models(config), response_models(config), client(config)]
}

/// Format a fragment as part of a complete file so the formatter sees a
/// package clause, then strip the header again. Output that no longer starts
/// with the header is rejected in favour of the unformatted content.
fn format_go(ctx: &mut RunContext<'_>, config: &GoClientConfig, content: &str) -> String {
    let header = config.header();
    let formatted = ctx.format(&format!("{header}{content}"));
    match formatted.strip_prefix(&header) {
        Some(body) => body.to_string(),
        None => {
            ctx.reject_formatted("formatted output does not start with the file header");
            content.to_string()
        }
    }
}

/// Wrap `content` as a file, or nothing if the unit had nothing to emit.
fn go_file(
    ctx: &mut RunContext<'_>,
    config: &GoClientConfig,
    path: &str,
    content: &str,
) -> Vec<GeneratedFile> {
    if content.is_empty() {
        return Vec::new();
    }
    vec![GeneratedFile::new(path, format_go(ctx, config, content)).with_header(config.header())]
}
