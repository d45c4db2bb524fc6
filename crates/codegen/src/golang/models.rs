/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

//! Units that contribute type declarations to `models.go`.

use super::{go_file, GoClientConfig, MODELS_FILE};
use crate::api::{Operation, ResolvedApi};
use crate::emitter::{emit_named_type, emit_struct, TypeNameSet, GRAPHQL_ERROR_STRUCT};
use crate::error::GenerateResult;
use crate::filters;
use crate::schema::SchemaNode;
use crate::template::{Template, TemplateId};
use indexmap::IndexMap;

pub const MODELS_BASE: &str = "golang.models_base";
pub const BASE_DATA_MODELS: &str = "golang.base_data_models";
pub const RESPONSE_DATA_MODELS: &str = "golang.response_data_models";
pub const INPUT_MODELS: &str = "golang.input_models";
pub const RESPONSE_MODELS: &str = "golang.response_models";

/// Shared declarations: the `GraphQLError` struct.
pub fn models_base(config: &GoClientConfig) -> Template {
    let cfg = config.clone();
    Template::new(
        TemplateId::new(MODELS_BASE, config.package_name.clone()),
        move |_, ctx| Ok(go_file(ctx, &cfg, MODELS_FILE, GRAPHQL_ERROR_STRUCT)),
    )
}

/// One type per named definition found in any operation schema. The first
/// definition seen for a name wins.
pub fn base_data_models(config: &GoClientConfig) -> Template {
    let cfg = config.clone();
    Template::new(
        TemplateId::new(BASE_DATA_MODELS, config.package_name.clone()),
        move |api, ctx| {
            let content = base_data_content(api)?;
            Ok(go_file(ctx, &cfg, MODELS_FILE, &content))
        },
    )
}

/// `<Op>ResponseData` for every response whose `data` property is an object.
pub fn response_data_models(config: &GoClientConfig) -> Template {
    let cfg = config.clone();
    let deps_cfg = config.clone();
    Template::new(
        TemplateId::new(RESPONSE_DATA_MODELS, config.package_name.clone()),
        move |api, ctx| {
            let mut names = TypeNameSet::new();
            let mut content = String::new();
            for op in api.operations() {
                if let Some(data) = response_data(op) {
                    let type_name = names.claim(&format!("{}ResponseData", op.name))?;
                    push_declaration(&mut content, &emit_struct(data, &type_name, false)?);
                }
            }
            Ok(go_file(ctx, &cfg, MODELS_FILE, &content))
        },
    )
    .with_dependencies(move || vec![base_data_models(&deps_cfg)])
}

/// `<Op>Input` for every operation that takes variables.
pub fn input_models(config: &GoClientConfig) -> Template {
    let cfg = config.clone();
    let deps_cfg = config.clone();
    Template::new(
        TemplateId::new(INPUT_MODELS, config.package_name.clone()),
        move |api, ctx| {
            let mut names = TypeNameSet::new();
            let mut content = String::new();
            for op in api.operations().iter().filter(|op| filters::has_input(op)) {
                let type_name = names.claim(&format!("{}Input", op.name))?;
                push_declaration(
                    &mut content,
                    &emit_struct(&op.variables_schema, &type_name, false)?,
                );
            }
            Ok(go_file(ctx, &cfg, MODELS_FILE, &content))
        },
    )
    .with_dependencies(move || vec![models_base(&deps_cfg)])
}

/// `<Op>Response` for every operation, carrying the error list.
pub fn response_models(config: &GoClientConfig) -> Template {
    let cfg = config.clone();
    let deps_cfg = config.clone();
    Template::new(
        TemplateId::new(RESPONSE_MODELS, config.package_name.clone()),
        move |api, ctx| {
            let mut names = TypeNameSet::new();
            let mut content = String::new();
            for op in api.operations() {
                let type_name = names.claim(&format!("{}Response", op.name))?;
                push_declaration(
                    &mut content,
                    &emit_struct(&response_shape(op), &type_name, true)?,
                );
            }
            Ok(go_file(ctx, &cfg, MODELS_FILE, &content))
        },
    )
    .with_dependencies(move || {
        vec![
            models_base(&deps_cfg),
            response_data_models(&deps_cfg),
            base_data_models(&deps_cfg),
        ]
    })
}

fn base_data_content(api: &ResolvedApi) -> GenerateResult<String> {
    let mut definitions: IndexMap<&str, &SchemaNode> = IndexMap::new();
    for op in api.operations() {
        for schema in [&op.variables_schema, &op.response_schema] {
            for (name, definition) in schema.definitions().into_iter().flatten() {
                definitions.entry(name.as_str()).or_insert(definition);
            }
        }
    }

    let mut names = TypeNameSet::new();
    let mut content = String::new();
    for (name, definition) in definitions {
        names.claim(name)?;
        push_declaration(&mut content, &emit_named_type(definition, name)?);
    }
    Ok(content)
}

fn response_data(op: &Operation) -> Option<&SchemaNode> {
    op.response_schema.property("data").filter(|data| data.is_object())
}

/// The response schema as the client decodes it: `errors` is supplied by the
/// wrapper and an object `data` points at the `<Op>ResponseData` type.
fn response_shape(op: &Operation) -> SchemaNode {
    let mut schema = op.response_schema.clone();
    let data_type = format!("{}ResponseData", op.name);
    if let Some(properties) = schema.properties_mut() {
        properties.shift_remove("errors");
        if let Some(data) = properties.get_mut("data") {
            if data.is_object() {
                let required = data.required;
                *data = SchemaNode::reference(data_type).named("data");
                data.set_required(required);
            }
        }
    }
    schema
}

/// Declarations in one fragment are separated by a blank line.
fn push_declaration(content: &mut String, declaration: &str) {
    if !content.is_empty() {
        content.push('\n');
    }
    content.push_str(declaration);
}
